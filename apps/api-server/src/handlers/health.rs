//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use quill_core::domain::StoreStats;
use quill_core::ports::BlogRepository;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub store: StoreStats,
}

/// Health check endpoint - returns server status and table sizes.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store = state.store.read().await.stats();

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        store,
    })
}
