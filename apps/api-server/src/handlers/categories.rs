//! Category handlers.

use actix_web::{HttpResponse, web};

use quill_core::ports::BlogRepository;
use quill_shared::ApiResponse;
use quill_shared::dto::CreateCategoryRequest;

use super::{cached_query, validated};
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    cached_query(&state, "categories:all".to_string(), |store| {
        store.categories()
    })
    .await
}

/// POST /api/categories
pub async fn create_category(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = validated(body.into_inner())?;

    let mut store = state.store.write().await;
    let category = store.add_category(
        req.name.trim().to_string(),
        req.description.trim().to_string(),
    )?;
    state.invalidate_reads().await;
    drop(store);

    Ok(HttpResponse::Created().json(ApiResponse::ok(category)))
}
