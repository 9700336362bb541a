//! HTTP handlers and route configuration.

mod auth;
mod categories;
mod health;
mod posts;
mod users;

use actix_web::{HttpResponse, http::header::ContentType, web};
use serde::Serialize;

use quill_shared::{ApiResponse, Validate};
use quill_store::BlogStore;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            .service(
                web::scope("/users")
                    .route("/{id}", web::delete().to(users::delete_user))
                    .route("/{id}/posts", web::get().to(users::list_posts)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::delete().to(posts::delete_post))
                    .route("/{id}/comments", web::get().to(posts::list_comments))
                    .route("/{id}/comments", web::post().to(posts::add_comment))
                    .route("/{id}/categories", web::get().to(posts::list_categories))
                    .route(
                        "/{id}/categories/{category_id}",
                        web::put().to(posts::link_category),
                    ),
            )
            .service(
                web::scope("/categories")
                    .route("", web::get().to(categories::list_categories))
                    .route("", web::post().to(categories::create_category)),
            ),
    );
}

/// Malformed or mistyped JSON bodies answer 400 as a problem document.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Reject the body with 422 if any field rule fails.
fn validated<T: Validate>(body: T) -> AppResult<T> {
    body.validate().map_err(AppError::Validation)?;
    Ok(body)
}

/// Serve a read query through the cache.
///
/// On a miss the query runs and the cache is filled under the same read
/// guard, so a concurrent mutation cannot interleave between the two.
async fn cached_query<T, F>(state: &AppState, key: String, query: F) -> AppResult<HttpResponse>
where
    T: Serialize,
    F: FnOnce(&BlogStore) -> T,
{
    if let Some(body) = state.cache.get(&key).await {
        tracing::debug!(%key, "Query cache hit");
        return Ok(json_body(body));
    }

    let store = state.store.read().await;
    let body = serde_json::to_string(&ApiResponse::ok(query(&*store)))
        .map_err(|e| AppError::Internal(e.to_string()))?;
    state.cache.set(&key, &body, Some(state.cache_ttl)).await;
    drop(store);

    Ok(json_body(body))
}

fn json_body(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body)
}
