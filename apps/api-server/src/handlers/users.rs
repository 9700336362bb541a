//! User handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::UserId;
use quill_core::ports::BlogRepository;

use super::cached_query;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// DELETE /api/users/{id} - a user may only delete themselves.
///
/// Cascades to the user's posts and comments. Deleting an already removed
/// account answers 204 as well.
pub async fn delete_user(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let user_id = UserId::new(path.into_inner());
    identity.require_owner(user_id)?;

    let mut store = state.store.write().await;
    store.delete_user(user_id);
    state.invalidate_reads().await;
    drop(store);

    tracing::info!(%user_id, "User deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/users/{id}/posts
pub async fn list_posts(state: web::Data<AppState>, path: web::Path<u64>) -> AppResult<HttpResponse> {
    let user_id = UserId::new(path.into_inner());
    cached_query(&state, format!("posts:user:{}", user_id.raw()), |store| {
        store.posts_by_user(user_id)
    })
    .await
}
