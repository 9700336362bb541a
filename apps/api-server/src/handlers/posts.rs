//! Post, comment and category-link handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{CategoryId, PostId, PostStatus};
use quill_core::ports::BlogRepository;
use quill_shared::ApiResponse;
use quill_shared::dto::{CreateCommentRequest, CreatePostRequest};

use super::{cached_query, validated};
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Status of a request that already passed validation.
fn requested_status(raw: Option<&str>) -> Option<PostStatus> {
    raw.map(|status| match status {
        "published" => PostStatus::Published,
        _ => PostStatus::Draft,
    })
}

/// POST /api/posts - the caller becomes the owner.
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = validated(body.into_inner())?;
    let status = requested_status(req.status.as_deref());

    let mut store = state.store.write().await;
    let post = store.add_post(
        identity.user_id,
        req.title.trim().to_string(),
        req.content.trim().to_string(),
        status,
    )?;
    state.invalidate_reads().await;
    drop(store);

    tracing::info!(post_id = %post.id, author = %identity.username, "Post created");
    Ok(HttpResponse::Created().json(ApiResponse::ok(post)))
}

/// DELETE /api/posts/{id} - owner only; 204 when already gone.
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let post_id = PostId::new(path.into_inner());

    let mut store = state.store.write().await;
    if let Some(post) = store.find_post(post_id) {
        identity.require_owner(post.user_id)?;
        store.delete_post(post_id);
        state.invalidate_reads().await;
    }
    drop(store);

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/posts/{id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let post_id = PostId::new(path.into_inner());
    cached_query(&state, format!("comments:post:{}", post_id.raw()), |store| {
        store.comments_by_post(post_id)
    })
    .await
}

/// POST /api/posts/{id}/comments - the caller is the author.
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<u64>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = PostId::new(path.into_inner());
    let req = validated(body.into_inner())?;

    let mut store = state.store.write().await;
    let comment = store.add_comment(
        post_id,
        identity.user_id,
        req.content.trim().to_string(),
    )?;
    state.invalidate_reads().await;
    drop(store);

    Ok(HttpResponse::Created().json(ApiResponse::ok(comment)))
}

/// GET /api/posts/{id}/categories
pub async fn list_categories(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let post_id = PostId::new(path.into_inner());
    cached_query(&state, format!("categories:post:{}", post_id.raw()), |store| {
        store.categories_by_post(post_id)
    })
    .await
}

/// PUT /api/posts/{id}/categories/{category_id} - owner only, idempotent.
pub async fn link_category(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(u64, u64)>,
) -> AppResult<HttpResponse> {
    let (post_id, category_id) = path.into_inner();
    let (post_id, category_id) = (PostId::new(post_id), CategoryId::new(category_id));

    let mut store = state.store.write().await;
    if let Some(post) = store.find_post(post_id) {
        identity.require_owner(post.user_id)?;
    }
    store.link_post_to_category(post_id, category_id)?;
    state.invalidate_reads().await;
    drop(store);

    Ok(HttpResponse::NoContent().finish())
}
