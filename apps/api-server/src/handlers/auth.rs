//! Authentication handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::User;
use quill_core::ports::{AuthError, BlogRepository};
use quill_shared::dto::{AuthResponse, LoginRequest, RegisterUserRequest, UserResponse};

use super::validated;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(super) fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id.raw(),
        username: user.username.clone(),
        email: user.email.clone(),
        created_at: user.created_at.to_rfc3339(),
    }
}

fn issue_token(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let token = state
        .tokens
        .generate_token(user.id, &user.username)?;

    Ok(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds().max(0) as u64,
    })
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = validated(body.into_inner())?;

    // Hash outside the lock; the store re-checks uniqueness atomically.
    let password_hash = state.passwords.hash(&req.password)?;

    let user = {
        let mut store = state.store.write().await;
        let user = store.add_user(req.username, req.email, password_hash)?;
        state.invalidate_reads().await;
        user
    };
    tracing::info!(user_id = %user.id, "User registered");

    Ok(HttpResponse::Created().json(issue_token(&state, &user)?))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .store
        .read()
        .await
        .find_user_by_username(&req.username);

    let Some(user) = user else {
        // Unknown usernames cost one verification too.
        let _ = state.passwords.verify(&req.password, &state.login_decoy);
        return Err(AuthError::InvalidCredentials.into());
    };

    if !state.passwords.verify(&req.password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    Ok(HttpResponse::Ok().json(issue_token(&state, &user)?))
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .store
        .read()
        .await
        .find_user(identity.user_id)
        .ok_or_else(|| AppError::NotFound(format!("User not found: {}", identity.user_id)))?;

    Ok(HttpResponse::Ok().json(user_response(&user)))
}
