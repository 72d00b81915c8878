//! Bearer-token authentication for the hotel routes.
//!
//! A token is accepted when its HS256 signature verifies against the
//! configured secret and a session row still holds it. Every failure becomes
//! a bare 401.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::jwt::verify_token;

/// Identity established by [`authenticate_token`], stored in request extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?
        .to_str()
        .map_err(|_| AppError::Unauthorized("Invalid Authorization header".to_string()))?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AppError::Unauthorized("Invalid token format".to_string())),
    }
}

pub async fn authenticate_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?.to_owned();

    let user_id = verify_token(&token, &state.jwt_secret)
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {e}")))?;

    let session = state
        .sessions
        .find_by_token(&token)
        .await
        .map_err(|e| AppError::Unauthorized(format!("No session for token: {e}")))?;

    if session.user_id != user_id {
        return Err(AppError::Unauthorized(
            "Session belongs to another user".to_string(),
        ));
    }

    request.extensions_mut().insert(AuthUser { user_id });
    Ok(next.run(request).await)
}
