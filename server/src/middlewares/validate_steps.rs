use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::AuthUser;
use crate::state::AppState;
use crate::utils::error::AppError;

/// Lets a request through only when the authenticated user may see hotels.
///
/// Must run after [`super::authenticate_token`].
pub async fn validate_steps(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .copied()
        .ok_or_else(|| AppError::Unauthorized("Request is not authenticated".to_string()))?;

    state.eligibility.check_eligibility(user.user_id).await?;

    Ok(next.run(request).await)
}
