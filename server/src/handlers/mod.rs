use axum::{extract::State, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

pub mod hotels;

pub use hotels::{show_hotel, show_hotels};

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "hotels-api",
    };

    success(payload, "Health check successful").into_response()
}

pub async fn readiness_check(State(state): State<AppState>) -> Result<Response, AppError> {
    state.health.ping().await?;

    let payload = HealthPayload {
        status: "ready",
        service: "hotels-api",
    };

    Ok(success(payload, "Database reachable").into_response())
}
