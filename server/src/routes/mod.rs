use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, Config};
use crate::handlers::{health_check, readiness_check, show_hotel, show_hotels};
use crate::middlewares::{authenticate_token, validate_steps};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    // The layer added last runs first: authentication, then the eligibility gate.
    let hotels = Router::new()
        .route("/hotels", get(show_hotels))
        .route("/hotels/:hotelsId", get(show_hotel))
        .route_layer(from_fn_with_state(state.clone(), validate_steps))
        .route_layer(from_fn_with_state(state.clone(), authenticate_token));

    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .merge(hotels)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(config.production))
        .layer(create_cors_layer(config.cors_allowed_origins.as_deref()))
}
