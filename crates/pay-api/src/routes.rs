//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::handlers;
use crate::state::{AppState, DEFAULT_FRONTEND_ORIGIN};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /            - Health check
/// - GET  /health      - Health check (probe alias)
/// - POST /api/orders  - Create a gateway order
/// - POST /api/verify  - Verify a payment and upgrade the subscription
pub fn create_router(state: AppState) -> Router {
    // CORS: only the configured frontend origin, all methods and headers
    // for that origin.
    let origin = match state.config.frontend_origin.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(_) => {
            tracing::warn!(
                "Invalid FRONTEND_URL {:?}, falling back to {}",
                state.config.frontend_origin,
                DEFAULT_FRONTEND_ORIGIN
            );
            HeaderValue::from_static(DEFAULT_FRONTEND_ORIGIN)
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/orders", post(handlers::create_order))
        .route("/verify", post(handlers::verify_payment));

    Router::new()
        // Health check at root
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        // API
        .nest("/api", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
