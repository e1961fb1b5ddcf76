//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`.
//! Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::error::AppError;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/messages", post(handlers::message::send_message))
        .route(
            "/users/{user_id}/cart",
            get(handlers::cart::view_cart).delete(handlers::cart::clear_cart),
        )
        .route(
            "/users/{user_id}/cart/checkout",
            post(handlers::cart::checkout),
        )
        .route(
            "/users/{user_id}/cart/remove",
            post(handlers::cart::remove_item),
        );

    Router::new()
        .nest("/api/v1", api_routes)
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}
