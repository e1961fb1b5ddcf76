//! Direct cart HTTP handlers. None of these call the completion provider.
//!
//! Endpoints:
//! - GET    /api/v1/users/{user_id}/cart          - View the cart
//! - POST   /api/v1/users/{user_id}/cart/checkout - Place the order
//! - DELETE /api/v1/users/{user_id}/cart          - Empty the cart
//! - POST   /api/v1/users/{user_id}/cart/remove   - Remove an item by name

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dishcart_core::cart::CartStore;
use dishcart_types::cart::CartItem;

use crate::http::error::{AppError, require_non_blank};
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CartView {
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub total: u64,
    /// The same text the chat reply would show.
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CartActionResponse {
    pub user_id: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveItemRequest {
    pub query: String,
}

fn action_response(
    user_id: &str,
    message: String,
    request_id: String,
    start: Instant,
) -> Json<ApiResponse<CartActionResponse>> {
    let elapsed = start.elapsed().as_millis() as u64;
    Json(ApiResponse::success(
        CartActionResponse {
            user_id: user_id.to_string(),
            message,
        },
        request_id,
        elapsed,
    ))
}

/// GET /api/v1/users/{user_id}/cart - Show a user's cart.
pub async fn view_cart(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<CartView>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();
    let user_id = require_non_blank("user_id", &user_id)?;

    let cart = state.orchestrator.store().view(user_id).await;
    let view = CartView {
        user_id: user_id.to_string(),
        items: cart.items().to_vec(),
        total: cart.total(),
        message: state.orchestrator.replies().cart(&cart),
    };

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(view, request_id, elapsed)))
}

/// POST /api/v1/users/{user_id}/cart/checkout - Place the order.
pub async fn checkout(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<CartActionResponse>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();
    let user_id = require_non_blank("user_id", &user_id)?;

    let message = state.orchestrator.checkout(user_id).await;
    Ok(action_response(user_id, message, request_id, start))
}

/// DELETE /api/v1/users/{user_id}/cart - Empty the cart.
pub async fn clear_cart(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<CartActionResponse>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();
    let user_id = require_non_blank("user_id", &user_id)?;

    let message = state.orchestrator.clear_cart(user_id).await;
    Ok(action_response(user_id, message, request_id, start))
}

/// POST /api/v1/users/{user_id}/cart/remove - Remove the first matching item.
pub async fn remove_item(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<RemoveItemRequest>,
) -> Result<Json<ApiResponse<CartActionResponse>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();
    let user_id = require_non_blank("user_id", &user_id)?;
    let query = require_non_blank("query", &req.query)?;

    let message = state.orchestrator.remove_from_cart(user_id, query).await;
    Ok(action_response(user_id, message, request_id, start))
}
