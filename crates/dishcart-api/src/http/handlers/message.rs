//! Message handler: one classified chat turn per request.
//!
//! Endpoint:
//! - POST /api/v1/messages - Classify and dispatch a message

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use uuid::Uuid;

use dishcart_types::chat::DispatchResult;

use crate::http::error::{AppError, require_non_blank};
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub user_id: String,
    pub message: String,
}

/// POST /api/v1/messages - Process one chat turn for a user.
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<DispatchResult>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let user_id = require_non_blank("user_id", &req.user_id)?;
    require_non_blank("message", &req.message)?;

    let result = state.orchestrator.handle_message(user_id, &req.message).await;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(result, request_id, elapsed)))
}
