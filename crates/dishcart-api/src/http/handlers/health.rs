//! GET /api/v1/health - Liveness plus the configured backend.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use dishcart_core::llm::provider::CompletionProvider;

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let provider = state.orchestrator.provider();
    Json(json!({
        "status": "ok",
        "provider": provider.name(),
        "model": provider.model(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
