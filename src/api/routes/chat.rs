//! Chat Routes
//!
//! Context-aware coaching chat.
//!
//! - POST /chat - Answer the latest message with the context snapshot

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ChatRequest, ChatResponse};
use crate::api::state::AppState;

/// POST /chat
///
/// Always reports success: the coach engine answers from the model
/// when one is configured and falls back to rule-based responses on
/// any failure, so the widget's chat keeps working.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let response = state.coach.reply(&req.message, &req.context).await;

    Json(ChatResponse {
        status: "success".to_string(),
        response,
    })
}
