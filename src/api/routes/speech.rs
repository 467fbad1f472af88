//! Speech Routes
//!
//! Plan narration as downloadable MP3 audio.
//!
//! - POST /text_to_speech - Synthesize text and return audio bytes

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::SpeechRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /text_to_speech
///
/// Returns the synthesized MP3 with an attachment disposition and a
/// timestamped filename.
pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeechRequest>,
) -> ApiResult<Response> {
    if req.text.is_empty() {
        return Err(ApiError::Validation("No text provided".to_string()));
    }

    let audio = state.speech.synthesize(&req.text).await?;

    let filename = format!("speech_{}.mp3", Utc::now().format("%Y%m%d_%H%M%S"));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (
                header::CONTENT_DISPOSITION,
                &format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        Body::from(audio),
    )
        .into_response())
}
