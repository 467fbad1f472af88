//! HTTP API Client
//!
//! Functions for communicating with the Regimen REST API.

use gloo_net::http::Request;

use crate::state::session::{MealPlan, NutritionResult, ProfileForm, UserContext, WorkoutPlan};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8090";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("regimen_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("regimen_api_url", url);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ChatReply {
    pub status: String,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub coach: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Error envelope returned by the API
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

/// Extract a readable message from an error response body
async fn error_message(response: gloo_net::http::Response) -> String {
    match response.json::<ApiErrorEnvelope>().await {
        Ok(envelope) => envelope.error.message,
        Err(_) => "Unknown error".to_string(),
    }
}

// ============ API Functions ============

/// Compute nutrition targets from the profile form
pub async fn calculate(form: &ProfileForm) -> Result<NutritionResult, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/calculate", api_base))
        .json(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Generate a daily meal plan from the profile form
pub async fn generate_meal_plan(form: &ProfileForm) -> Result<MealPlan, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/generate_meal_plan", api_base))
        .json(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Generate a weekly workout plan from the profile form
pub async fn generate_workout_plan(form: &ProfileForm) -> Result<WorkoutPlan, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/generate_workout_plan", api_base))
        .json(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send a chat message with the current context snapshot
///
/// Only the latest message plus the context is sent, never history.
/// A reply with a non-"success" status is an error even on HTTP 200.
pub async fn send_chat(message: &str, context: &UserContext) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest<'a> {
        message: &'a str,
        context: &'a UserContext,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chat", api_base))
        .json(&ChatRequest { message, context })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let reply: ChatReply = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if reply.status == "success" {
        reply.response.ok_or_else(|| "Empty response".to_string())
    } else {
        Err(reply
            .message
            .unwrap_or_else(|| "Unknown error occurred".to_string()))
    }
}

/// Synthesize speech for the plan text, returning MP3 bytes
pub async fn text_to_speech(text: &str) -> Result<Vec<u8>, String> {
    #[derive(serde::Serialize)]
    struct SpeechRequest<'a> {
        text: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/text_to_speech", api_base))
        .json(&SpeechRequest { text })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Read error: {}", e))
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/health", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
