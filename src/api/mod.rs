//! Regimen REST API
//!
//! HTTP API layer for Regimen, built with Axum.
//!
//! # Endpoints
//!
//! ## Plans
//! - `POST /calculate` - Nutrition targets from the profile form
//! - `POST /generate_meal_plan` - Daily meal plan
//! - `POST /generate_workout_plan` - Weekly workout plan
//!
//! ## Coach
//! - `POST /chat` - Context-aware coaching chat
//!
//! ## Speech
//! - `POST /text_to_speech` - Plan narration as MP3
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! The plan, chat and speech endpoints are mounted at the root: their
//! paths are the widget's wire contract.
//!
//! # Example
//!
//! ```rust,ignore
//! use regimen::api::{serve, ApiConfig, AppState};
//! use regimen::coach::CoachEngine;
//! use regimen::config::Config;
//! use regimen::speech::SpeechSynthesizer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let coach = Arc::new(CoachEngine::from_config(&config.coach));
//!     let speech = Arc::new(SpeechSynthesizer::new(config.speech.clone()));
//!
//!     let api_config = ApiConfig::new(config.api.host.clone(), config.api.port);
//!     let state = AppState::new(coach, speech, api_config.clone());
//!     serve(state, &api_config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        // Plan routes
        .route("/calculate", post(routes::nutrition::calculate))
        .route(
            "/generate_meal_plan",
            post(routes::meal_plan::generate_meal_plan),
        )
        .route(
            "/generate_workout_plan",
            post(routes::workout_plan::generate_workout_plan),
        )
        // Coach routes
        .route("/chat", post(routes::chat::chat))
        // Speech routes
        .route("/text_to_speech", post(routes::speech::text_to_speech))
        // Health routes
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Regimen API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Regimen API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::client::mock::ScriptedChatModel;
    use crate::coach::{ChatModel, CoachEngine};
    use crate::config::SpeechConfig;
    use crate::plans::meals;
    use crate::speech::SpeechSynthesizer;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_test_app_with_model(None)
    }

    fn create_test_app_with_model(model: Option<Arc<dyn ChatModel>>) -> Router {
        let coach = Arc::new(CoachEngine::new(model));
        let speech = Arc::new(SpeechSynthesizer::new(SpeechConfig::default()));
        let state = AppState::new(coach, speech, ApiConfig::default());

        build_router(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full_reports_fallback_coach() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["coach"], "fallback");
    }

    #[tokio::test]
    async fn test_calculate_reference_profile() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/calculate",
                r#"{
                    "name": "Sam",
                    "age": "30",
                    "gender": "male",
                    "weight": "70",
                    "height": "175",
                    "activity_level": "moderate",
                    "goal": "lose weight",
                    "diet_preference": "vegetarian"
                }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["bmr"], 1649);
        assert_eq!(body["tdee"], 2556);
        assert_eq!(body["target_calories"], 2056);
        assert_eq!(body["macros"]["protein"], 154);
        assert_eq!(body["macros"]["carbs"], 231);
        assert_eq!(body["macros"]["fat"], 57);
    }

    #[tokio::test]
    async fn test_calculate_rejects_non_numeric_weight() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/calculate",
                r#"{
                    "age": "30",
                    "gender": "male",
                    "weight": "heavy",
                    "height": "175",
                    "activity_level": "moderate",
                    "goal": "maintain",
                    "diet_preference": "vegan"
                }"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_calculate_rejects_empty_body() {
        let app = create_test_app();

        let response = app.oneshot(post_json("/calculate", "{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_meal_plan_defaults() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json("/generate_meal_plan", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["calories"], 2000);
        assert_eq!(body["diet_preference"], "non-vegetarian");

        let breakfast = body["daily_plan"]["breakfast"].as_str().unwrap();
        assert!(meals::NON_VEGETARIAN.breakfast.contains(&breakfast));
    }

    #[tokio::test]
    async fn test_meal_plan_respects_diet_preference() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/generate_meal_plan",
                r#"{"diet_preference": "vegan", "goal": "maintain"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["diet_preference"], "vegan");

        let dinner = body["daily_plan"]["dinner"].as_str().unwrap();
        assert!(meals::VEGAN.dinner.contains(&dinner));
    }

    #[tokio::test]
    async fn test_meal_plan_echoes_explicit_calories() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/generate_meal_plan",
                r#"{"diet_preference": "vegetarian", "target_calories": 1850}"#,
            ))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["calories"], 1850);
    }

    #[tokio::test]
    async fn test_workout_plan_defaults() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json("/generate_workout_plan", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["activity_level"], "moderate");
        assert_eq!(body["goal"], "maintain");
        assert_eq!(
            body["weekly_plan"]["monday"],
            "45-minute strength training (upper body)"
        );
    }

    #[tokio::test]
    async fn test_workout_plan_lose_weight_overrides() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/generate_workout_plan",
                r#"{"activity_level": "active", "goal": "lose weight"}"#,
            ))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(
            body["weekly_plan"]["tuesday"],
            "45-minute cardio (running/cycling) + 15-minute HIIT"
        );
        assert_eq!(
            body["weekly_plan"]["thursday"],
            "45-minute HIIT workout + 15-minute cardio"
        );
        assert_eq!(
            body["weekly_plan"]["monday"],
            "60-minute strength training (push day)"
        );
    }

    #[tokio::test]
    async fn test_chat_answers_from_fallback() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/chat",
                r#"{"message": "hello", "context": {}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert!(body["response"]
            .as_str()
            .unwrap()
            .starts_with("I can help you with specific questions"));
    }

    #[tokio::test]
    async fn test_chat_fallback_reads_context() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json(
                "/chat",
                r#"{
                    "message": "what should I eat?",
                    "context": {
                        "diet_preference": "vegetarian",
                        "activity_level": "moderate",
                        "goal": "lose weight",
                        "target_calories": 2056,
                        "bmr": 1649,
                        "tdee": 2556,
                        "macros": {"protein": 154, "carbs": 231, "fat": 57}
                    }
                }"#,
            ))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert!(body["response"]
            .as_str()
            .unwrap()
            .contains("vegetarian diet"));
    }

    #[tokio::test]
    async fn test_chat_uses_configured_model() {
        let app = create_test_app_with_model(Some(Arc::new(ScriptedChatModel::replying(
            "Swap the rice for quinoa.",
        ))));

        let response = app
            .oneshot(post_json(
                "/chat",
                r#"{"message": "dinner ideas?", "context": {}}"#,
            ))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["response"], "Swap the rice for quinoa.");
    }

    #[tokio::test]
    async fn test_chat_survives_model_failure() {
        let app = create_test_app_with_model(Some(Arc::new(ScriptedChatModel::failing())));

        let response = app
            .oneshot(post_json(
                "/chat",
                r#"{"message": "hello", "context": {}}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert!(body["response"]
            .as_str()
            .unwrap()
            .starts_with("I can help you with specific questions"));
    }

    #[tokio::test]
    async fn test_tts_rejects_empty_text() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json("/text_to_speech", r#"{"text": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("No text provided"));
    }

    #[tokio::test]
    async fn test_calculate_rejects_invalid_json() {
        let app = create_test_app();

        let response = app
            .oneshot(post_json("/calculate", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
