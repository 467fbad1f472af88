//! # Regimen
//!
//! AI Diet & Fitness Coach - A full-stack Rust application that computes
//! personalized nutrition targets, generates meal and workout plans, and
//! answers coaching questions in context.
//!
//! ## Features
//!
//! - **Nutrition targets**: Mifflin-St Jeor BMR/TDEE with goal-adjusted
//!   calories and a macro split
//! - **Meal plans**: Daily plans drawn from diet-preference catalogs
//! - **Workout plans**: Weekly schedules adjusted for the fitness goal
//! - **Coaching chat**: Context-aware replies from a chat model, with a
//!   rule-based fallback so chat never goes down
//! - **Speech**: Plan narration synthesized to MP3
//!
//! ## Modules
//!
//! - [`nutrition`]: BMR/TDEE/macro calculator
//! - [`plans`]: Meal and workout plan generators
//! - [`coach`]: Chat model client, fallback rules, and coach engine
//! - [`speech`]: Text-to-speech client
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use regimen::api::{serve, ApiConfig, AppState};
//! use regimen::coach::CoachEngine;
//! use regimen::config::Config;
//! use regimen::speech::SpeechSynthesizer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
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

pub mod api;
pub mod coach;
pub mod config;
pub mod nutrition;
pub mod plans;
pub mod speech;

pub use api::{ApiError, AppState};
pub use coach::{CoachEngine, UserContext};
pub use config::Config;
pub use nutrition::NutritionTargets;
pub use speech::SpeechSynthesizer;
