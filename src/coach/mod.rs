//! Coach Engine
//!
//! Answers chat messages with context-aware coaching advice. A chat
//! model is used when one is configured; any model failure falls back
//! to deterministic rule-based responses so the chat keeps working.

pub mod client;
pub mod fallback;

pub use client::{ChatModel, CoachError, OpenAiChatModel};

use crate::config::CoachConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Context snapshot sent with every chat message
///
/// Every field is optional so a bare `{}` context still parses; absent
/// fields render as "Not specified" in the model prompt.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserContext {
    #[serde(default)]
    pub diet_preference: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub target_calories: Option<f64>,
    #[serde(default)]
    pub bmr: Option<f64>,
    #[serde(default)]
    pub tdee: Option<f64>,
    #[serde(default)]
    pub macros: Option<ContextMacros>,
}

/// Macro portion of the user context
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContextMacros {
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

/// Coaching reply generator
pub struct CoachEngine {
    model: Option<Arc<dyn ChatModel>>,
}

impl CoachEngine {
    /// Create an engine with an explicit model (or none)
    pub fn new(model: Option<Arc<dyn ChatModel>>) -> Self {
        Self { model }
    }

    /// Build an engine from configuration
    ///
    /// Without an API key no model client is constructed and the
    /// fallback serves every message.
    pub fn from_config(config: &CoachConfig) -> Self {
        let model = config.api_key.as_ref().map(|key| {
            Arc::new(OpenAiChatModel::new(config.clone(), key.clone())) as Arc<dyn ChatModel>
        });

        Self { model }
    }

    /// Whether a chat model is configured
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Produce a reply to a user message
    ///
    /// This never fails: model errors are logged and answered by the
    /// rule-based fallback instead.
    pub async fn reply(&self, message: &str, context: &UserContext) -> String {
        let model = match &self.model {
            Some(model) => model,
            None => return fallback::fallback_response(message, context),
        };

        let prompt = system_prompt(context);
        match model.complete(&prompt, message).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Chat model failed, using fallback response");
                fallback::fallback_response(message, context)
            }
        }
    }
}

/// Build the system prompt from the user's context
pub fn system_prompt(context: &UserContext) -> String {
    format!(
        "You are an AI Diet and Fitness Coach assistant. The user has the following context:\n\
         - Diet Preference: {}\n\
         - Activity Level: {}\n\
         - Fitness Goal: {}\n\
         - Daily Calorie Target: {}\n\
         \n\
         Provide helpful, accurate, and personalized advice about diet and fitness based on this context.\n\
         If the user asks about specific exercises or meals, make sure your suggestions align with their preferences and goals.\n\
         Always maintain a professional and encouraging tone.",
        text_or_unspecified(&context.diet_preference),
        text_or_unspecified(&context.activity_level),
        text_or_unspecified(&context.goal),
        number_or_unspecified(context.target_calories),
    )
}

fn text_or_unspecified(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => "Not specified".to_string(),
    }
}

fn number_or_unspecified(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "Not specified".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::client::mock::ScriptedChatModel;

    fn full_context() -> UserContext {
        UserContext {
            diet_preference: Some("vegetarian".to_string()),
            activity_level: Some("moderate".to_string()),
            goal: Some("lose weight".to_string()),
            target_calories: Some(2056.0),
            bmr: Some(1649.0),
            tdee: Some(2556.0),
            macros: Some(ContextMacros {
                protein: 154.0,
                carbs: 231.0,
                fat: 57.0,
            }),
        }
    }

    #[test]
    fn test_system_prompt_includes_context() {
        let prompt = system_prompt(&full_context());
        assert!(prompt.contains("- Diet Preference: vegetarian"));
        assert!(prompt.contains("- Activity Level: moderate"));
        assert!(prompt.contains("- Fitness Goal: lose weight"));
        assert!(prompt.contains("- Daily Calorie Target: 2056"));
    }

    #[test]
    fn test_system_prompt_defaults() {
        let prompt = system_prompt(&UserContext::default());
        assert!(prompt.contains("- Diet Preference: Not specified"));
        assert!(prompt.contains("- Daily Calorie Target: Not specified"));
    }

    #[test]
    fn test_empty_context_parses() {
        let context: UserContext = serde_json::from_str("{}").unwrap();
        assert!(context.diet_preference.is_none());
        assert!(context.target_calories.is_none());
    }

    #[tokio::test]
    async fn test_reply_without_model_uses_fallback() {
        let engine = CoachEngine::new(None);
        let reply = engine.reply("hello there", &UserContext::default()).await;
        assert!(reply.contains("I can help you with specific questions"));
    }

    #[tokio::test]
    async fn test_reply_passes_model_text_through() {
        let model = ScriptedChatModel::replying("Eat more lentils.");
        let engine = CoachEngine::new(Some(Arc::new(model)));

        let reply = engine.reply("what should I eat?", &full_context()).await;
        assert_eq!(reply, "Eat more lentils.");
    }

    #[tokio::test]
    async fn test_reply_falls_back_on_model_error() {
        let model = ScriptedChatModel::failing();
        let engine = CoachEngine::new(Some(Arc::new(model)));

        let reply = engine.reply("what should I eat?", &full_context()).await;
        assert!(reply.contains("vegetarian diet"));
    }

    #[test]
    fn test_engine_from_config_without_key_has_no_model() {
        let engine = CoachEngine::from_config(&CoachConfig::default());
        assert!(!engine.has_model());
    }
}
