//! Session State
//!
//! Reactive state for one planning session using Leptos signals. The
//! user context lives here, owned by the orchestrator page, and is
//! passed into the chat send operation by parameter.

use leptos::*;

/// Greeting seeded into a fresh chat transcript
pub const CHAT_GREETING: &str =
    "Hello! I'm your AI Diet and Fitness Coach. How can I help you with your personalized plan?";

/// Assistant message injected when a chat round-trip fails
pub const CHAT_APOLOGY: &str =
    "I apologize, but I encountered an error. Could you please try rephrasing your question?";

/// Generic error shown when the plan pipeline fails
pub const PIPELINE_ERROR: &str =
    "An error occurred while processing your request. Please try again.";

/// Session state provided to all components
#[derive(Clone)]
pub struct SessionState {
    /// Nutrition targets from the last successful calculation
    pub nutrition: RwSignal<Option<NutritionResult>>,
    /// Generated meal plan
    pub meal_plan: RwSignal<Option<MealPlan>>,
    /// Generated workout plan
    pub workout_plan: RwSignal<Option<WorkoutPlan>>,
    /// Context snapshot sent with every chat message
    pub user_context: RwSignal<UserContext>,
    /// Ordered chat transcript, newest last
    pub transcript: RwSignal<Vec<ChatMessage>>,
    /// Results and chat sections stay hidden until this is set
    pub plans_ready: RwSignal<bool>,
    /// A form submission pipeline is in flight
    pub submitting: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Profile form fields, captured verbatim as strings
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub weight: String,
    pub height: String,
    pub activity_level: String,
    pub goal: String,
    pub diet_preference: String,
}

/// Nutrition targets as returned by the API (whole numbers)
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct NutritionResult {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub macros: Macros,
}

/// Macronutrient grams
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Macros {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// Daily meal plan from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MealPlan {
    pub daily_plan: DailyPlan,
    pub calories: i64,
    pub diet_preference: String,
}

/// One meal per category
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct DailyPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

/// Weekly workout plan from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct WorkoutPlan {
    pub weekly_plan: WeeklyPlan,
    pub activity_level: String,
    pub goal: String,
}

/// One entry per weekday
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct WeeklyPlan {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

/// Context blob sent with every chat request
///
/// Rebuilt wholesale from the form and the calculation result after
/// each successful submission.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct UserContext {
    pub diet_preference: String,
    pub activity_level: String,
    pub goal: String,
    pub target_calories: i64,
    pub bmr: i64,
    pub tdee: i64,
    pub macros: Macros,
}

impl UserContext {
    /// Build the context from the submitted form and its nutrition result
    pub fn from_results(form: &ProfileForm, nutrition: &NutritionResult) -> Self {
        Self {
            diet_preference: form.diet_preference.clone(),
            activity_level: form.activity_level.clone(),
            goal: form.goal.clone(),
            target_calories: nutrition.target_calories,
            bmr: nutrition.bmr,
            tdee: nutrition.tdee,
            macros: nutrition.macros.clone(),
        }
    }
}

/// One transcript entry
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Who said it
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A fresh transcript: exactly one assistant greeting
pub fn seed_transcript() -> Vec<ChatMessage> {
    vec![ChatMessage::assistant(CHAT_GREETING)]
}

/// Provide session state to the component tree
pub fn provide_session_state() {
    let state = SessionState {
        nutrition: create_rw_signal(None),
        meal_plan: create_rw_signal(None),
        workout_plan: create_rw_signal(None),
        user_context: create_rw_signal(UserContext::default()),
        transcript: create_rw_signal(Vec::new()),
        plans_ready: create_rw_signal(false),
        submitting: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl SessionState {
    /// Clear the transcript and reseed the greeting
    pub fn reset_chat(&self) {
        self.transcript.set(seed_transcript());
    }

    /// Append a message to the transcript
    pub fn push_message(&self, message: ChatMessage) {
        self.transcript.update(|t| t.push(message));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nutrition() -> NutritionResult {
        NutritionResult {
            bmr: 1649,
            tdee: 2556,
            target_calories: 2056,
            macros: Macros {
                protein: 154,
                carbs: 231,
                fat: 57,
            },
        }
    }

    #[test]
    fn test_seed_transcript_is_one_greeting() {
        let transcript = seed_transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, ChatRole::Assistant);
        assert_eq!(transcript[0].content, CHAT_GREETING);
    }

    #[test]
    fn test_transcript_order_after_round_trip() {
        let mut transcript = seed_transcript();
        transcript.push(ChatMessage::user("what should I eat?"));
        transcript.push(ChatMessage::assistant("Lentils."));

        let roles: Vec<ChatRole> = transcript.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]
        );
    }

    #[test]
    fn test_context_built_from_form_and_result() {
        let form = ProfileForm {
            goal: "lose weight".to_string(),
            diet_preference: "vegetarian".to_string(),
            activity_level: "moderate".to_string(),
            ..Default::default()
        };

        let context = UserContext::from_results(&form, &nutrition());
        assert_eq!(context.goal, "lose weight");
        assert_eq!(context.diet_preference, "vegetarian");
        assert_eq!(context.target_calories, 2056);
        assert_eq!(context.macros.protein, 154);
    }

    #[test]
    fn test_context_serializes_with_exact_fields() {
        let form = ProfileForm {
            goal: "lose weight".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(UserContext::from_results(&form, &nutrition())).unwrap();

        assert_eq!(json["goal"], "lose weight");
        assert_eq!(json["target_calories"], 2056);
        assert_eq!(json["bmr"], 1649);
        assert_eq!(json["macros"]["fat"], 57);
    }
}
