//! State Management
//!
//! Session state for the planner and chat, owned by the component tree.

pub mod session;

pub use session::{
    provide_session_state, ChatMessage, ChatRole, MealPlan, NutritionResult, ProfileForm,
    SessionState, UserContext, WorkoutPlan,
};
