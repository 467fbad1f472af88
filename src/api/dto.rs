//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use crate::coach::UserContext;
use crate::nutrition::NutritionTargets;
use crate::plans::{DailyPlan, WeeklyPlan};
use serde::{Deserialize, Serialize};

// ============================================
// CALCULATE DTOs
// ============================================

/// Profile form submission
///
/// Every field arrives as the raw string captured from the form; the
/// handler parses the numeric ones. Missing fields default to empty
/// strings and fail numeric parsing the same way garbage input does.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub activity_level: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub diet_preference: String,
}

/// Nutrition calculation response (whole kcal and grams)
#[derive(Debug, Serialize)]
pub struct NutritionResponse {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub macros: MacrosDto,
}

/// Macronutrient grams in the calculation response
#[derive(Debug, Serialize)]
pub struct MacrosDto {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl NutritionResponse {
    /// Round the unrounded targets once for the wire
    pub fn from_targets(targets: &NutritionTargets) -> Self {
        Self {
            bmr: targets.bmr.round() as i64,
            tdee: targets.tdee.round() as i64,
            target_calories: targets.target_calories.round() as i64,
            macros: MacrosDto {
                protein: targets.macros.protein.round() as i64,
                carbs: targets.macros.carbs.round() as i64,
                fat: targets.macros.fat.round() as i64,
            },
        }
    }
}

// ============================================
// MEAL PLAN DTOs
// ============================================

/// Meal plan request
///
/// The widget posts the whole profile form here; only the diet
/// preference matters. `target_calories` is honored when a client
/// sends one explicitly.
#[derive(Debug, Deserialize)]
pub struct MealPlanRequest {
    #[serde(default)]
    pub diet_preference: Option<String>,
    #[serde(default)]
    pub target_calories: Option<serde_json::Number>,
}

/// Meal plan response
#[derive(Debug, Serialize)]
pub struct MealPlanResponse {
    /// Always "success"
    pub status: String,
    pub daily_plan: DailyPlan,
    /// Echo of the requested calorie target (2000 when unset)
    pub calories: serde_json::Number,
    /// Echo of the requested diet preference
    pub diet_preference: String,
}

// ============================================
// WORKOUT PLAN DTOs
// ============================================

/// Workout plan request
///
/// As with meal plans, the widget posts the whole profile form; only
/// activity level and goal matter here.
#[derive(Debug, Deserialize)]
pub struct WorkoutPlanRequest {
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
}

/// Workout plan response
#[derive(Debug, Serialize)]
pub struct WorkoutPlanResponse {
    /// Always "success"
    pub status: String,
    pub weekly_plan: WeeklyPlan,
    /// Echo of the effective activity level
    pub activity_level: String,
    /// Echo of the effective goal
    pub goal: String,
}

// ============================================
// CHAT DTOs
// ============================================

/// Chat request: the latest message plus the current context snapshot
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: UserContext,
}

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Always "success"; the coach falls back rather than failing
    pub status: String,
    pub response: String,
}

// ============================================
// SPEECH DTOs
// ============================================

/// Text-to-speech request
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Chat backend: "model" or "fallback"
    pub coach: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
