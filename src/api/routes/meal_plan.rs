//! Meal Plan Routes
//!
//! Daily meal plan generation keyed by diet preference.
//!
//! - POST /generate_meal_plan - Pick one meal per category

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{MealPlanRequest, MealPlanResponse};
use crate::api::state::AppState;
use crate::plans;

/// POST /generate_meal_plan
///
/// Infallible: unknown diet preferences fall back to the
/// non-vegetarian catalog, absent calorie targets to 2000.
pub async fn generate_meal_plan(
    State(_state): State<Arc<AppState>>,
    Json(req): Json<MealPlanRequest>,
) -> Json<MealPlanResponse> {
    let diet_preference = req
        .diet_preference
        .unwrap_or_else(|| "non-vegetarian".to_string());
    let calories = req
        .target_calories
        .unwrap_or_else(|| serde_json::Number::from(2000));

    let mut rng = rand::rng();
    let daily_plan = plans::generate_daily_plan(&diet_preference, &mut rng);

    Json(MealPlanResponse {
        status: "success".to_string(),
        daily_plan,
        calories,
        diet_preference,
    })
}
