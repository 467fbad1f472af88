//! Workout Plan Routes
//!
//! Weekly workout plan generation keyed by activity level and goal.
//!
//! - POST /generate_workout_plan - Build the weekly table

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{WorkoutPlanRequest, WorkoutPlanResponse};
use crate::api::state::AppState;
use crate::plans;

/// POST /generate_workout_plan
///
/// Infallible: absent fields default to "moderate"/"maintain" and the
/// response echoes the effective values.
pub async fn generate_workout_plan(
    State(_state): State<Arc<AppState>>,
    Json(req): Json<WorkoutPlanRequest>,
) -> Json<WorkoutPlanResponse> {
    let activity_level = req
        .activity_level
        .unwrap_or_else(|| "moderate".to_string());
    let goal = req.goal.unwrap_or_else(|| "maintain".to_string());

    let weekly_plan = plans::generate_weekly_plan(&activity_level, &goal);

    Json(WorkoutPlanResponse {
        status: "success".to_string(),
        weekly_plan,
        activity_level,
        goal,
    })
}
