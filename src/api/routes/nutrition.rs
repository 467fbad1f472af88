//! Nutrition Routes
//!
//! Calorie target and macro calculation from the submitted profile.
//!
//! - POST /calculate - Compute BMR, TDEE, target calories and macros

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{CalculateRequest, NutritionResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::nutrition::{self, Profile};

/// POST /calculate
///
/// Parses the numeric form fields and runs the nutrition pipeline.
/// All intermediate math is unrounded; the response carries whole
/// numbers.
pub async fn calculate(
    State(_state): State<Arc<AppState>>,
    Json(req): Json<CalculateRequest>,
) -> ApiResult<Json<NutritionResponse>> {
    let weight_kg = parse_number(&req.weight, "weight")?;
    let height_cm = parse_number(&req.height, "height")?;
    let age_years: u32 = req.age.trim().parse().map_err(|_| {
        ApiError::Validation(format!("age must be a whole number, got {:?}", req.age))
    })?;

    let profile = Profile {
        weight_kg,
        height_cm,
        age_years,
        gender: req.gender,
        activity_level: req.activity_level,
        goal: req.goal,
    };

    let targets = nutrition::calculate_targets(&profile);

    tracing::debug!(
        bmr = targets.bmr,
        tdee = targets.tdee,
        target_calories = targets.target_calories,
        "Calculated nutrition targets"
    );

    Ok(Json(NutritionResponse::from_targets(&targets)))
}

/// Parse a form field as a float
fn parse_number(value: &str, field: &str) -> Result<f64, ApiError> {
    value.trim().parse().map_err(|_| {
        ApiError::Validation(format!("{} must be a number, got {:?}", field, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("70", "weight").unwrap(), 70.0);
        assert_eq!(parse_number(" 70.5 ", "weight").unwrap(), 70.5);
        assert!(parse_number("", "weight").is_err());
        assert!(parse_number("heavy", "weight").is_err());
    }
}
