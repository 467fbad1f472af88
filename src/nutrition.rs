//! Nutrition Calculator
//!
//! Computes BMR via the Mifflin-St Jeor equation, scales it to TDEE by
//! activity level, adjusts the calorie target for the fitness goal, and
//! derives a protein-first macronutrient split.
//!
//! All math stays on unrounded floats; callers round once at the API
//! boundary so the macro split is computed from exact intermediates.

use serde::Serialize;

/// Parsed user metrics driving the calculators
#[derive(Debug, Clone)]
pub struct Profile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: String,
    pub activity_level: String,
    pub goal: String,
}

/// Full nutrition computation result (unrounded)
#[derive(Debug, Clone, Serialize)]
pub struct NutritionTargets {
    /// Basal metabolic rate in kcal/day
    pub bmr: f64,
    /// Total daily energy expenditure in kcal/day
    pub tdee: f64,
    /// Goal-adjusted calorie target in kcal/day
    pub target_calories: f64,
    /// Daily macronutrient split in grams
    pub macros: MacroSplit,
}

/// Macronutrient split in grams per day
#[derive(Debug, Clone, Serialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Calculate BMR using the Mifflin-St Jeor equation
///
/// Gender is matched case-insensitively; anything other than "male"
/// uses the female constant.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: &str) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    if gender.to_lowercase() == "male" {
        base + 5.0
    } else {
        base - 161.0
    }
}

/// Scale BMR to TDEE by activity level
///
/// Unknown activity levels fall back to the sedentary multiplier.
pub fn calculate_tdee(bmr: f64, activity_level: &str) -> f64 {
    let multiplier = match activity_level.to_lowercase().as_str() {
        "sedentary" => 1.2,
        "moderate" => 1.55,
        "active" => 1.725,
        _ => 1.2,
    };
    bmr * multiplier
}

/// Adjust the calorie target for the fitness goal
///
/// "lose weight" subtracts 500 kcal, "gain muscle" adds 500 kcal,
/// anything else maintains TDEE.
pub fn adjust_calories(tdee: f64, goal: &str) -> f64 {
    match goal.to_lowercase().as_str() {
        "lose weight" => tdee - 500.0,
        "gain muscle" => tdee + 500.0,
        _ => tdee,
    }
}

/// Derive the macronutrient split from body weight and calorie target
///
/// Protein at 1 g per pound of body weight, fat at 25% of calories,
/// carbs from the remaining calories.
pub fn macro_split(weight_kg: f64, target_calories: f64) -> MacroSplit {
    let protein = weight_kg * 2.2;
    let fat = (target_calories * 0.25) / 9.0;
    let carbs = (target_calories - (protein * 4.0 + fat * 9.0)) / 4.0;

    MacroSplit {
        protein,
        carbs,
        fat,
    }
}

/// Run the full pipeline for a parsed profile
pub fn calculate_targets(profile: &Profile) -> NutritionTargets {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        &profile.gender,
    );
    let tdee = calculate_tdee(bmr, &profile.activity_level);
    let target_calories = adjust_calories(tdee, &profile.goal);
    let macros = macro_split(profile.weight_kg, target_calories);

    NutritionTargets {
        bmr,
        tdee,
        target_calories,
        macros,
    }
}
