//! Plan Text Export
//!
//! Single source of the plain-text plan summary. Both the Speak and
//! Download actions call [`generate_plan_text`], so the narrated and
//! downloaded bodies are byte-identical by construction. The text is
//! generated from the structured API responses, never re-read from
//! rendered markup.

use crate::state::session::{MealPlan, NutritionResult, WorkoutPlan};

/// Assemble the full plan summary for export
pub fn generate_plan_text(
    nutrition: &NutritionResult,
    meal_plan: &MealPlan,
    workout_plan: &WorkoutPlan,
) -> String {
    format!(
        "Your Personalized Diet & Fitness Plan\n\
         \n\
         Daily Caloric Needs:\n\
         - BMR: {bmr} calories\n\
         - TDEE: {tdee} calories\n\
         - Target Calories: {target} calories\n\
         \n\
         Macronutrient Breakdown:\n\
         - Protein: {protein}g\n\
         - Carbohydrates: {carbs}g\n\
         - Fats: {fat}g\n\
         \n\
         Meal Plan:\n\
         Daily Meal Plan ({calories} calories)\n\
         - Breakfast: {breakfast}\n\
         - Lunch: {lunch}\n\
         - Dinner: {dinner}\n\
         - Snack: {snacks}\n\
         Diet Preference: {diet}\n\
         \n\
         Workout Plan:\n\
         Weekly Workout Plan ({activity} activity level)\n\
         - Monday: {monday}\n\
         - Tuesday: {tuesday}\n\
         - Wednesday: {wednesday}\n\
         - Thursday: {thursday}\n\
         - Friday: {friday}\n\
         - Saturday: {saturday}\n\
         - Sunday: {sunday}\n\
         Fitness Goal: {goal}",
        bmr = nutrition.bmr,
        tdee = nutrition.tdee,
        target = nutrition.target_calories,
        protein = nutrition.macros.protein,
        carbs = nutrition.macros.carbs,
        fat = nutrition.macros.fat,
        calories = meal_plan.calories,
        breakfast = meal_plan.daily_plan.breakfast,
        lunch = meal_plan.daily_plan.lunch,
        dinner = meal_plan.daily_plan.dinner,
        snacks = meal_plan.daily_plan.snacks,
        diet = meal_plan.diet_preference,
        activity = workout_plan.activity_level,
        monday = workout_plan.weekly_plan.monday,
        tuesday = workout_plan.weekly_plan.tuesday,
        wednesday = workout_plan.weekly_plan.wednesday,
        thursday = workout_plan.weekly_plan.thursday,
        friday = workout_plan.weekly_plan.friday,
        saturday = workout_plan.weekly_plan.saturday,
        sunday = workout_plan.weekly_plan.sunday,
        goal = workout_plan.goal,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{DailyPlan, Macros, WeeklyPlan};

    fn sample() -> (NutritionResult, MealPlan, WorkoutPlan) {
        let nutrition = NutritionResult {
            bmr: 1649,
            tdee: 2556,
            target_calories: 2056,
            macros: Macros {
                protein: 154,
                carbs: 231,
                fat: 57,
            },
        };

        let meal_plan = MealPlan {
            daily_plan: DailyPlan {
                breakfast: "Oatmeal".to_string(),
                lunch: "Buddha bowl".to_string(),
                dinner: "Vegetable curry".to_string(),
                snacks: "Greek yogurt".to_string(),
            },
            calories: 2000,
            diet_preference: "vegetarian".to_string(),
        };

        let workout_plan = WorkoutPlan {
            weekly_plan: WeeklyPlan {
                monday: "Strength training".to_string(),
                tuesday: "Cardio".to_string(),
                wednesday: "Yoga".to_string(),
                thursday: "HIIT".to_string(),
                friday: "Strength training".to_string(),
                saturday: "Swimming".to_string(),
                sunday: "Rest".to_string(),
            },
            activity_level: "moderate".to_string(),
            goal: "lose weight".to_string(),
        };

        (nutrition, meal_plan, workout_plan)
    }

    #[test]
    fn test_plan_text_layout() {
        let (nutrition, meal_plan, workout_plan) = sample();
        let text = generate_plan_text(&nutrition, &meal_plan, &workout_plan);

        assert!(text.starts_with("Your Personalized Diet & Fitness Plan\n"));
        assert!(text.contains("- BMR: 1649 calories\n"));
        assert!(text.contains("- Target Calories: 2056 calories\n"));
        assert!(text.contains("- Protein: 154g\n"));
        assert!(text.contains("Daily Meal Plan (2000 calories)\n"));
        assert!(text.contains("- Snack: Greek yogurt\n"));
        assert!(text.contains("Diet Preference: vegetarian\n"));
        assert!(text.contains("Weekly Workout Plan (moderate activity level)\n"));
        assert!(text.ends_with("Fitness Goal: lose weight"));
    }

    #[test]
    fn test_plan_text_is_deterministic() {
        let (nutrition, meal_plan, workout_plan) = sample();
        let a = generate_plan_text(&nutrition, &meal_plan, &workout_plan);
        let b = generate_plan_text(&nutrition, &meal_plan, &workout_plan);
        assert_eq!(a, b);
    }
}
