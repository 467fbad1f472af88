//! Workout Plan Generation
//!
//! Deterministic weekly workout tables keyed by activity level, with
//! weekday overrides for the "lose weight" and "gain muscle" goals.

use serde::{Deserialize, Serialize};

/// A week of workout assignments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl WeeklyPlan {
    fn from_table(table: [&str; 7]) -> Self {
        Self {
            monday: table[0].to_string(),
            tuesday: table[1].to_string(),
            wednesday: table[2].to_string(),
            thursday: table[3].to_string(),
            friday: table[4].to_string(),
            saturday: table[5].to_string(),
            sunday: table[6].to_string(),
        }
    }
}

const SEDENTARY_WEEK: [&str; 7] = [
    "30-minute brisk walk + 10-minute stretching",
    "Rest day",
    "30-minute yoga session",
    "Rest day",
    "30-minute light cardio",
    "Rest day",
    "30-minute stretching and mobility exercises",
];

const MODERATE_WEEK: [&str; 7] = [
    "45-minute strength training (upper body)",
    "30-minute cardio (running/cycling)",
    "45-minute strength training (lower body)",
    "30-minute HIIT workout",
    "45-minute strength training (full body)",
    "Rest day",
    "45-minute yoga or stretching",
];

const ACTIVE_WEEK: [&str; 7] = [
    "60-minute strength training (push day)",
    "45-minute cardio + core workout",
    "60-minute strength training (pull day)",
    "45-minute HIIT + plyometrics",
    "60-minute strength training (legs)",
    "45-minute cardio + core workout",
    "60-minute active recovery (yoga/stretching)",
];

/// Build the weekly plan for an activity level and goal
///
/// Unknown activity levels use the moderate table. "lose weight"
/// swaps Tuesday and Thursday for extra cardio; "gain muscle" swaps
/// Monday, Wednesday and Friday for extra strength work.
pub fn generate_weekly_plan(activity_level: &str, goal: &str) -> WeeklyPlan {
    let table = match activity_level.to_lowercase().as_str() {
        "sedentary" => SEDENTARY_WEEK,
        "active" => ACTIVE_WEEK,
        _ => MODERATE_WEEK,
    };

    let mut plan = WeeklyPlan::from_table(table);

    match goal.to_lowercase().as_str() {
        "lose weight" => {
            plan.tuesday = "45-minute cardio (running/cycling) + 15-minute HIIT".to_string();
            plan.thursday = "45-minute HIIT workout + 15-minute cardio".to_string();
        }
        "gain muscle" => {
            plan.monday = "60-minute strength training (upper body) + 15-minute core".to_string();
            plan.wednesday =
                "60-minute strength training (lower body) + 15-minute core".to_string();
            plan.friday = "60-minute strength training (full body)".to_string();
        }
        _ => {}
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tables_by_activity() {
        let sedentary = generate_weekly_plan("sedentary", "maintain");
        assert_eq!(sedentary.monday, "30-minute brisk walk + 10-minute stretching");
        assert_eq!(sedentary.tuesday, "Rest day");

        let moderate = generate_weekly_plan("moderate", "maintain");
        assert_eq!(moderate.monday, "45-minute strength training (upper body)");
        assert_eq!(moderate.saturday, "Rest day");

        let active = generate_weekly_plan("active", "maintain");
        assert_eq!(active.sunday, "60-minute active recovery (yoga/stretching)");
    }

    #[test]
    fn test_unknown_activity_uses_moderate() {
        let plan = generate_weekly_plan("athlete", "maintain");
        assert_eq!(plan.monday, "45-minute strength training (upper body)");
    }

    #[test]
    fn test_lose_weight_adds_cardio_days() {
        let plan = generate_weekly_plan("moderate", "lose weight");
        assert_eq!(
            plan.tuesday,
            "45-minute cardio (running/cycling) + 15-minute HIIT"
        );
        assert_eq!(plan.thursday, "45-minute HIIT workout + 15-minute cardio");
        // Other days keep the base table
        assert_eq!(plan.monday, "45-minute strength training (upper body)");
    }

    #[test]
    fn test_gain_muscle_adds_strength_days() {
        let plan = generate_weekly_plan("sedentary", "gain muscle");
        assert_eq!(
            plan.monday,
            "60-minute strength training (upper body) + 15-minute core"
        );
        assert_eq!(
            plan.wednesday,
            "60-minute strength training (lower body) + 15-minute core"
        );
        assert_eq!(plan.friday, "60-minute strength training (full body)");
        // Untouched days keep the sedentary table
        assert_eq!(plan.tuesday, "Rest day");
    }

    #[test]
    fn test_goal_matching_is_case_insensitive() {
        let plan = generate_weekly_plan("moderate", "Lose Weight");
        assert_eq!(plan.thursday, "45-minute HIIT workout + 15-minute cardio");
    }
}
