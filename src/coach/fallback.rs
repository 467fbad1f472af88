//! Rule-Based Fallback Responses
//!
//! Deterministic answers used whenever no chat model is configured or
//! the model call fails. Routing is keyword-based on the lowercased
//! message, with several branches specialized on the user's context.
//! Branch order matters: earlier topics win when keywords overlap.

use crate::coach::UserContext;

/// Produce a rule-based reply for a user message
pub fn fallback_response(user_message: &str, context: &UserContext) -> String {
    let message = user_message.to_lowercase();
    let diet_pref = lowered(&context.diet_preference);
    let activity = lowered(&context.activity_level);
    let goal = lowered(&context.goal);
    let target_calories = context.target_calories.unwrap_or(0.0);

    // Duration/timeline questions
    if contains_any(&message, &["how many days", "how long", "duration", "timeline"]) {
        return match goal.as_str() {
            "lose weight" => "For weight loss, you should follow this plan for at least 8-12 weeks to see significant results. Aim to lose 1-2 pounds per week for sustainable weight loss. Remember to track your progress and adjust the plan as needed.".to_string(),
            "gain muscle" => "For muscle gain, commit to this plan for at least 12-16 weeks. Muscle building takes time, and you should expect to gain about 0.5-1 pound of lean muscle per week when following the nutrition and workout plans consistently.".to_string(),
            _ => "For maintaining your fitness level and weight, this is meant to be a sustainable lifestyle plan. Start with a 12-week commitment, then adjust based on your progress and goals. Regular check-ins every 4 weeks will help ensure you're staying on track.".to_string(),
        };
    }

    // Meal frequency questions
    if contains_any(&message, &["how many meals", "meal frequency", "when to eat"]) {
        return if target_calories > 2000.0 {
            format!("With your target of {} calories, aim for 5-6 smaller meals throughout the day. This helps maintain steady energy levels and makes it easier to meet your caloric needs.", target_calories)
        } else {
            format!("With your target of {} calories, aim for 3 main meals and 1-2 snacks per day. Space your meals every 3-4 hours to maintain stable blood sugar levels.", target_calories)
        };
    }

    // Exercise frequency questions
    if contains_any(&message, &["how often", "exercise frequency", "workout frequency"]) {
        return match activity.as_str() {
            "sedentary" => "Start with 3 days per week of light exercise, focusing on building consistency. Include rest days between workouts to allow your body to adjust to the new routine.".to_string(),
            "moderate" => "Aim for 4-5 workout days per week, alternating between strength training and cardio. This gives you enough stimulus for progress while allowing adequate recovery.".to_string(),
            _ => "With your active lifestyle, you can train 5-6 days per week. Just ensure you're taking at least one full rest day and listening to your body's recovery needs.".to_string(),
        };
    }

    // Rest and recovery questions
    if contains_any(&message, &["rest", "recovery", "break", "rest day"]) {
        return if activity == "active" {
            "Take at least one full rest day per week. Active recovery like light walking or yoga can be done on other days when you feel you need extra recovery.".to_string()
        } else {
            "Include 2-3 rest days per week, spacing them between workout days. This helps prevent burnout and allows proper recovery, especially when you're starting out.".to_string()
        };
    }

    // Progress tracking questions
    if contains_any(&message, &["track progress", "measure results", "check progress"]) {
        return match goal.as_str() {
            "lose weight" => "Track your progress weekly by: 1) Weighing yourself first thing in the morning, 2) Taking body measurements, 3) Tracking your energy levels and workout performance, 4) Taking progress photos monthly.".to_string(),
            "gain muscle" => "Monitor your progress by: 1) Tracking your strength gains in workouts, 2) Taking monthly body measurements, 3) Weighing yourself weekly, 4) Taking progress photos every 4 weeks.".to_string(),
            _ => "Keep track of your maintenance by: 1) Monthly body measurements, 2) Weekly weigh-ins, 3) Tracking your energy levels and workout performance, 4) Regular progress photos if desired.".to_string(),
        };
    }

    // Topic responses keyed on context
    if contains_any(&message, &["meal", "food", "eat"]) {
        return match diet_pref.as_str() {
            "vegetarian" => "For your vegetarian diet, I recommend focusing on plant-based proteins like beans, lentils, and tofu. Include plenty of vegetables and whole grains for balanced nutrition. Aim to eat every 3-4 hours to maintain energy levels.".to_string(),
            "vegan" => "As a vegan, make sure to get enough protein from sources like tempeh, seitan, and legumes. Include a variety of fruits, vegetables, and whole grains in your meals. Consider B12 supplementation and eat regularly throughout the day.".to_string(),
            _ => "For a balanced diet, include lean proteins, whole grains, and plenty of vegetables. Try to have regular meals and healthy snacks throughout the day. Timing your meals every 3-4 hours helps maintain stable energy levels.".to_string(),
        };
    }

    if contains_any(&message, &["exercise", "workout"]) {
        return match activity.as_str() {
            "sedentary" => "Start with light activities like walking, stretching, or yoga. Aim for 30 minutes of activity most days of the week, with plenty of rest between sessions as you build up your fitness level.".to_string(),
            "moderate" => "Include a mix of cardio and strength training. Try to exercise 3-5 times per week for 30-45 minutes, allowing for rest days between strength training sessions.".to_string(),
            _ => "For your active lifestyle, focus on a combination of strength training, cardio, and flexibility exercises. Make sure to include rest days for recovery, and vary your workout intensity throughout the week.".to_string(),
        };
    }

    // Greeting or unknown query
    "I can help you with specific questions about your meal plan, workout routine, exercise frequency, rest days, and progress tracking. What would you like to know more about?".to_string()
}

fn contains_any(message: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| message.contains(phrase))
}

fn lowered(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(diet: &str, activity: &str, goal: &str, calories: f64) -> UserContext {
        UserContext {
            diet_preference: Some(diet.to_string()),
            activity_level: Some(activity.to_string()),
            goal: Some(goal.to_string()),
            target_calories: Some(calories),
            ..Default::default()
        }
    }

    #[test]
    fn test_duration_branch_by_goal() {
        let ctx = context("vegan", "moderate", "lose weight", 1800.0);
        let reply = fallback_response("How long should I follow this?", &ctx);
        assert!(reply.starts_with("For weight loss"));

        let ctx = context("vegan", "moderate", "gain muscle", 2800.0);
        let reply = fallback_response("what's the timeline here", &ctx);
        assert!(reply.starts_with("For muscle gain"));

        let ctx = context("vegan", "moderate", "maintain", 2200.0);
        let reply = fallback_response("how many days per week?", &ctx);
        assert!(reply.starts_with("For maintaining"));
    }

    #[test]
    fn test_meal_frequency_uses_calorie_target() {
        let ctx = context("vegan", "moderate", "gain muscle", 2800.0);
        let reply = fallback_response("when to eat?", &ctx);
        assert!(reply.contains("With your target of 2800 calories"));
        assert!(reply.contains("5-6 smaller meals"));

        let ctx = context("vegan", "moderate", "lose weight", 1800.0);
        let reply = fallback_response("meal frequency", &ctx);
        assert!(reply.contains("With your target of 1800 calories"));
        assert!(reply.contains("3 main meals"));
    }

    #[test]
    fn test_duration_outranks_meal_keywords() {
        // Message hits both the duration and the meal branch; the
        // earlier branch wins.
        let ctx = context("vegetarian", "moderate", "maintain", 2000.0);
        let reply = fallback_response("how long until I can eat more food?", &ctx);
        assert!(reply.starts_with("For maintaining"));
    }

    #[test]
    fn test_exercise_frequency_by_activity() {
        let ctx = context("vegan", "sedentary", "maintain", 2000.0);
        let reply = fallback_response("how often should I work out?", &ctx);
        assert!(reply.starts_with("Start with 3 days per week"));

        let ctx = context("vegan", "active", "maintain", 2000.0);
        let reply = fallback_response("workout frequency?", &ctx);
        assert!(reply.contains("5-6 days per week"));
    }

    #[test]
    fn test_rest_branch() {
        let ctx = context("vegan", "active", "maintain", 2000.0);
        let reply = fallback_response("do I need recovery time?", &ctx);
        assert!(reply.starts_with("Take at least one full rest day"));

        let ctx = context("vegan", "sedentary", "maintain", 2000.0);
        let reply = fallback_response("when can I take a break", &ctx);
        assert!(reply.starts_with("Include 2-3 rest days"));
    }

    #[test]
    fn test_progress_tracking_by_goal() {
        let ctx = context("vegan", "moderate", "lose weight", 1800.0);
        let reply = fallback_response("how do I track progress?", &ctx);
        assert!(reply.starts_with("Track your progress weekly"));
    }

    #[test]
    fn test_meal_topic_by_diet() {
        let ctx = context("vegetarian", "moderate", "maintain", 2000.0);
        let reply = fallback_response("what food should I buy?", &ctx);
        assert!(reply.contains("vegetarian diet"));

        let ctx = context("vegan", "moderate", "maintain", 2000.0);
        let reply = fallback_response("suggest a meal", &ctx);
        assert!(reply.starts_with("As a vegan"));

        let ctx = context("non-vegetarian", "moderate", "maintain", 2000.0);
        let reply = fallback_response("what should I eat", &ctx);
        assert!(reply.starts_with("For a balanced diet"));
    }

    #[test]
    fn test_exercise_topic_by_activity() {
        let ctx = context("vegan", "sedentary", "maintain", 2000.0);
        let reply = fallback_response("which exercise is best?", &ctx);
        assert!(reply.starts_with("Start with light activities"));
    }

    #[test]
    fn test_default_reply_for_greeting() {
        let ctx = context("vegan", "moderate", "maintain", 2000.0);
        let reply = fallback_response("hello!", &ctx);
        assert!(reply.starts_with("I can help you with specific questions"));
    }

    #[test]
    fn test_empty_context_does_not_panic() {
        let reply = fallback_response("meal frequency", &UserContext::default());
        assert!(reply.contains("With your target of 0 calories"));
    }
}
