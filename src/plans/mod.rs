//! Plan Generators
//!
//! Produces the daily meal plan and weekly workout plan returned by the
//! plan endpoints. Meal selection is randomized per category from fixed
//! catalogs; workout plans are deterministic weekly tables adjusted for
//! the user's goal.

pub mod meals;
pub mod workouts;

pub use meals::{generate_daily_plan, DailyPlan};
pub use workouts::{generate_weekly_plan, WeeklyPlan};
