//! API Routes
//!
//! Route handlers organized by functionality.

pub mod chat;
pub mod health;
pub mod meal_plan;
pub mod nutrition;
pub mod speech;
pub mod workout_plan;
