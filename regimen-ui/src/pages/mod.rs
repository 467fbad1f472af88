//! Pages
//!
//! Top-level page components for each route.

pub mod planner;
pub mod settings;

pub use planner::Planner;
pub use settings::Settings;
