//! UI Components
//!
//! Reusable Leptos components for the planner.

pub mod chat;
pub mod nav;
pub mod profile_form;
pub mod results;
pub mod toast;

pub use chat::ChatWidget;
pub use nav::Nav;
pub use profile_form::ProfileFormCard;
pub use results::Results;
pub use toast::Toast;
