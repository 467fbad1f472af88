//! Regimen Planner
//!
//! AI Diet & Fitness Coach frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Health profile form driving nutrition, meal and workout plans
//! - Coaching chat grounded in the computed plan context
//! - Plan narration (text-to-speech) and plain-text download
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Regimen API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod plan_text;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
