//! API Client
//!
//! HTTP communication with the Regimen REST API.

pub mod client;

pub use client::*;
