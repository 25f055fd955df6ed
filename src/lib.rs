//! Content Factory - state stores for a government-affairs media dashboard
//!
//! This library exposes modules for use in integration tests and the demo
//! binary.

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod prelude;
pub mod state;
pub mod traits;
