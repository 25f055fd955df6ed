//! Mock implementations for testing and demos.
//!
//! - [`MockDataService`] - canned data, simulated latency, failure injection
//! - [`fixtures`] - the canned records themselves

pub mod fixtures;
pub mod service;

pub use service::{MockDataService, DEFAULT_LATENCY};
