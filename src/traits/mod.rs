//! Trait abstractions for dependency injection and testability.
//!
//! - [`DataService`] - backend operations used by the stores

pub mod data_service;

pub use data_service::DataService;
