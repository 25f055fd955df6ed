//! Concrete implementations of trait abstractions.
//!
//! Only a mock backend exists today: see [`mock::MockDataService`].

pub mod mock;

pub use mock::MockDataService;
