//! Core record types for greetflow.
//!
//! This crate defines the `Person` record that flows through the pipeline,
//! the `Greeter` capability it implements, and the age classifier used by the
//! CLI demonstration.

pub mod age_group;
pub mod person;

pub use age_group::AgeGroup;
pub use person::{Greeter, PERSON_NAMES, Person};

/// Exclusive upper bound for generated ages.
pub const MAX_AGE: u8 = 100;
