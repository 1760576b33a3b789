//! Learner memory abstractions.

pub mod store;
