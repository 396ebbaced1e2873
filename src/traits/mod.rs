//! Trait definitions for the collaborators of the interaction layer.
//!
//! Implement these to plug a different rules engine behind the controller.

pub mod rules;

pub use rules::{MoveAttempt, RulesEngine};
