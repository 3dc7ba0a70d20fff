//! Care actions: preconditions, attribute effects, and execution.
//!
//! # Submodules
//!
//! - [`effects`] -- Attribute deltas per action.
//! - [`handlers`] -- Execution logic for each action.
//! - [`validation`] -- Alive and awake preconditions.

pub mod effects;
pub mod handlers;
pub mod validation;

pub use handlers::{ActionOutcome, execute, perform};
pub use validation::{is_available, validate};
