//! Error types for the tamago-pet crate.
//!
//! Domain preconditions (acting on a dead or sleeping pet) are not errors;
//! they are reported as [`RejectionReason`](tamago_types::RejectionReason).
//! The only failures here come from invalid tuning parameters.

/// Errors that can occur when validating pet configuration.
#[derive(Debug, thiserror::Error)]
pub enum PetError {
    /// A rate is negative or not a finite number.
    #[error("invalid rate {name}: {value} (must be finite and >= 0)")]
    InvalidRate {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A threshold lies outside the attribute range.
    #[error("invalid threshold {name}: {value} (must be within 0..=100)")]
    InvalidThreshold {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The sub-step size is zero, negative, or not finite.
    #[error("invalid max_step_ms: {value} (must be finite and > 0)")]
    InvalidStep {
        /// The rejected value.
        value: f64,
    },
}
