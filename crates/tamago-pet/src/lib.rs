//! Attribute decay, classification, and care actions for the Tamago pet.
//!
//! This crate contains the logic layer for the pet -- everything that
//! operates on pet state without touching I/O or the wall clock. It sits
//! between `tamago-types` (which defines the data structures) and
//! `tamago-core` (which owns the simulation aggregate and drives ticks).
//!
//! # Modules
//!
//! - [`actions`] -- Action preconditions, attribute effects, and execution
//! - [`appearance`] -- Emoji face per stage and mood
//! - [`classify`] -- Stage, mood, and mortality derivation
//! - [`config`] -- Tunable decay rates and thresholds ([`DecayConfig`])
//! - [`error`] -- Configuration errors ([`PetError`])
//! - [`vitals`] -- Per-delta attribute decay

pub mod actions;
pub mod appearance;
pub mod classify;
pub mod config;
pub mod error;
pub mod vitals;

// Re-export primary types at crate root for convenience.
pub use actions::ActionOutcome;
pub use classify::{
    MortalityCheck, Reclassification, check_mortality, derive_mood, derive_stage, reclassify,
};
pub use config::{DecayConfig, NeglectPenalty};
pub use error::PetError;
pub use vitals::{advance_time, advance_time_stepped};
