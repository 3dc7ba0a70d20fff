//! Shared type definitions for the Tamago pet simulation.
//!
//! This crate is the single source of truth for all types used across the
//! Tamago workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` so a web view can render snapshots without redefining them.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for pet lifetimes
//! - [`enums`] -- Stages, moods, actions, speed settings, cues
//! - [`structs`] -- Attributes, discrete state, clock view, snapshots
//! - [`events`] -- Events emitted by the simulation

pub mod enums;
pub mod events;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    AwakeMood, Cue, Mood, PerformedAction, PetAction, RejectionReason, SpeedMultiplier, Stage,
    TickSkip,
};
pub use events::PetEvent;
pub use ids::PetId;
pub use structs::{
    ActiveCue, ClockSnapshot, EventLogEntry, Notification, PetAttributes, PetSnapshot, PetState,
    STAT_MAX, STAT_MIN, clamp_stat,
};
