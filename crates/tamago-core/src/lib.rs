//! Simulation clock, tick cycle, controller, and driver for the Tamago pet.
//!
//! This crate owns the [`Simulation`] aggregate and everything that moves
//! it: wall-clock ticks, host commands, and the async driver task.
//!
//! # Modules
//!
//! - [`clock`] -- Speed multiplier, pause flag, simulated time, day/night
//!   boundaries.
//! - [`config`] -- Configuration loading from `tamago-config.yaml` into
//!   strongly-typed structs.
//! - [`controller`] -- Care actions, pause, speed and reinitialization.
//! - [`event_log`] -- Bounded newest-first event log.
//! - [`feedback`] -- Expiring notification and visual cues.
//! - [`runner`] -- Tokio driver task and [`PetHandle`].
//! - [`simulation`] -- The [`Simulation`] aggregate and snapshots.
//! - [`tick`] -- The per-tick cycle.
//!
//! [`PetHandle`]: runner::PetHandle
//! [`Simulation`]: simulation::Simulation

pub mod clock;
pub mod config;
pub mod controller;
pub mod event_log;
pub mod feedback;
pub mod runner;
pub mod simulation;
pub mod tick;

pub use controller::ActionReport;
pub use simulation::{Simulation, SimulationError};
pub use tick::TickSummary;
