//! The simulation aggregate: one pet plus everything that moves it.
//!
//! [`Simulation`] is the single owner of the pet's attributes and state,
//! the clock, the event log and the transient feedback. All mutation goes
//! through the tick cycle ([`crate::tick`]) or the controller
//! ([`crate::controller`]); hosts read it through [`Simulation::snapshot`].

use chrono::{DateTime, Utc};
use tamago_pet::{DecayConfig, PetError};
use tamago_types::{PetAttributes, PetEvent, PetId, PetSnapshot, PetState};
use tracing::{debug, info};

use crate::clock::{ClockError, SimulationClock};
use crate::config::SimulationConfig;
use crate::event_log::EventLog;
use crate::feedback::Feedback;

/// Errors that can occur when building a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// The decay configuration is invalid.
    #[error("invalid decay configuration: {source}")]
    Decay {
        /// The underlying validation error.
        #[from]
        source: PetError,
    },

    /// The clock could not be built.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },
}

/// A running pet simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Identity of the current pet lifetime.
    pub(crate) pet_id: PetId,
    /// Continuous attributes.
    pub(crate) attributes: PetAttributes,
    /// Discrete state.
    pub(crate) state: PetState,
    /// Simulated time.
    pub(crate) clock: SimulationClock,
    /// Recent event lines, newest first.
    pub(crate) log: EventLog,
    /// Current notification and cues.
    pub(crate) feedback: Feedback,
    /// Decay rates used by every tick.
    pub(crate) decay: DecayConfig,
}

impl Simulation {
    /// Hatch a new pet at `now` with default attributes and state.
    ///
    /// The event log starts with the birth entry.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if the decay rates or the day period are
    /// invalid.
    pub fn new(config: &SimulationConfig, now: DateTime<Utc>) -> Result<Self, SimulationError> {
        let mut sim =
            Self::from_parts(config, PetAttributes::default(), PetState::default(), now)?;
        sim.emit(PetEvent::Born, now);

        info!(
            pet_id = %sim.pet_id,
            day_period_ms = config.time.day_period_ms,
            "Pet hatched"
        );
        Ok(sim)
    }

    /// Build a simulation around existing attributes and state (useful for
    /// testing and state restoration).
    ///
    /// Attributes are clamped and the event log starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if the decay rates or the day period are
    /// invalid.
    pub fn from_parts(
        config: &SimulationConfig,
        attributes: PetAttributes,
        state: PetState,
        now: DateTime<Utc>,
    ) -> Result<Self, SimulationError> {
        config.decay.validate()?;
        let clock = SimulationClock::new(now, config.time.day_period())?;
        Ok(Self {
            pet_id: PetId::new(),
            attributes: attributes.clamped(),
            state,
            clock,
            log: EventLog::new(config.feedback.event_log_capacity),
            feedback: Feedback::new(&config.feedback),
            decay: config.decay.clone(),
        })
    }

    /// Identity of the current pet lifetime.
    pub const fn pet_id(&self) -> PetId {
        self.pet_id
    }

    /// Current attributes.
    pub const fn attributes(&self) -> &PetAttributes {
        &self.attributes
    }

    /// Current discrete state.
    pub const fn state(&self) -> &PetState {
        &self.state
    }

    /// The simulation clock.
    pub const fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// The event log.
    pub const fn log(&self) -> &EventLog {
        &self.log
    }

    /// Decay rates in use.
    pub const fn decay(&self) -> &DecayConfig {
        &self.decay
    }

    /// Whether ticks currently have any effect: the pet is alive and the
    /// clock is not paused.
    pub const fn is_ticking(&self) -> bool {
        self.state.is_alive && !self.clock.is_paused()
    }

    /// Everything a view needs at `now`, with expired feedback filtered out.
    pub fn snapshot(&self, now: DateTime<Utc>) -> PetSnapshot {
        PetSnapshot {
            pet_id: self.pet_id,
            attributes: self.attributes,
            state: self.state,
            clock: self.clock.snapshot(),
            log: self.log.to_vec(),
            notification: self.feedback.active_notification(now).cloned(),
            cues: self.feedback.active_cues(now),
        }
    }

    /// Record `event`: log line, notification, and cue if it has one.
    pub(crate) fn emit(&mut self, event: PetEvent, now: DateTime<Utc>) {
        self.feedback.prune(now);
        self.log.record(now, event.message());
        self.feedback.notify(event.toast(), now);
        if let Some(cue) = event.cue() {
            self.feedback.trigger(cue, now);
        }
        debug!(pet_id = %self.pet_id, event = ?event, "Event recorded");
    }
}
