//! Core data structs: attributes, discrete state, clock and snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Cue, Mood, PerformedAction, SpeedMultiplier, Stage};
use crate::ids::PetId;

/// Upper bound of every bounded attribute.
pub const STAT_MAX: f64 = 100.0;

/// Lower bound of every bounded attribute.
pub const STAT_MIN: f64 = 0.0;

/// Clamp a bounded attribute into `[STAT_MIN, STAT_MAX]`.
///
/// `NaN` collapses to the floor so a corrupt input can never escape the range.
pub fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}

/// The pet's continuous attributes.
///
/// Every field except `age` lives in `[0, 100]`. Age is unbounded and only
/// ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetAttributes {
    /// Satiety. 100 is full, 0 is starving.
    pub hunger: f64,
    /// 100 is delighted.
    pub happiness: f64,
    /// 100 is fully rested.
    pub energy: f64,
    /// 0 means death.
    pub health: f64,
    /// 100 is spotless.
    pub cleanliness: f64,
    /// Relaxes toward 50 when left alone.
    pub discipline: f64,
    /// Grows by 1.0 every 100,000 simulated milliseconds.
    pub age: f64,
}

impl Default for PetAttributes {
    fn default() -> Self {
        Self {
            hunger: STAT_MAX,
            happiness: STAT_MAX,
            energy: STAT_MAX,
            health: STAT_MAX,
            cleanliness: STAT_MAX,
            discipline: 50.0,
            age: 0.0,
        }
    }
}

impl PetAttributes {
    /// Return a copy with every bounded attribute clamped and age floored at 0.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            hunger: clamp_stat(self.hunger),
            happiness: clamp_stat(self.happiness),
            energy: clamp_stat(self.energy),
            health: clamp_stat(self.health),
            cleanliness: clamp_stat(self.cleanliness),
            discipline: clamp_stat(self.discipline),
            age: if self.age.is_nan() { 0.0 } else { self.age.max(0.0) },
        }
    }

    /// The six bounded attributes in declaration order, for range checks.
    pub const fn bounded(&self) -> [f64; 6] {
        [
            self.hunger,
            self.happiness,
            self.energy,
            self.health,
            self.cleanliness,
            self.discipline,
        ]
    }
}

/// Discrete state derived from (or layered over) the attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetState {
    /// False once health reaches 0. Only reinitialization revives.
    pub is_alive: bool,
    /// Current life stage. Never regresses.
    pub stage: Stage,
    /// Current mood.
    pub mood: Mood,
    /// Whether it is currently day in simulated time.
    pub is_day_time: bool,
    /// The last action that was applied, if any.
    pub last_action: Option<PerformedAction>,
}

impl Default for PetState {
    fn default() -> Self {
        Self {
            is_alive: true,
            stage: Stage::Egg,
            mood: Mood::default(),
            is_day_time: true,
            last_action: None,
        }
    }
}

/// Read-only view of the simulation clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClockSnapshot {
    /// Wall-clock time of the last processed tick (or clock reset).
    pub last_tick: DateTime<Utc>,
    /// Total simulated milliseconds since birth.
    pub total_simulated_ms: f64,
    /// Current speed multiplier.
    pub speed: SpeedMultiplier,
    /// Whether ticks are currently ignored.
    pub paused: bool,
}

/// One line of the human-readable event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventLogEntry {
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// Display text.
    pub text: String,
}

/// A transient user-facing message with its expiry time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Notification {
    /// Display text.
    pub message: String,
    /// The view should stop showing the message at this time.
    pub expires_at: DateTime<Utc>,
}

/// A triggered visual cue with its expiry time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActiveCue {
    /// Which cue is active.
    pub cue: Cue,
    /// The view should stop playing the cue at this time.
    pub expires_at: DateTime<Utc>,
}

/// Everything a view needs to render one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetSnapshot {
    /// Identity of the current pet lifetime.
    pub pet_id: PetId,
    /// Continuous attributes.
    pub attributes: PetAttributes,
    /// Discrete state.
    pub state: PetState,
    /// Clock state.
    pub clock: ClockSnapshot,
    /// Most recent log entries, newest first.
    pub log: Vec<EventLogEntry>,
    /// The notification to show right now, if any.
    pub notification: Option<Notification>,
    /// Cues still playing right now.
    pub cues: Vec<ActiveCue>,
}
