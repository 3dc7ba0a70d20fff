//! Enumeration types for the Tamago simulation.
//!
//! Life stages, moods, actions, speed settings and the small vocabulary of
//! visual cues a view can react to.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Life stage
// ---------------------------------------------------------------------------

/// Discrete life phase derived from the pet's age.
///
/// Variants are declared in growth order so that `Ord` ranks them: a later
/// stage compares greater than an earlier one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum Stage {
    /// Freshly born, age below 1.
    #[default]
    Egg,
    /// Age 1 to 5.
    Baby,
    /// Age 5 to 10.
    Child,
    /// Age 10 to 20.
    Teen,
    /// Age 20 and beyond.
    Adult,
}

impl core::fmt::Display for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Egg => write!(f, "egg"),
            Self::Baby => write!(f, "baby"),
            Self::Child => write!(f, "child"),
            Self::Teen => write!(f, "teen"),
            Self::Adult => write!(f, "adult"),
        }
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Mood of an awake pet, re-derived from attributes on every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum AwakeMood {
    /// No threshold rule fired.
    #[default]
    Normal,
    /// Very happy and rested.
    Happy,
    /// Hungry or unhappy.
    Sad,
    /// Health is low.
    Sick,
}

/// Current mood of the pet.
///
/// `Sleeping` is a sticky sub-state entered and left only through the
/// sleep/wake action. The tick-driven classifier only ever rewrites the
/// `Awake` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Mood {
    /// Asleep: energy recovers and most actions are unavailable.
    Sleeping,
    /// Awake with a derived mood.
    Awake(AwakeMood),
}

impl Mood {
    /// Whether the pet is asleep.
    pub const fn is_sleeping(self) -> bool {
        matches!(self, Self::Sleeping)
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::Awake(AwakeMood::Normal)
    }
}

impl core::fmt::Display for Mood {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sleeping => write!(f, "sleeping"),
            Self::Awake(AwakeMood::Normal) => write!(f, "normal"),
            Self::Awake(AwakeMood::Happy) => write!(f, "happy"),
            Self::Awake(AwakeMood::Sad) => write!(f, "sad"),
            Self::Awake(AwakeMood::Sick) => write!(f, "sick"),
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A care action a user can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum PetAction {
    /// Hunger +30.
    Feed,
    /// Happiness +25, energy -10, hunger -5.
    Play,
    /// Put the pet to sleep, or wake it up.
    ToggleSleep,
    /// Cleanliness +40, happiness +5.
    Clean,
    /// Discipline +15, happiness -10.
    Discipline,
    /// Health +30.
    Medicine,
}

impl PetAction {
    /// Every action, in the order a view would list them.
    pub const ALL: [Self; 6] = [
        Self::Feed,
        Self::Play,
        Self::ToggleSleep,
        Self::Clean,
        Self::Discipline,
        Self::Medicine,
    ];

    /// Whether this action is allowed while the pet sleeps.
    pub const fn allowed_while_sleeping(self) -> bool {
        matches!(self, Self::ToggleSleep)
    }
}

impl core::fmt::Display for PetAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Feed => write!(f, "feed"),
            Self::Play => write!(f, "play"),
            Self::ToggleSleep => write!(f, "toggle_sleep"),
            Self::Clean => write!(f, "clean"),
            Self::Discipline => write!(f, "discipline"),
            Self::Medicine => write!(f, "medicine"),
        }
    }
}

/// The concrete action that was last applied.
///
/// Unlike [`PetAction`], sleeping and waking are distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum PerformedAction {
    /// The pet was fed.
    Feed,
    /// The pet played.
    Play,
    /// The pet went to sleep.
    Sleep,
    /// The pet woke up.
    Wake,
    /// The pet was cleaned.
    Clean,
    /// The pet was disciplined.
    Discipline,
    /// The pet received medicine.
    Medicine,
}

/// Reason an action was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RejectionReason {
    /// The pet has died; only reinitialization helps.
    Dead,
    /// The pet is asleep and the action needs it awake.
    Sleeping,
}

impl core::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Dead => write!(f, "pet is dead"),
            Self::Sleeping => write!(f, "pet is sleeping"),
        }
    }
}

// ---------------------------------------------------------------------------
// Time control
// ---------------------------------------------------------------------------

/// Supported simulation speed multipliers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SpeedMultiplier {
    /// 0.5x: simulated time runs at half of real time.
    Half,
    /// 1x: simulated time equals real time.
    #[default]
    Normal,
    /// 2x: simulated time runs twice as fast.
    Double,
}

impl SpeedMultiplier {
    /// Every supported multiplier, slowest first.
    pub const ALL: [Self; 3] = [Self::Half, Self::Normal, Self::Double];

    /// Scale factor applied to real elapsed time.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::Double => 2.0,
        }
    }
}

impl core::fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Half => write!(f, "0.5x"),
            Self::Normal => write!(f, "1x"),
            Self::Double => write!(f, "2x"),
        }
    }
}

/// Why a tick did not advance the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum TickSkip {
    /// The simulation is paused.
    Paused,
    /// The pet is dead.
    Dead,
}

// ---------------------------------------------------------------------------
// Presentation hints
// ---------------------------------------------------------------------------

/// A short-lived visual cue category. Opaque to the simulation; a view
/// maps each to whatever animation it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Cue {
    /// Feeding, playing, growing up.
    Bounce,
    /// Cleaning and discipline.
    Shake,
    /// Sleeping, waking, dying.
    Fade,
    /// Medicine.
    Spin,
}
