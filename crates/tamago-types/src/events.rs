//! Events emitted by the simulation.
//!
//! Every applied action and every derived transition produces a
//! [`PetEvent`]. The event carries the data; [`PetEvent::message`] renders
//! the line written to the event log and [`PetEvent::toast`] the shorter
//! text shown as a transient notification.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Cue, PerformedAction, SpeedMultiplier, Stage};

/// Something noteworthy that happened to the pet or the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum PetEvent {
    /// A new pet hatched (simulation start or reinitialization).
    Born,
    /// A care action was applied.
    ActionApplied {
        /// The action that took effect.
        action: PerformedAction,
    },
    /// The pet grew into a new life stage.
    StageAdvanced {
        /// The stage just entered.
        stage: Stage,
    },
    /// Health reached zero.
    Died,
    /// Simulated time crossed a day/night boundary.
    DayNightChanged {
        /// Whether it is now day.
        is_day_time: bool,
    },
    /// Ticks are suspended.
    Paused,
    /// Ticks resumed.
    Resumed,
    /// The speed multiplier changed.
    SpeedChanged {
        /// The new multiplier.
        speed: SpeedMultiplier,
    },
}

impl PetEvent {
    /// Event log line.
    pub fn message(&self) -> String {
        match self {
            Self::Born => "A new pet was born!".to_owned(),
            Self::ActionApplied { action } => match action {
                PerformedAction::Feed => "You fed your pet!".to_owned(),
                PerformedAction::Play => "You played with your pet!".to_owned(),
                PerformedAction::Sleep => "Your pet went to sleep!".to_owned(),
                PerformedAction::Wake => "Your pet woke up!".to_owned(),
                PerformedAction::Clean => "You cleaned your pet!".to_owned(),
                PerformedAction::Discipline => "You disciplined your pet!".to_owned(),
                PerformedAction::Medicine => "You gave your pet medicine!".to_owned(),
            },
            Self::StageAdvanced { stage } => format!("Your pet grew into a {stage}!"),
            Self::Died => "Your pet passed away...".to_owned(),
            Self::DayNightChanged { is_day_time: true } => "The sun is up!".to_owned(),
            Self::DayNightChanged { is_day_time: false } => "Night has fallen!".to_owned(),
            Self::Paused => "Game paused!".to_owned(),
            Self::Resumed => "Game resumed!".to_owned(),
            Self::SpeedChanged { speed } => format!("Speed set to {speed}!"),
        }
    }

    /// Transient notification text. Actions get a short exclamation; every
    /// other event reuses its log line.
    pub fn toast(&self) -> String {
        match self {
            Self::ActionApplied { action } => match action {
                PerformedAction::Feed => "Yum yum! 🍔".to_owned(),
                PerformedAction::Play => "Wheee! 🎮".to_owned(),
                PerformedAction::Sleep => "Zzz... 💤".to_owned(),
                PerformedAction::Wake => "Good morning! ☀️".to_owned(),
                PerformedAction::Clean => "Squeaky clean! 🧼".to_owned(),
                PerformedAction::Discipline => "Behaving! 📏".to_owned(),
                PerformedAction::Medicine => "Feeling better! 💊".to_owned(),
            },
            other => other.message(),
        }
    }

    /// The visual cue this event triggers, if any.
    pub const fn cue(&self) -> Option<Cue> {
        match self {
            Self::ActionApplied { action } => Some(match action {
                PerformedAction::Feed | PerformedAction::Play => Cue::Bounce,
                PerformedAction::Sleep | PerformedAction::Wake => Cue::Fade,
                PerformedAction::Clean | PerformedAction::Discipline => Cue::Shake,
                PerformedAction::Medicine => Cue::Spin,
            }),
            Self::StageAdvanced { .. } => Some(Cue::Bounce),
            Self::Died => Some(Cue::Fade),
            Self::Born
            | Self::DayNightChanged { .. }
            | Self::Paused
            | Self::Resumed
            | Self::SpeedChanged { .. } => None,
        }
    }
}

impl core::fmt::Display for PetEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message())
    }
}
