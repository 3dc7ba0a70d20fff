//! Emoji face for a stage and mood, for text-mode views.

use tamago_types::{AwakeMood, Mood, PetState, Stage};

/// Shown once the pet has died.
pub const DEAD_GLYPH: &str = "☠️";

/// The face for a given stage and mood while alive.
pub const fn face(stage: Stage, mood: Mood) -> &'static str {
    match (stage, mood) {
        (Stage::Egg, Mood::Sleeping) => "💤🥚",
        (Stage::Egg, Mood::Awake(_)) => "🥚",

        (Stage::Baby, Mood::Sleeping) => "💤👶",
        (Stage::Baby, Mood::Awake(AwakeMood::Normal)) => "👶",
        (Stage::Baby, Mood::Awake(AwakeMood::Happy)) => "😊",
        (Stage::Baby, Mood::Awake(AwakeMood::Sad)) => "😢",
        (Stage::Baby, Mood::Awake(AwakeMood::Sick)) => "🤒",

        (Stage::Child, Mood::Sleeping) => "💤🧒",
        (Stage::Child, Mood::Awake(AwakeMood::Normal)) => "🧒",
        (Stage::Child, Mood::Awake(AwakeMood::Happy)) => "😄",
        (Stage::Child, Mood::Awake(AwakeMood::Sad)) => "😭",
        (Stage::Child, Mood::Awake(AwakeMood::Sick)) => "🤢",

        (Stage::Teen, Mood::Sleeping) => "💤👦",
        (Stage::Teen, Mood::Awake(AwakeMood::Normal)) => "👦",
        (Stage::Teen, Mood::Awake(AwakeMood::Happy)) => "😁",
        (Stage::Teen, Mood::Awake(AwakeMood::Sad)) => "😔",
        (Stage::Teen, Mood::Awake(AwakeMood::Sick)) => "🤮",

        (Stage::Adult, Mood::Sleeping) => "💤🧑",
        (Stage::Adult, Mood::Awake(AwakeMood::Normal)) => "🧑",
        (Stage::Adult, Mood::Awake(AwakeMood::Happy)) => "😎",
        (Stage::Adult, Mood::Awake(AwakeMood::Sad)) => "😫",
        (Stage::Adult, Mood::Awake(AwakeMood::Sick)) => "🥵",
    }
}

/// The glyph to draw for the pet right now.
pub const fn glyph(state: &PetState) -> &'static str {
    if state.is_alive {
        face(state.stage, state.mood)
    } else {
        DEAD_GLYPH
    }
}
