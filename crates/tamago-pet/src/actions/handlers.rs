//! Execution handlers for care actions.
//!
//! [`execute`] assumes the action has already passed
//! [`validate`](super::validation::validate). [`perform`] runs both. Neither
//! runs the classification pass; the caller does that on the result so a
//! stage change or death is detected the same way as after a tick.

use tamago_types::{
    AwakeMood, Mood, PerformedAction, PetAction, PetAttributes, PetState, RejectionReason,
};
use tracing::debug;

use super::effects;
use super::validation;

/// The changes produced by a successful action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionOutcome {
    /// The concrete action that took effect.
    pub performed: PerformedAction,
    /// Attributes after the action.
    pub attributes: PetAttributes,
    /// Mood after the action.
    pub mood: Mood,
}

/// Validate and execute `action`.
///
/// On rejection nothing is computed and the reason is returned.
pub fn perform(
    action: PetAction,
    attributes: &PetAttributes,
    state: &PetState,
) -> Result<ActionOutcome, RejectionReason> {
    validation::validate(action, state)?;
    let outcome = execute(action, attributes, state.mood);
    debug!(
        action = %action,
        performed = ?outcome.performed,
        mood = %outcome.mood,
        "Action executed"
    );
    Ok(outcome)
}

/// Execute a validated action.
pub fn execute(action: PetAction, attributes: &PetAttributes, mood: Mood) -> ActionOutcome {
    match action {
        PetAction::ToggleSleep => toggle_sleep(attributes, mood),
        PetAction::Feed => with_effect(PerformedAction::Feed, action, attributes, mood),
        PetAction::Play => with_effect(PerformedAction::Play, action, attributes, mood),
        PetAction::Clean => with_effect(PerformedAction::Clean, action, attributes, mood),
        PetAction::Discipline => {
            with_effect(PerformedAction::Discipline, action, attributes, mood)
        }
        PetAction::Medicine => with_effect(PerformedAction::Medicine, action, attributes, mood),
    }
}

/// Flip between sleeping and awake. Waking always lands on `Normal`; the
/// next classification pass picks the real awake mood.
const fn toggle_sleep(attributes: &PetAttributes, mood: Mood) -> ActionOutcome {
    let (performed, mood) = if mood.is_sleeping() {
        (PerformedAction::Wake, Mood::Awake(AwakeMood::Normal))
    } else {
        (PerformedAction::Sleep, Mood::Sleeping)
    };
    ActionOutcome {
        performed,
        attributes: *attributes,
        mood,
    }
}

/// Apply the action's attribute delta, leaving the mood to the classifier.
fn with_effect(
    performed: PerformedAction,
    action: PetAction,
    attributes: &PetAttributes,
    mood: Mood,
) -> ActionOutcome {
    let attributes = effects::effect_for(action)
        .map_or(*attributes, |delta| delta.apply(attributes));
    ActionOutcome {
        performed,
        attributes,
        mood,
    }
}
