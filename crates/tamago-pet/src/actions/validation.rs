//! Action preconditions.
//!
//! Two checks, in order:
//! 1. Alive -- nothing can be done for a dead pet.
//! 2. Awake -- everything except sleep/wake needs the pet awake.
//!
//! Each check returns `Ok(())` on success or a [`RejectionReason`].

use tamago_types::{PetAction, PetState, RejectionReason};

/// Run every precondition for `action` against `state`.
pub const fn validate(action: PetAction, state: &PetState) -> Result<(), RejectionReason> {
    if !state.is_alive {
        return Err(RejectionReason::Dead);
    }
    if state.mood.is_sleeping() && !action.allowed_while_sleeping() {
        return Err(RejectionReason::Sleeping);
    }
    Ok(())
}

/// Whether `action` would currently be applied. Handy for enabling or
/// disabling buttons in a view.
pub const fn is_available(action: PetAction, state: &PetState) -> bool {
    validate(action, state).is_ok()
}
