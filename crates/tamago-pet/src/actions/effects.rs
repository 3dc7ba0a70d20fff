//! Attribute deltas for each care action.
//!
//! Sleeping and waking change the mood, not the attributes, so
//! [`effect_for`] has no entry for them.

use tamago_types::{PetAction, PetAttributes, clamp_stat};

/// A signed change to each bounded attribute. Age is never touched by an
/// action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeDelta {
    /// Change to hunger.
    pub hunger: f64,
    /// Change to happiness.
    pub happiness: f64,
    /// Change to energy.
    pub energy: f64,
    /// Change to health.
    pub health: f64,
    /// Change to cleanliness.
    pub cleanliness: f64,
    /// Change to discipline.
    pub discipline: f64,
}

impl AttributeDelta {
    /// A delta that changes nothing.
    pub const NONE: Self = Self {
        hunger: 0.0,
        happiness: 0.0,
        energy: 0.0,
        health: 0.0,
        cleanliness: 0.0,
        discipline: 0.0,
    };

    /// Apply the delta, clamping every bounded attribute.
    pub fn apply(&self, attributes: &PetAttributes) -> PetAttributes {
        PetAttributes {
            hunger: clamp_stat(attributes.hunger + self.hunger),
            happiness: clamp_stat(attributes.happiness + self.happiness),
            energy: clamp_stat(attributes.energy + self.energy),
            health: clamp_stat(attributes.health + self.health),
            cleanliness: clamp_stat(attributes.cleanliness + self.cleanliness),
            discipline: clamp_stat(attributes.discipline + self.discipline),
            age: attributes.age,
        }
    }
}

/// Feed: hunger +30.
pub const FEED: AttributeDelta = AttributeDelta {
    hunger: 30.0,
    ..AttributeDelta::NONE
};

/// Play: happiness +25, energy -10, hunger -5.
pub const PLAY: AttributeDelta = AttributeDelta {
    happiness: 25.0,
    energy: -10.0,
    hunger: -5.0,
    ..AttributeDelta::NONE
};

/// Clean: cleanliness +40, happiness +5.
pub const CLEAN: AttributeDelta = AttributeDelta {
    cleanliness: 40.0,
    happiness: 5.0,
    ..AttributeDelta::NONE
};

/// Discipline: discipline +15, happiness -10.
pub const DISCIPLINE: AttributeDelta = AttributeDelta {
    discipline: 15.0,
    happiness: -10.0,
    ..AttributeDelta::NONE
};

/// Medicine: health +30.
pub const MEDICINE: AttributeDelta = AttributeDelta {
    health: 30.0,
    ..AttributeDelta::NONE
};

/// Return the attribute delta for an action, or `None` for sleep/wake.
pub const fn effect_for(action: PetAction) -> Option<AttributeDelta> {
    match action {
        PetAction::Feed => Some(FEED),
        PetAction::Play => Some(PLAY),
        PetAction::Clean => Some(CLEAN),
        PetAction::Discipline => Some(DISCIPLINE),
        PetAction::Medicine => Some(MEDICINE),
        PetAction::ToggleSleep => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_sleep_has_no_attribute_effect() {
        assert!(effect_for(PetAction::ToggleSleep).is_none());
        assert!(
            PetAction::ALL
                .iter()
                .filter(|a| **a != PetAction::ToggleSleep)
                .all(|a| effect_for(*a).is_some())
        );
    }

    #[test]
    fn apply_clamps_both_ends() {
        let attrs = PetAttributes {
            hunger: 3.0,
            energy: 5.0,
            happiness: 90.0,
            ..PetAttributes::default()
        };
        let next = PLAY.apply(&attrs);
        assert!(next.hunger.abs() < f64::EPSILON);
        assert!(next.energy.abs() < f64::EPSILON);
        assert!((next.happiness - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn apply_leaves_age_alone() {
        let attrs = PetAttributes {
            age: 7.5,
            ..PetAttributes::default()
        };
        assert!((MEDICINE.apply(&attrs).age - 7.5).abs() < f64::EPSILON);
    }
}
