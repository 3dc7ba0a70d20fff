//! Classifier: discrete state derived from the attributes.
//!
//! Stage follows a monotone staircase over age. Mood is re-derived from
//! scratch on every pass, except that `Sleeping` is left alone. Mortality
//! is a one-way transition to death when health reaches zero.
//!
//! [`reclassify`] runs all three over one immutable attribute snapshot so
//! that no derived field can observe another's half-applied update.

use tamago_types::{AwakeMood, Mood, PetAttributes, PetState, Stage};

/// Minimum age for each stage above egg, from oldest to youngest.
const STAGE_THRESHOLDS: [(f64, Stage); 4] = [
    (20.0, Stage::Adult),
    (10.0, Stage::Teen),
    (5.0, Stage::Child),
    (1.0, Stage::Baby),
];

/// Health below this makes the pet sick.
pub const SICK_BELOW_HEALTH: f64 = 30.0;

/// Hunger or happiness below this makes the pet sad.
pub const SAD_BELOW: f64 = 30.0;

/// Happiness above this (with enough energy) makes the pet happy.
pub const HAPPY_ABOVE_HAPPINESS: f64 = 80.0;

/// Energy above this (with enough happiness) makes the pet happy.
pub const HAPPY_ABOVE_ENERGY: f64 = 50.0;

/// Stage on the age staircase, ignoring history.
pub fn stage_for_age(age: f64) -> Stage {
    STAGE_THRESHOLDS
        .iter()
        .find(|(min_age, _)| age >= *min_age)
        .map_or(Stage::Egg, |(_, stage)| *stage)
}

/// Stage for `age`, never lower than `current`.
pub fn derive_stage(age: f64, current: Stage) -> Stage {
    stage_for_age(age).max(current)
}

/// Derive the mood from the attributes.
///
/// `Sleeping` is returned unchanged. Otherwise exactly one rule fires, in
/// priority order: sick, sad, happy, normal.
pub fn derive_mood(attributes: &PetAttributes, current: Mood) -> Mood {
    if current.is_sleeping() {
        return current;
    }
    Mood::Awake(derive_awake_mood(attributes))
}

/// The awake mood rules on their own.
pub fn derive_awake_mood(attributes: &PetAttributes) -> AwakeMood {
    if attributes.health < SICK_BELOW_HEALTH {
        AwakeMood::Sick
    } else if attributes.hunger < SAD_BELOW || attributes.happiness < SAD_BELOW {
        AwakeMood::Sad
    } else if attributes.happiness > HAPPY_ABOVE_HAPPINESS && attributes.energy > HAPPY_ABOVE_ENERGY
    {
        AwakeMood::Happy
    } else {
        AwakeMood::Normal
    }
}

/// Result of a mortality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MortalityCheck {
    /// Whether the pet is alive after the check.
    pub is_alive: bool,
    /// True only on the check that turned a living pet dead.
    pub died_this_tick: bool,
}

/// Check whether the pet dies.
///
/// A living pet with health at or below zero dies. A dead pet stays dead
/// and never reports a second death.
pub fn check_mortality(attributes: &PetAttributes, is_alive: bool) -> MortalityCheck {
    if is_alive && attributes.health <= 0.0 {
        return MortalityCheck {
            is_alive: false,
            died_this_tick: true,
        };
    }
    MortalityCheck {
        is_alive,
        died_this_tick: false,
    }
}

/// Outcome of one classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reclassification {
    /// The updated discrete state.
    pub state: PetState,
    /// The stage entered during this pass, if it changed.
    pub stage_advanced: Option<Stage>,
    /// Whether the pet died during this pass.
    pub died: bool,
}

/// Recompute stage, mood and mortality from one attribute snapshot.
///
/// A dead pet is returned unchanged: its stage and mood are frozen at the
/// moment of death.
pub fn reclassify(attributes: &PetAttributes, state: &PetState) -> Reclassification {
    if !state.is_alive {
        return Reclassification {
            state: *state,
            stage_advanced: None,
            died: false,
        };
    }

    let stage = derive_stage(attributes.age, state.stage);
    let mood = derive_mood(attributes, state.mood);
    let mortality = check_mortality(attributes, state.is_alive);

    Reclassification {
        state: PetState {
            is_alive: mortality.is_alive,
            stage,
            mood,
            ..*state
        },
        stage_advanced: (stage != state.stage).then_some(stage),
        died: mortality.died_this_tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> PetAttributes {
        PetAttributes::default()
    }

    #[test]
    fn staircase_boundaries() {
        assert_eq!(stage_for_age(0.0), Stage::Egg);
        assert_eq!(stage_for_age(0.999), Stage::Egg);
        assert_eq!(stage_for_age(1.0), Stage::Baby);
        assert_eq!(stage_for_age(4.99), Stage::Baby);
        assert_eq!(stage_for_age(5.0), Stage::Child);
        assert_eq!(stage_for_age(10.0), Stage::Teen);
        assert_eq!(stage_for_age(19.99), Stage::Teen);
        assert_eq!(stage_for_age(20.0), Stage::Adult);
        assert_eq!(stage_for_age(500.0), Stage::Adult);
    }

    #[test]
    fn stage_never_regresses() {
        assert_eq!(derive_stage(0.5, Stage::Teen), Stage::Teen);
        assert_eq!(derive_stage(12.0, Stage::Baby), Stage::Teen);
    }

    #[test]
    fn stage_is_monotone_over_increasing_age() {
        let mut stage = Stage::Egg;
        let mut age = 0.0;
        while age < 30.0 {
            let next = derive_stage(age, stage);
            assert!(next >= stage);
            stage = next;
            age += 0.25;
        }
        assert_eq!(stage, Stage::Adult);
    }

    #[test]
    fn low_health_is_sick_regardless_of_other_stats() {
        let sick = PetAttributes {
            health: 25.0,
            hunger: 100.0,
            happiness: 100.0,
            energy: 100.0,
            ..attrs()
        };
        assert_eq!(
            derive_mood(&sick, Mood::Awake(AwakeMood::Happy)),
            Mood::Awake(AwakeMood::Sick)
        );
        let sick_and_starving = PetAttributes {
            health: 25.0,
            hunger: 0.0,
            ..attrs()
        };
        assert_eq!(derive_awake_mood(&sick_and_starving), AwakeMood::Sick);
    }

    #[test]
    fn hunger_or_unhappiness_is_sad() {
        let hungry = PetAttributes {
            hunger: 29.0,
            ..attrs()
        };
        assert_eq!(derive_awake_mood(&hungry), AwakeMood::Sad);
        let gloomy = PetAttributes {
            happiness: 10.0,
            ..attrs()
        };
        assert_eq!(derive_awake_mood(&gloomy), AwakeMood::Sad);
    }

    #[test]
    fn happy_needs_happiness_and_energy() {
        assert_eq!(derive_awake_mood(&attrs()), AwakeMood::Happy);
        let tired = PetAttributes {
            energy: 50.0,
            ..attrs()
        };
        assert_eq!(derive_awake_mood(&tired), AwakeMood::Normal);
        let content = PetAttributes {
            happiness: 80.0,
            ..attrs()
        };
        assert_eq!(derive_awake_mood(&content), AwakeMood::Normal);
    }

    #[test]
    fn sleeping_is_never_overridden() {
        let dying = PetAttributes {
            health: 1.0,
            hunger: 0.0,
            ..attrs()
        };
        assert_eq!(derive_mood(&dying, Mood::Sleeping), Mood::Sleeping);
    }

    #[test]
    fn mortality_fires_once() {
        let dead = PetAttributes {
            health: 0.0,
            ..attrs()
        };
        let first = check_mortality(&dead, true);
        assert!(!first.is_alive);
        assert!(first.died_this_tick);

        let second = check_mortality(&dead, first.is_alive);
        assert!(!second.is_alive);
        assert!(!second.died_this_tick);
    }

    #[test]
    fn healthy_pet_survives() {
        let check = check_mortality(&attrs(), true);
        assert!(check.is_alive);
        assert!(!check.died_this_tick);
    }

    #[test]
    fn reclassify_reports_stage_change() {
        let grown = PetAttributes {
            age: 1.2,
            ..attrs()
        };
        let result = reclassify(&grown, &PetState::default());
        assert_eq!(result.state.stage, Stage::Baby);
        assert_eq!(result.stage_advanced, Some(Stage::Baby));
        assert!(!result.died);

        let again = reclassify(&grown, &result.state);
        assert_eq!(again.stage_advanced, None);
    }

    #[test]
    fn reclassify_death_keeps_sleeping_mood() {
        let state = PetState {
            mood: Mood::Sleeping,
            ..PetState::default()
        };
        let dead = PetAttributes {
            health: 0.0,
            ..attrs()
        };
        let result = reclassify(&dead, &state);
        assert!(result.died);
        assert!(!result.state.is_alive);
        assert_eq!(result.state.mood, Mood::Sleeping);
    }

    #[test]
    fn reclassify_is_inert_after_death() {
        let state = PetState {
            is_alive: false,
            stage: Stage::Baby,
            ..PetState::default()
        };
        let old = PetAttributes {
            age: 25.0,
            health: 0.0,
            ..attrs()
        };
        let result = reclassify(&old, &state);
        assert_eq!(result.state, state);
        assert!(!result.died);
        assert_eq!(result.stage_advanced, None);
    }
}
