//! Attribute engine: how the pet's attributes drift with simulated time.
//!
//! Each call advances the attributes by one delta of simulated milliseconds:
//!
//! - Hunger, happiness, energy and cleanliness decay linearly
//! - Sleeping slows hunger and turns energy decay into recovery
//! - Health drops for every neglect threshold crossed by the post-decay values
//! - Age accumulates
//! - Discipline relaxes toward its setpoint without overshooting
//!
//! Every bounded attribute is clamped to `[0, 100]` after the update. The
//! functions here are pure: same inputs, same outputs, no hidden state.

use tamago_types::{Mood, PetAttributes, clamp_stat};

use crate::config::DecayConfig;

/// Upper bound on sub-steps for one stepped advance.
///
/// Past this many, the steps get longer instead of more numerous.
pub const MAX_SUB_STEPS: u32 = 10_000;

/// Advance `attributes` by `delta_ms` simulated milliseconds in one step.
///
/// A delta that is zero, negative or not finite leaves the attributes
/// unchanged (apart from clamping).
///
/// # Order of operations
///
/// 1. Decay hunger, happiness, energy, cleanliness (clamped)
/// 2. Sum neglect penalties against the decayed values
/// 3. Subtract the penalty from health (clamped)
/// 4. Age the pet
/// 5. Relax discipline toward the setpoint
pub fn advance_time(
    attributes: &PetAttributes,
    mood: Mood,
    delta_ms: f64,
    config: &DecayConfig,
) -> PetAttributes {
    let current = attributes.clamped();
    if !delta_ms.is_finite() || delta_ms <= 0.0 {
        return current;
    }

    let sleeping = mood.is_sleeping();

    // 1. Linear decay
    let hunger_rate = if sleeping {
        config.hunger_rate_sleeping
    } else {
        config.hunger_rate
    };
    let hunger = clamp_stat(current.hunger - hunger_rate * delta_ms);
    let happiness = clamp_stat(current.happiness - config.happiness_rate * delta_ms);
    let energy = if sleeping {
        clamp_stat(current.energy + config.energy_recovery_sleeping * delta_ms)
    } else {
        clamp_stat(current.energy - config.energy_rate * delta_ms)
    };
    let cleanliness = clamp_stat(current.cleanliness - config.cleanliness_rate * delta_ms);

    // 2-3. Neglect penalties, judged on the decayed values
    let penalty = config.hunger_penalty.health_loss(hunger, delta_ms)
        + config.happiness_penalty.health_loss(happiness, delta_ms)
        + config.energy_penalty.health_loss(energy, delta_ms)
        + config.cleanliness_penalty.health_loss(cleanliness, delta_ms);
    let health = clamp_stat(current.health - penalty);

    // 4. Age
    let age = current.age + config.aging_rate * delta_ms;

    // 5. Discipline drifts back to its setpoint
    let discipline = relax_toward(
        current.discipline,
        config.discipline_setpoint,
        config.discipline_rate * delta_ms,
    );

    PetAttributes {
        hunger,
        happiness,
        energy,
        health,
        cleanliness,
        discipline: clamp_stat(discipline),
        age,
    }
}

/// Advance `attributes` by `delta_ms`, splitting the delta into equal
/// sub-steps no longer than `config.max_step_ms`.
///
/// With `max_step_ms` unset, or a delta already within it, this is exactly
/// [`advance_time`]. Sub-stepping lets a neglect penalty start partway
/// through a long gap instead of applying to the whole of it.
pub fn advance_time_stepped(
    attributes: &PetAttributes,
    mood: Mood,
    delta_ms: f64,
    config: &DecayConfig,
) -> PetAttributes {
    let Some(max_step) = config.max_step_ms else {
        return advance_time(attributes, mood, delta_ms, config);
    };
    if !delta_ms.is_finite() || !max_step.is_finite() || max_step <= 0.0 || delta_ms <= max_step
    {
        return advance_time(attributes, mood, delta_ms, config);
    }

    let steps = sub_step_count(delta_ms, max_step);
    let step_ms = delta_ms / f64::from(steps);

    let mut current = *attributes;
    for _ in 0..steps {
        current = advance_time(&current, mood, step_ms, config);
    }
    current
}

/// Number of equal sub-steps needed so none exceeds `max_step`, capped at
/// [`MAX_SUB_STEPS`].
fn sub_step_count(delta_ms: f64, max_step: f64) -> u32 {
    let raw = (delta_ms / max_step).ceil();
    if raw >= f64::from(MAX_SUB_STEPS) {
        return MAX_SUB_STEPS;
    }
    // Bounded above by MAX_SUB_STEPS and below by 1 (delta > max_step).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = raw as u32;
    steps.max(1)
}

/// Move `value` toward `target` by at most `amount`, never past it.
fn relax_toward(value: f64, target: f64, amount: f64) -> f64 {
    if value > target {
        (value - amount).max(target)
    } else {
        (value + amount).min(target)
    }
}

#[cfg(test)]
mod tests {
    use tamago_types::AwakeMood;

    use super::*;

    const AWAKE: Mood = Mood::Awake(AwakeMood::Normal);

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn full() -> PetAttributes {
        PetAttributes::default()
    }

    #[test]
    fn one_second_awake_decay() {
        let cfg = DecayConfig::default();
        let next = advance_time(&full(), AWAKE, 1000.0, &cfg);
        assert!(approx(next.hunger, 99.0));
        assert!(approx(next.happiness, 99.5));
        assert!(approx(next.energy, 99.2));
        assert!(approx(next.cleanliness, 99.7));
        assert!(approx(next.health, 100.0));
        assert!(approx(next.age, 0.01));
        assert!(approx(next.discipline, 50.0));
    }

    #[test]
    fn sleeping_slows_hunger_and_recovers_energy() {
        let cfg = DecayConfig::default();
        let tired = PetAttributes {
            energy: 40.0,
            ..full()
        };
        let next = advance_time(&tired, Mood::Sleeping, 1000.0, &cfg);
        assert!(approx(next.hunger, 99.6));
        assert!(approx(next.energy, 41.0));
    }

    #[test]
    fn sleeping_energy_recovery_is_capped() {
        let cfg = DecayConfig::default();
        let next = advance_time(&full(), Mood::Sleeping, 60_000.0, &cfg);
        assert!(approx(next.energy, 100.0));
    }

    #[test]
    fn long_neglect_from_full_stats() {
        // 100 000 ms: hunger 100 -> 0, happiness -> 50, energy -> 20,
        // cleanliness -> 70. Only hunger is below its threshold after
        // decay, so the single-step penalty is 0.001 * 100 000 = 100.
        let cfg = DecayConfig::default();
        let next = advance_time(&full(), AWAKE, 100_000.0, &cfg);
        assert!(approx(next.hunger, 0.0));
        assert!(approx(next.happiness, 50.0));
        assert!(approx(next.energy, 20.0));
        assert!(approx(next.cleanliness, 70.0));
        assert!(approx(next.health, 0.0));
        assert!(approx(next.age, 1.0));
    }

    #[test]
    fn penalties_accumulate_across_thresholds() {
        let cfg = DecayConfig::default();
        let neglected = PetAttributes {
            hunger: 10.0,
            happiness: 10.0,
            energy: 10.0,
            cleanliness: 10.0,
            health: 80.0,
            ..full()
        };
        let next = advance_time(&neglected, AWAKE, 1000.0, &cfg);
        // (0.001 + 0.0005 + 0.0007 + 0.0006) * 1000 = 2.8
        assert!(approx(next.health, 77.2));
    }

    #[test]
    fn penalty_uses_post_decay_values() {
        let cfg = DecayConfig::default();
        // Hunger starts above the threshold but ends below it.
        let borderline = PetAttributes {
            hunger: 20.5,
            ..full()
        };
        let next = advance_time(&borderline, AWAKE, 1000.0, &cfg);
        assert!(next.hunger < 20.0);
        assert!(approx(next.health, 99.0));
    }

    #[test]
    fn discipline_relaxes_without_overshoot() {
        let cfg = DecayConfig::default();
        let strict = PetAttributes {
            discipline: 50.05,
            ..full()
        };
        let next = advance_time(&strict, AWAKE, 1000.0, &cfg);
        assert!(approx(next.discipline, 50.0));

        let lax = PetAttributes {
            discipline: 30.0,
            ..full()
        };
        let next = advance_time(&lax, AWAKE, 1000.0, &cfg);
        assert!(approx(next.discipline, 30.1));

        let high = PetAttributes {
            discipline: 80.0,
            ..full()
        };
        let next = advance_time(&high, AWAKE, 1000.0, &cfg);
        assert!(approx(next.discipline, 79.9));
    }

    #[test]
    fn invalid_deltas_are_no_ops() {
        let cfg = DecayConfig::default();
        let start = full();
        for delta in [0.0, -500.0, f64::NAN, f64::INFINITY] {
            assert_eq!(advance_time(&start, AWAKE, delta, &cfg), start);
        }
    }

    #[test]
    fn bounded_attributes_stay_in_range() {
        let cfg = DecayConfig::default();
        let extremes = [
            PetAttributes::default(),
            PetAttributes {
                hunger: 0.0,
                happiness: 0.0,
                energy: 0.0,
                health: 0.0,
                cleanliness: 0.0,
                discipline: 0.0,
                age: 0.0,
            },
            PetAttributes {
                hunger: 250.0,
                happiness: -40.0,
                energy: 100.0,
                health: 1.0,
                cleanliness: 5.0,
                discipline: 100.0,
                age: 30.0,
            },
        ];
        for start in extremes {
            for mood in [AWAKE, Mood::Sleeping] {
                for delta in [1.0, 1000.0, 100_000.0, 10_000_000.0] {
                    let next = advance_time(&start, mood, delta, &cfg);
                    assert!(
                        next.bounded().iter().all(|v| (0.0..=100.0).contains(v)),
                        "out of range: {next:?}"
                    );
                    assert!(next.age >= start.age.max(0.0));
                }
            }
        }
    }

    #[test]
    fn health_never_rises_over_time() {
        let cfg = DecayConfig::default();
        let mut attrs = PetAttributes {
            health: 60.0,
            ..full()
        };
        for _ in 0..500 {
            let next = advance_time(&attrs, AWAKE, 1000.0, &cfg);
            assert!(next.health <= attrs.health);
            attrs = next;
        }
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let cfg = DecayConfig::default();
        let start = PetAttributes {
            hunger: 33.0,
            ..full()
        };
        let a = advance_time(&start, AWAKE, 4321.0, &cfg);
        let b = advance_time(&start, AWAKE, 4321.0, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn stepped_without_limit_matches_single_step() {
        let cfg = DecayConfig::default();
        let a = advance_time(&full(), AWAKE, 100_000.0, &cfg);
        let b = advance_time_stepped(&full(), AWAKE, 100_000.0, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn stepped_within_limit_matches_single_step() {
        let cfg = DecayConfig {
            max_step_ms: Some(1000.0),
            ..DecayConfig::default()
        };
        let a = advance_time(&full(), AWAKE, 1000.0, &cfg);
        let b = advance_time_stepped(&full(), AWAKE, 1000.0, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn stepped_long_gap_is_gentler_on_health() {
        let cfg = DecayConfig {
            max_step_ms: Some(1000.0),
            ..DecayConfig::default()
        };
        let coarse = advance_time(&full(), AWAKE, 100_000.0, &cfg);
        let fine = advance_time_stepped(&full(), AWAKE, 100_000.0, &cfg);
        // Hunger only drops below 20 in the last fifth of the gap.
        assert!(fine.health > coarse.health);
        assert!(approx(fine.hunger, 0.0));
        assert!(approx(fine.age, 1.0));
    }

    #[test]
    fn sub_step_count_is_capped() {
        assert_eq!(sub_step_count(2500.0, 1000.0), 3);
        assert_eq!(sub_step_count(1e12, 1.0), MAX_SUB_STEPS);
    }
}
