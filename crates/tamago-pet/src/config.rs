//! Tunable rates and thresholds for attribute decay.
//!
//! The [`DecayConfig`] struct bundles every tunable so that callers (tick
//! cycle, tests, the YAML loader) can override defaults. All rates are
//! expressed in attribute points per simulated millisecond.

use serde::Deserialize;

use crate::error::PetError;

/// A neglect rule: while `attribute < threshold` after decay, health drops by
/// `rate` per simulated millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NeglectPenalty {
    /// The attribute must fall strictly below this value to trigger.
    pub threshold: f64,
    /// Health lost per simulated millisecond while triggered.
    pub rate: f64,
}

impl NeglectPenalty {
    /// Health lost over `delta_ms` given the post-decay attribute value.
    pub fn health_loss(&self, value: f64, delta_ms: f64) -> f64 {
        if value < self.threshold {
            self.rate * delta_ms
        } else {
            0.0
        }
    }
}

/// Configuration for the attribute engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Hunger lost per ms while awake (default: 0.001).
    pub hunger_rate: f64,
    /// Hunger lost per ms while sleeping (default: 0.0004).
    pub hunger_rate_sleeping: f64,
    /// Happiness lost per ms (default: 0.0005).
    pub happiness_rate: f64,
    /// Energy lost per ms while awake (default: 0.0008).
    pub energy_rate: f64,
    /// Energy regained per ms while sleeping (default: 0.001).
    pub energy_recovery_sleeping: f64,
    /// Cleanliness lost per ms (default: 0.0003).
    pub cleanliness_rate: f64,
    /// Age gained per ms (default: 0.00001, one unit per 100 000 ms).
    pub aging_rate: f64,
    /// Speed at which discipline relaxes toward its setpoint (default: 0.0001).
    pub discipline_rate: f64,
    /// Resting discipline value (default: 50).
    pub discipline_setpoint: f64,
    /// Health penalty while starving (default: below 20, 0.001/ms).
    pub hunger_penalty: NeglectPenalty,
    /// Health penalty while miserable (default: below 20, 0.0005/ms).
    pub happiness_penalty: NeglectPenalty,
    /// Health penalty while exhausted (default: below 20, 0.0007/ms).
    pub energy_penalty: NeglectPenalty,
    /// Health penalty while dirty (default: below 30, 0.0006/ms).
    pub cleanliness_penalty: NeglectPenalty,
    /// Split deltas larger than this into equal sub-steps. `None` applies
    /// every delta as a single step.
    pub max_step_ms: Option<f64>,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            hunger_rate: 0.001,
            hunger_rate_sleeping: 0.0004,
            happiness_rate: 0.0005,
            energy_rate: 0.0008,
            energy_recovery_sleeping: 0.001,
            cleanliness_rate: 0.0003,
            aging_rate: 0.000_01,
            discipline_rate: 0.0001,
            discipline_setpoint: 50.0,
            hunger_penalty: NeglectPenalty {
                threshold: 20.0,
                rate: 0.001,
            },
            happiness_penalty: NeglectPenalty {
                threshold: 20.0,
                rate: 0.0005,
            },
            energy_penalty: NeglectPenalty {
                threshold: 20.0,
                rate: 0.0007,
            },
            cleanliness_penalty: NeglectPenalty {
                threshold: 30.0,
                rate: 0.0006,
            },
            max_step_ms: None,
        }
    }
}

impl DecayConfig {
    /// Check that every rate is a finite non-negative number, every
    /// threshold is within the attribute range, and the sub-step size (if
    /// any) is positive.
    pub fn validate(&self) -> Result<(), PetError> {
        let rates = [
            ("hunger_rate", self.hunger_rate),
            ("hunger_rate_sleeping", self.hunger_rate_sleeping),
            ("happiness_rate", self.happiness_rate),
            ("energy_rate", self.energy_rate),
            ("energy_recovery_sleeping", self.energy_recovery_sleeping),
            ("cleanliness_rate", self.cleanliness_rate),
            ("aging_rate", self.aging_rate),
            ("discipline_rate", self.discipline_rate),
            ("hunger_penalty.rate", self.hunger_penalty.rate),
            ("happiness_penalty.rate", self.happiness_penalty.rate),
            ("energy_penalty.rate", self.energy_penalty.rate),
            ("cleanliness_penalty.rate", self.cleanliness_penalty.rate),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(PetError::InvalidRate { name, value });
            }
        }

        let thresholds = [
            ("discipline_setpoint", self.discipline_setpoint),
            ("hunger_penalty.threshold", self.hunger_penalty.threshold),
            ("happiness_penalty.threshold", self.happiness_penalty.threshold),
            ("energy_penalty.threshold", self.energy_penalty.threshold),
            ("cleanliness_penalty.threshold", self.cleanliness_penalty.threshold),
        ];
        for (name, value) in thresholds {
            if !(0.0..=100.0).contains(&value) {
                return Err(PetError::InvalidThreshold { name, value });
            }
        }

        if let Some(value) = self.max_step_ms
            && (!value.is_finite() || value <= 0.0)
        {
            return Err(PetError::InvalidStep { value });
        }

        Ok(())
    }
}
