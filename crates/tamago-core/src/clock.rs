//! Simulation clock for the Tamago pet.
//!
//! The clock turns wall-clock instants supplied by the host into simulated
//! milliseconds. It owns the speed multiplier, the pause flag, the running
//! total of simulated time, and the instant of the last processed tick.
//!
//! # Design Principles
//!
//! - The clock never reads the system time itself. Every operation takes
//!   `now`, so tests and hosts control time completely.
//! - Day and night are derived from the simulated total: every multiple of
//!   the day period crossed is one flip.
//! - Time running backwards is treated as no time at all.

use chrono::{DateTime, Utc};
use tamago_types::{ClockSnapshot, SpeedMultiplier};
use tracing::warn;

/// Errors that can occur when building a clock.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The day period must be a positive, finite number of milliseconds.
    #[error("invalid day period: {value} ms")]
    InvalidDayPeriod {
        /// The rejected value.
        value: f64,
    },
}

/// Result of one [`SimulationClock::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockAdvance {
    /// Simulated milliseconds elapsed since the previous tick.
    pub delta_ms: f64,
    /// Number of day-period boundaries crossed by this advance.
    pub day_night_flips: u64,
}

/// Converts real elapsed time into simulated time.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    /// Wall-clock instant of the last processed tick (or reset).
    last_tick: DateTime<Utc>,

    /// Simulated milliseconds accumulated since birth.
    total_simulated_ms: f64,

    /// Current speed multiplier.
    speed: SpeedMultiplier,

    /// When true, the owner ignores ticks.
    paused: bool,

    /// Simulated milliseconds between day/night flips.
    day_period_ms: f64,
}

impl SimulationClock {
    /// Create a clock anchored at `now`, running at 1x and unpaused.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidDayPeriod`] if `day_period_ms` is not a
    /// positive, finite number.
    pub fn new(now: DateTime<Utc>, day_period_ms: f64) -> Result<Self, ClockError> {
        if !day_period_ms.is_finite() || day_period_ms <= 0.0 {
            return Err(ClockError::InvalidDayPeriod {
                value: day_period_ms,
            });
        }
        Ok(Self {
            last_tick: now,
            total_simulated_ms: 0.0,
            speed: SpeedMultiplier::Normal,
            paused: false,
            day_period_ms,
        })
    }

    /// Consume the real time elapsed since the last tick.
    ///
    /// Returns the simulated delta (real elapsed times the speed factor) and
    /// the number of day/night boundaries crossed. `last_tick` moves to
    /// `now` even when `now` lies in the past.
    pub fn advance(&mut self, now: DateTime<Utc>) -> ClockAdvance {
        let elapsed_ms = self.real_elapsed_ms(now);
        let delta_ms = elapsed_ms * self.speed.factor();

        let before = self.total_simulated_ms;
        let after = before + delta_ms;
        let day_night_flips = boundaries_crossed(before, after, self.day_period_ms);

        self.total_simulated_ms = after;
        self.last_tick = now;

        ClockAdvance {
            delta_ms,
            day_night_flips,
        }
    }

    /// Flip the pause flag and return the new value.
    ///
    /// Both directions re-anchor `last_tick` at `now`, so the paused
    /// interval is never simulated.
    pub fn toggle_pause(&mut self, now: DateTime<Utc>) -> bool {
        self.paused = !self.paused;
        self.last_tick = now;
        self.paused
    }

    /// Change the speed multiplier, re-anchoring at `now`.
    pub fn set_speed(&mut self, speed: SpeedMultiplier, now: DateTime<Utc>) {
        self.speed = speed;
        self.last_tick = now;
    }

    /// Return to the initial state anchored at `now`. The day period is kept.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.last_tick = now;
        self.total_simulated_ms = 0.0;
        self.speed = SpeedMultiplier::Normal;
        self.paused = false;
    }

    /// Wall-clock instant of the last processed tick.
    pub const fn last_tick(&self) -> DateTime<Utc> {
        self.last_tick
    }

    /// Simulated milliseconds accumulated since birth.
    pub const fn total_simulated_ms(&self) -> f64 {
        self.total_simulated_ms
    }

    /// Current speed multiplier.
    pub const fn speed(&self) -> SpeedMultiplier {
        self.speed
    }

    /// Whether the clock is paused.
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Simulated milliseconds between day/night flips.
    pub const fn day_period_ms(&self) -> f64 {
        self.day_period_ms
    }

    /// Read-only view for snapshots.
    pub const fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            last_tick: self.last_tick,
            total_simulated_ms: self.total_simulated_ms,
            speed: self.speed,
            paused: self.paused,
        }
    }

    /// Real milliseconds since `last_tick`, floored at zero.
    fn real_elapsed_ms(&self, now: DateTime<Utc>) -> f64 {
        let elapsed = now.signed_duration_since(self.last_tick);
        let Some(micros) = elapsed.num_microseconds() else {
            // Only reachable for spans of hundreds of thousands of years.
            warn!(last_tick = %self.last_tick, now = %now, "Elapsed time out of range, ignoring tick");
            return 0.0;
        };
        let ms = micros_to_ms(micros);
        if ms < 0.0 {
            warn!(
                last_tick = %self.last_tick,
                now = %now,
                skew_ms = -ms,
                "Clock went backwards, treating as zero elapsed time"
            );
            return 0.0;
        }
        ms
    }
}

/// Convert a microsecond count to fractional milliseconds.
#[allow(clippy::cast_precision_loss)]
fn micros_to_ms(micros: i64) -> f64 {
    micros as f64 / 1000.0
}

/// Count multiples of `period` in the half-open range `(before, after]`.
// The cast is guarded: `crossed` is finite and positive, and saturates.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn boundaries_crossed(before: f64, after: f64, period: f64) -> u64 {
    let crossed = (after / period).floor() - (before / period).floor();
    if !crossed.is_finite() || crossed <= 0.0 {
        return 0;
    }
    crossed as u64
}
