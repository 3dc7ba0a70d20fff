//! Tick cycle: how one driver tick moves the pet forward.
//!
//! Each tick runs through these phases:
//!
//! 1. **Gate** -- a dead pet or a paused clock skips the tick entirely.
//!
//! 2. **Clock** -- consume the real time since the last tick, scaled by the
//!    speed multiplier. Day/night follows the parity of the boundaries
//!    crossed, with at most one event per tick.
//!
//! 3. **Decay** -- run the attribute engine over the simulated delta
//!    (sub-stepped when `decay.max_step_ms` is set).
//!
//! 4. **Classify** -- derive stage, mood and mortality from the new
//!    attributes and record stage or death events.
//!
//! The cycle is deterministic given the same state and the same `now`.

use chrono::{DateTime, Utc};
use tamago_pet::{advance_time_stepped, reclassify};
use tamago_types::{PetEvent, TickSkip};
use tracing::{debug, info};

use crate::simulation::Simulation;

/// Summary of a single tick's execution.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    /// Simulated milliseconds applied (zero when skipped).
    pub delta_ms: f64,
    /// Why the tick did nothing, if it did nothing.
    pub skipped: Option<TickSkip>,
    /// Events produced by this tick, in order.
    pub events: Vec<PetEvent>,
}

impl TickSummary {
    const fn skipped(reason: TickSkip) -> Self {
        Self {
            delta_ms: 0.0,
            skipped: Some(reason),
            events: Vec::new(),
        }
    }
}

impl Simulation {
    /// Run one tick at wall-clock instant `now`.
    ///
    /// Ticks on a dead or paused pet are no-ops and leave the clock
    /// untouched.
    pub fn advance(&mut self, now: DateTime<Utc>) -> TickSummary {
        // Phase 1: Gate
        if !self.state.is_alive {
            return TickSummary::skipped(TickSkip::Dead);
        }
        if self.clock.is_paused() {
            return TickSummary::skipped(TickSkip::Paused);
        }

        let mut events = Vec::new();

        // Phase 2: Clock
        let step = self.clock.advance(now);
        if step.day_night_flips % 2 == 1 {
            self.state.is_day_time = !self.state.is_day_time;
            let event = PetEvent::DayNightChanged {
                is_day_time: self.state.is_day_time,
            };
            self.emit(event, now);
            events.push(event);
        }
        if step.day_night_flips > 1 {
            debug!(
                pet_id = %self.pet_id,
                flips = step.day_night_flips,
                is_day_time = self.state.is_day_time,
                "Several day/night boundaries crossed in one tick"
            );
        }

        // Phase 3: Decay
        self.attributes =
            advance_time_stepped(&self.attributes, self.state.mood, step.delta_ms, &self.decay);

        // Phase 4: Classify
        let pass = reclassify(&self.attributes, &self.state);
        self.state = pass.state;
        if let Some(stage) = pass.stage_advanced {
            info!(pet_id = %self.pet_id, stage = %stage, "Pet grew");
            let event = PetEvent::StageAdvanced { stage };
            self.emit(event, now);
            events.push(event);
        }
        if pass.died {
            info!(
                pet_id = %self.pet_id,
                age = self.attributes.age,
                stage = %self.state.stage,
                "Pet died"
            );
            self.emit(PetEvent::Died, now);
            events.push(PetEvent::Died);
        }

        debug!(
            pet_id = %self.pet_id,
            delta_ms = step.delta_ms,
            hunger = self.attributes.hunger,
            health = self.attributes.health,
            mood = %self.state.mood,
            "Tick complete"
        );

        TickSummary {
            delta_ms: step.delta_ms,
            skipped: None,
            events,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use chrono::TimeDelta;
    use tamago_types::{AwakeMood, Mood, PetAttributes, Stage};

    use super::*;
    use crate::config::SimulationConfig;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn at(ms: i64) -> DateTime<Utc> {
        t0() + TimeDelta::milliseconds(ms)
    }

    fn make_sim() -> Simulation {
        Simulation::new(&SimulationConfig::default(), t0()).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn one_second_tick_decays_hunger() {
        let mut sim = make_sim();
        let summary = sim.advance(at(1000));
        assert!(summary.skipped.is_none());
        assert!(approx(summary.delta_ms, 1000.0));
        assert!(approx(sim.attributes().hunger, 99.0));
        assert!(approx(sim.attributes().energy, 99.2));
        assert!(summary.events.is_empty());
    }

    #[test]
    fn paused_tick_is_skipped() {
        let mut sim = make_sim();
        sim.clock.toggle_pause(t0());
        let before = sim.attributes;
        let summary = sim.advance(at(5000));
        assert_eq!(summary.skipped, Some(TickSkip::Paused));
        assert_eq!(sim.attributes, before);
        assert_eq!(sim.clock().last_tick(), t0());
    }

    #[test]
    fn pausing_later_moves_last_tick() {
        let mut sim = make_sim();
        sim.advance(at(1000));
        sim.toggle_pause(at(5000));
        let snap = sim.snapshot(at(5000));
        assert!(snap.clock.paused);
        assert_eq!(snap.clock.last_tick, at(5000));

        sim.toggle_pause(at(8000));
        let summary = sim.advance(at(9000));
        assert!(approx(summary.delta_ms, 1000.0));
    }

    #[test]
    fn dead_tick_is_skipped() {
        let mut sim = make_sim();
        sim.state.is_alive = false;
        let before = sim.attributes;
        let summary = sim.advance(at(5000));
        assert_eq!(summary.skipped, Some(TickSkip::Dead));
        assert_eq!(sim.attributes, before);
    }

    #[test]
    fn day_boundary_flips_once_and_logs() {
        let mut sim = make_sim();
        sim.advance(at(299_000));
        assert!(sim.state().is_day_time);

        let summary = sim.advance(at(300_500));
        assert_eq!(
            summary.events,
            [PetEvent::DayNightChanged { is_day_time: false }]
        );
        assert!(!sim.state().is_day_time);
        assert_eq!(
            sim.log().latest().unwrap().text,
            PetEvent::DayNightChanged { is_day_time: false }.message()
        );
    }

    #[test]
    fn multi_day_gap_records_one_flip_at_most() {
        let mut config = SimulationConfig::default();
        config.decay.hunger_rate = 0.0;
        config.decay.happiness_rate = 0.0;
        config.decay.energy_rate = 0.0;
        config.decay.cleanliness_rate = 0.0;
        let mut sim = Simulation::new(&config, t0()).unwrap();
        // Seven boundaries: odd, so it ends at night.
        let summary = sim.advance(at(2_150_000));
        let flips: Vec<_> = summary
            .events
            .iter()
            .filter(|e| matches!(e, PetEvent::DayNightChanged { .. }))
            .collect();
        assert_eq!(flips, [&PetEvent::DayNightChanged { is_day_time: false }]);
        assert!(!sim.state().is_day_time);
        assert!(sim.state().is_alive);
        assert!(sim.log().len() <= 5);

        // Two more boundaries: even, so no change and no event.
        let summary = sim.advance(at(2_750_000));
        assert!(
            !summary
                .events
                .iter()
                .any(|e| matches!(e, PetEvent::DayNightChanged { .. }))
        );
        assert!(!sim.state().is_day_time);
    }

    #[test]
    fn egg_hatches_after_one_age_unit() {
        let mut sim = make_sim();
        sim.attributes.age = 0.995;
        let summary = sim.advance(at(1000));
        assert_eq!(sim.state().stage, Stage::Baby);
        assert_eq!(
            summary.events,
            [PetEvent::StageAdvanced { stage: Stage::Baby }]
        );
    }

    #[test]
    fn sick_when_health_low() {
        let mut sim = make_sim();
        sim.attributes.health = 25.0;
        sim.advance(at(1000));
        assert_eq!(sim.state().mood, Mood::Awake(AwakeMood::Sick));
    }

    #[test]
    fn sleeping_survives_ticks() {
        let mut sim = make_sim();
        sim.state.mood = Mood::Sleeping;
        sim.attributes = PetAttributes {
            health: 10.0,
            ..PetAttributes::default()
        };
        sim.advance(at(1000));
        sim.advance(at(2000));
        assert_eq!(sim.state().mood, Mood::Sleeping);
    }
}
