//! Controller: host-initiated changes to the simulation.
//!
//! Care actions go through the same preconditions and the same
//! classification pass as a tick. Pause, speed and reinitialization are
//! accepted whether the pet is alive or not.

use chrono::{DateTime, Utc};
use tamago_pet::actions;
use tamago_pet::reclassify;
use tamago_types::{
    PerformedAction, PetAction, PetAttributes, PetEvent, PetId, PetState, RejectionReason,
    SpeedMultiplier,
};
use tracing::{debug, info};

use crate::simulation::Simulation;

/// What a successful care action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    /// The concrete action that took effect.
    pub performed: PerformedAction,
    /// Events produced, starting with the action itself.
    pub events: Vec<PetEvent>,
}

impl Simulation {
    /// Apply a care action at `now`.
    ///
    /// A rejected action changes nothing: no attribute, no log entry, no
    /// notification.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] when the pet is dead, or asleep and
    /// the action is not sleep/wake.
    pub fn perform(
        &mut self,
        action: PetAction,
        now: DateTime<Utc>,
    ) -> Result<ActionReport, RejectionReason> {
        let outcome = actions::perform(action, &self.attributes, &self.state).inspect_err(
            |reason| debug!(pet_id = %self.pet_id, action = %action, reason = %reason, "Action rejected"),
        )?;

        self.attributes = outcome.attributes;
        self.state.mood = outcome.mood;
        self.state.last_action = Some(outcome.performed);

        let applied = PetEvent::ActionApplied {
            action: outcome.performed,
        };
        self.emit(applied, now);
        let mut events = vec![applied];

        let pass = reclassify(&self.attributes, &self.state);
        self.state = pass.state;
        if let Some(stage) = pass.stage_advanced {
            info!(pet_id = %self.pet_id, stage = %stage, "Pet grew");
            let event = PetEvent::StageAdvanced { stage };
            self.emit(event, now);
            events.push(event);
        }
        if pass.died {
            info!(pet_id = %self.pet_id, "Pet died");
            self.emit(PetEvent::Died, now);
            events.push(PetEvent::Died);
        }

        Ok(ActionReport {
            performed: outcome.performed,
            events,
        })
    }

    /// Feed the pet.
    ///
    /// # Errors
    ///
    /// See [`Simulation::perform`].
    pub fn feed(&mut self, now: DateTime<Utc>) -> Result<ActionReport, RejectionReason> {
        self.perform(PetAction::Feed, now)
    }

    /// Play with the pet.
    ///
    /// # Errors
    ///
    /// See [`Simulation::perform`].
    pub fn play(&mut self, now: DateTime<Utc>) -> Result<ActionReport, RejectionReason> {
        self.perform(PetAction::Play, now)
    }

    /// Put the pet to sleep, or wake it up.
    ///
    /// # Errors
    ///
    /// See [`Simulation::perform`].
    pub fn toggle_sleep(&mut self, now: DateTime<Utc>) -> Result<ActionReport, RejectionReason> {
        self.perform(PetAction::ToggleSleep, now)
    }

    /// Clean the pet.
    ///
    /// # Errors
    ///
    /// See [`Simulation::perform`].
    pub fn clean(&mut self, now: DateTime<Utc>) -> Result<ActionReport, RejectionReason> {
        self.perform(PetAction::Clean, now)
    }

    /// Discipline the pet.
    ///
    /// # Errors
    ///
    /// See [`Simulation::perform`].
    pub fn discipline(&mut self, now: DateTime<Utc>) -> Result<ActionReport, RejectionReason> {
        self.perform(PetAction::Discipline, now)
    }

    /// Give the pet medicine.
    ///
    /// # Errors
    ///
    /// See [`Simulation::perform`].
    pub fn medicine(&mut self, now: DateTime<Utc>) -> Result<ActionReport, RejectionReason> {
        self.perform(PetAction::Medicine, now)
    }

    /// Pause or resume ticking. Returns the event recorded.
    pub fn toggle_pause(&mut self, now: DateTime<Utc>) -> PetEvent {
        let event = if self.clock.toggle_pause(now) {
            PetEvent::Paused
        } else {
            PetEvent::Resumed
        };
        info!(pet_id = %self.pet_id, paused = self.clock.is_paused(), "Pause toggled");
        self.emit(event, now);
        event
    }

    /// Change the speed multiplier. Returns the event recorded.
    pub fn set_speed(&mut self, speed: SpeedMultiplier, now: DateTime<Utc>) -> PetEvent {
        self.clock.set_speed(speed, now);
        info!(pet_id = %self.pet_id, speed = %speed, "Speed changed");
        let event = PetEvent::SpeedChanged { speed };
        self.emit(event, now);
        event
    }

    /// Discard the current pet and hatch a new one at `now`.
    ///
    /// Attributes, state and clock return to their defaults, feedback is
    /// cleared, and the event log holds only the birth entry. The decay
    /// rates and feedback lifetimes are kept.
    pub fn reinitialize(&mut self, now: DateTime<Utc>) -> PetEvent {
        let previous = self.pet_id;
        self.pet_id = PetId::new();
        self.attributes = PetAttributes::default();
        self.state = PetState::default();
        self.clock.reset(now);
        self.log.clear();
        self.feedback.clear();
        self.emit(PetEvent::Born, now);
        info!(previous = %previous, pet_id = %self.pet_id, "Pet reinitialized");
        PetEvent::Born
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use chrono::TimeDelta;
    use tamago_types::{AwakeMood, Cue, Mood};

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
    fn feed_updates_attributes_log_and_feedback() {
        let mut sim = make_sim();
        sim.attributes.hunger = 40.0;

        let report = sim.feed(at(10)).unwrap();
        assert_eq!(report.performed, PerformedAction::Feed);
        assert_eq!(
            report.events,
            [PetEvent::ActionApplied {
                action: PerformedAction::Feed
            }]
        );
        assert!(approx(sim.attributes().hunger, 70.0));
        assert_eq!(sim.state().last_action, Some(PerformedAction::Feed));

        let snap = sim.snapshot(at(10));
        assert_eq!(snap.log.len(), 2);
        assert_eq!(snap.log.first().unwrap().text, "You fed your pet!");
        assert_eq!(snap.notification.unwrap().message, "Yum yum! 🍔");
        assert!(snap.cues.iter().any(|c| c.cue == Cue::Bounce));
    }

    #[test]
    fn action_reclassifies_immediately() {
        let mut sim = make_sim();
        sim.attributes.health = 10.0;
        sim.medicine(t0()).unwrap();
        assert!(approx(sim.attributes().health, 40.0));
        assert_eq!(sim.state().mood, Mood::Awake(AwakeMood::Happy));
    }

    #[test]
    fn rejected_action_changes_nothing() {
        let mut sim = make_sim();
        sim.toggle_sleep(t0()).unwrap();
        let before = sim.snapshot(at(1));

        assert_eq!(sim.feed(at(1)), Err(RejectionReason::Sleeping));
        let after = sim.snapshot(at(1));
        assert_eq!(after.attributes, before.attributes);
        assert_eq!(after.log, before.log);
        assert_eq!(after.state.last_action, Some(PerformedAction::Sleep));
    }

    #[test]
    fn wake_returns_to_derived_mood() {
        let mut sim = make_sim();
        sim.toggle_sleep(t0()).unwrap();
        assert_eq!(sim.state().mood, Mood::Sleeping);

        let report = sim.toggle_sleep(at(5)).unwrap();
        assert_eq!(report.performed, PerformedAction::Wake);
        assert!(!sim.state().mood.is_sleeping());
    }

    #[test]
    fn dead_pet_rejects_actions_but_accepts_controls() {
        let mut sim = make_sim();
        sim.state.is_alive = false;

        for action in PetAction::ALL {
            assert_eq!(sim.perform(action, t0()), Err(RejectionReason::Dead));
        }
        assert_eq!(sim.toggle_pause(t0()), PetEvent::Paused);
        assert_eq!(
            sim.set_speed(SpeedMultiplier::Double, t0()),
            PetEvent::SpeedChanged {
                speed: SpeedMultiplier::Double
            }
        );
    }

    #[test]
    fn pause_round_trip_logs_both() {
        let mut sim = make_sim();
        assert_eq!(sim.toggle_pause(at(1)), PetEvent::Paused);
        assert!(!sim.is_ticking());
        assert_eq!(sim.toggle_pause(at(2)), PetEvent::Resumed);
        assert!(sim.is_ticking());
        assert_eq!(sim.log().latest().unwrap().text, "Game resumed!");
    }

    #[test]
    fn double_speed_doubles_delta() {
        let mut sim = make_sim();
        sim.set_speed(SpeedMultiplier::Double, t0());
        let summary = sim.advance(at(1000));
        assert!(approx(summary.delta_ms, 2000.0));
    }

    #[test]
    fn reinitialize_restores_defaults() {
        let mut sim = make_sim();
        let first_id = sim.pet_id();
        sim.set_speed(SpeedMultiplier::Half, t0());
        sim.advance(at(50_000));
        sim.play(at(50_000)).unwrap();
        sim.state.is_alive = false;

        assert_eq!(sim.reinitialize(at(60_000)), PetEvent::Born);
        let snap = sim.snapshot(at(60_000));
        assert_ne!(snap.pet_id, first_id);
        assert_eq!(snap.attributes, PetAttributes::default());
        assert_eq!(snap.state, PetState::default());
        assert_eq!(snap.clock.speed, SpeedMultiplier::Normal);
        assert!(!snap.clock.paused);
        assert!(approx(snap.clock.total_simulated_ms, 0.0));
        assert_eq!(snap.clock.last_tick, at(60_000));
        assert_eq!(snap.log.len(), 1);
        assert_eq!(snap.log.first().unwrap().text, "A new pet was born!");
        assert!(snap.cues.is_empty());
    }
}
