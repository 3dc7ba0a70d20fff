//! Text rendering and the tick callback for the console host.

use std::fmt::Write as _;

use tamago_core::runner::SimulationCallback;
use tamago_core::{Simulation, TickSummary};
use tamago_pet::appearance;
use tamago_types::{PetEvent, PetSnapshot};
use tracing::info;

/// Width of an attribute bar in characters.
const BAR_WIDTH: usize = 10;

/// Prints tick events as they happen.
pub struct ConsoleCallback;

impl SimulationCallback for ConsoleCallback {
    fn on_tick(&mut self, summary: &TickSummary, sim: &Simulation) {
        let glyph = appearance::glyph(sim.state());
        for event in &summary.events {
            info!(pet_id = %sim.pet_id(), event = ?event, "Tick event");
            println!("{glyph}  {event}");
            if *event == PetEvent::Died {
                println!("   type `reset` to hatch a new pet");
            }
        }
    }
}

/// Multi-line description of a snapshot.
pub fn render_status(snap: &PetSnapshot) -> String {
    let mut out = String::new();
    let state = &snap.state;
    let attrs = &snap.attributes;

    let life = if state.is_alive {
        format!("{}, {}", state.stage, state.mood)
    } else {
        format!("{}, dead", state.stage)
    };
    let time_of_day = if state.is_day_time { "day" } else { "night" };
    let paused = if snap.clock.paused { ", paused" } else { "" };
    let _ = writeln!(
        out,
        "{}  {life} | {time_of_day} | {}{paused}",
        appearance::glyph(state),
        snap.clock.speed
    );

    for (name, value) in [
        ("hunger", attrs.hunger),
        ("happiness", attrs.happiness),
        ("energy", attrs.energy),
        ("health", attrs.health),
        ("cleanliness", attrs.cleanliness),
        ("discipline", attrs.discipline),
    ] {
        let _ = writeln!(out, "  {name:<12}[{}] {value:>5.1}", bar(value));
    }
    let _ = writeln!(out, "  {:<12}{:.2}", "age", attrs.age);

    if let Some(action) = state.last_action {
        let _ = writeln!(out, "  last action: {action:?}");
    }
    if let Some(note) = &snap.notification {
        let _ = writeln!(out, "  > {}", note.message);
    }
    for entry in &snap.log {
        let _ = writeln!(out, "  {}  {}", entry.timestamp.format("%H:%M:%S"), entry.text);
    }
    out
}

/// A fixed-width bar for a value in `[0, 100]`.
fn bar(value: f64) -> String {
    let filled = filled_cells(value);
    let mut s = "#".repeat(filled);
    s.push_str(&"-".repeat(BAR_WIDTH.saturating_sub(filled)));
    s
}

// `value` is clamped to [0, 100] first, so the cast is in range.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn filled_cells(value: f64) -> usize {
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
    ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize
}
