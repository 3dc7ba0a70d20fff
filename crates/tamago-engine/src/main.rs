//! Console host for the Tamago pet simulation.
//!
//! This is the main entry point that wires together configuration,
//! logging, the simulation driver and a line-oriented command reader on
//! standard input. Log lines go to stderr; pet output goes to stdout.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `tamago-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Validate the configuration and hatch the pet
//! 4. Spawn the driver task
//! 5. Read commands until `quit` or end of input
//! 6. Shut the driver down and log the final state

mod command;
mod console;
mod error;

use std::path::Path;
use std::time::Duration;

use tamago_core::config::{LogFormat, LoggingConfig, SimulationConfig};
use tamago_core::runner::{self, MonotonicTime, PetHandle, TimeSource};
use tamago_core::Simulation;
use tamago_types::{PetAction, PetEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::command::{ConsoleCommand, HELP};
use crate::console::ConsoleCallback;
use crate::error::EngineError;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "tamago-config.yaml";

/// Application entry point for the console host.
///
/// # Errors
///
/// Returns an error if configuration, startup, or reading input fails.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("tamago-engine starting");
    if from_file {
        info!(path = CONFIG_PATH, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }

    // 3. Validate and hatch.
    config.validate()?;
    let time = MonotonicTime::new();
    let sim = Simulation::new(&config, time.now())?;
    info!(
        pet_id = %sim.pet_id(),
        tick_interval_ms = config.time.tick_interval_ms,
        day_period_ms = config.time.day_period_ms,
        "Simulation initialized"
    );

    // 4. Spawn the driver.
    let (handle, driver) = runner::spawn_driver(
        sim,
        time,
        Duration::from_millis(config.time.tick_interval_ms),
        ConsoleCallback,
    );

    // 5. Command loop.
    println!("{HELP}");
    run_console(&handle).await?;

    // 6. Shutdown.
    handle.shutdown().await?;
    let sim = driver.await?;
    info!(
        pet_id = %sim.pet_id(),
        alive = sim.state().is_alive,
        stage = %sim.state().stage,
        age = sim.attributes().age,
        "tamago-engine stopped"
    );
    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over the configured
/// level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Load configuration from `tamago-config.yaml`, or defaults (with
/// environment overrides) when the file does not exist.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok((config, true))
    } else {
        let mut config = SimulationConfig::default();
        config.apply_env_overrides();
        Ok((config, false))
    }
}

/// Read and execute commands until `quit` or end of input.
async fn run_console(handle: &PetHandle) -> Result<(), EngineError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(ConsoleCommand::Quit)) => break,
            Ok(Some(cmd)) => execute(handle, cmd).await?,
            Err(e) => {
                warn!(input = line.trim(), error = %e, "Rejected console input");
                println!("{e}");
            }
        }
    }
    Ok(())
}

async fn execute(handle: &PetHandle, cmd: ConsoleCommand) -> Result<(), EngineError> {
    match cmd {
        ConsoleCommand::Act(action) => perform(handle, action).await?,
        ConsoleCommand::Sleep | ConsoleCommand::Wake => {
            let wants_sleep = cmd == ConsoleCommand::Sleep;
            let asleep = handle.snapshot().await?.state.mood.is_sleeping();
            if asleep == wants_sleep {
                println!("{}", if asleep { "already asleep" } else { "already awake" });
            } else {
                perform(handle, PetAction::ToggleSleep).await?;
            }
        }
        ConsoleCommand::TogglePause => print_event(handle.toggle_pause().await?),
        ConsoleCommand::Speed(speed) => print_event(handle.set_speed(speed).await?),
        ConsoleCommand::Reset => print_event(handle.reinitialize().await?),
        ConsoleCommand::Status => print!("{}", console::render_status(&handle.snapshot().await?)),
        ConsoleCommand::StatusJson => {
            let snap = handle.snapshot().await?;
            println!("{}", serde_json::to_string_pretty(&snap)?);
        }
        ConsoleCommand::Help => println!("{HELP}"),
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

async fn perform(handle: &PetHandle, action: PetAction) -> Result<(), EngineError> {
    match handle.perform(action).await? {
        Ok(report) => {
            let mut events = report.events.iter();
            if let Some(first) = events.next() {
                println!("{}", first.toast());
            }
            for event in events {
                println!("{event}");
            }
        }
        Err(reason) => {
            warn!(action = %action, reason = %reason, "Action rejected");
            println!("can't {action}: {reason}");
        }
    }
    Ok(())
}

fn print_event(event: PetEvent) {
    println!("{}", event.toast());
}
