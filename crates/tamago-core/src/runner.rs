//! Async driver: a task that owns the simulation and ticks it on a timer.
//!
//! [`spawn_driver`] moves a [`Simulation`] into a tokio task and returns a
//! cloneable [`PetHandle`]. The task runs a `select!` over two sources:
//!
//! - **Interval** -- every `tick_interval`, call [`Simulation::advance`].
//!   The branch is disabled while the pet is dead or paused, and the
//!   interval is reset when ticking becomes possible again.
//! - **Commands** -- actions, pause, speed, reinitialize and snapshot
//!   requests from the handle, each answered over a oneshot channel.
//!
//! Every mutation happens on the driver task, so ticks and commands never
//! interleave.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tamago_types::{PetAction, PetEvent, PetSnapshot, RejectionReason, SpeedMultiplier};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::controller::ActionReport;
use crate::simulation::Simulation;
use crate::tick::TickSummary;

/// Commands buffered before senders wait.
const COMMAND_BUFFER: usize = 64;

/// Shortest tick interval the driver accepts.
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Errors returned by [`PetHandle`] when the driver is gone.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The driver stopped before accepting the command.
    #[error("driver is not running: {source}")]
    Send {
        /// The rejected command.
        #[from]
        source: mpsc::error::SendError<Command>,
    },

    /// The driver stopped before replying.
    #[error("driver dropped the reply: {source}")]
    Reply {
        /// The underlying channel error.
        #[from]
        source: oneshot::error::RecvError,
    },
}

/// A request to the driver task.
#[derive(Debug)]
pub enum Command {
    /// Apply a care action.
    Perform {
        /// The action to apply.
        action: PetAction,
        /// Receives the outcome.
        reply: oneshot::Sender<Result<ActionReport, RejectionReason>>,
    },
    /// Pause or resume ticking.
    TogglePause {
        /// Receives the recorded event.
        reply: oneshot::Sender<PetEvent>,
    },
    /// Change the speed multiplier.
    SetSpeed {
        /// The new multiplier.
        speed: SpeedMultiplier,
        /// Receives the recorded event.
        reply: oneshot::Sender<PetEvent>,
    },
    /// Discard the pet and hatch a new one.
    Reinitialize {
        /// Receives the recorded event.
        reply: oneshot::Sender<PetEvent>,
    },
    /// Read the current state.
    Snapshot {
        /// Receives the snapshot.
        reply: oneshot::Sender<PetSnapshot>,
    },
    /// Stop the driver.
    Shutdown,
}

/// Source of "now" for the driver.
pub trait TimeSource: Send + Sync {
    /// The current wall-clock instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time measured from a fixed anchor with tokio's monotonic
/// clock, so system clock adjustments never reach the simulation.
///
/// Under a paused tokio runtime it follows the test clock.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    anchor_instant: Instant,
    anchor: DateTime<Utc>,
}

impl MonotonicTime {
    /// Anchor at the current system time.
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Anchor at `anchor`.
    pub fn starting_at(anchor: DateTime<Utc>) -> Self {
        Self {
            anchor_instant: Instant::now(),
            anchor,
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = TimeDelta::from_std(self.anchor_instant.elapsed()).unwrap_or(TimeDelta::MAX);
        self.anchor
            .checked_add_signed(elapsed)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// Callback invoked after each executed tick.
///
/// Skipped ticks (dead or paused) never reach the callback because the
/// driver does not fire them.
pub trait SimulationCallback: Send {
    /// Called after a tick completes.
    fn on_tick(&mut self, summary: &TickSummary, sim: &Simulation);
}

/// A no-op callback.
pub struct NoOpCallback;

impl SimulationCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _sim: &Simulation) {}
}

/// Cloneable handle to a running driver.
#[derive(Debug, Clone)]
pub struct PetHandle {
    tx: mpsc::Sender<Command>,
}

impl PetHandle {
    /// Apply a care action. The inner result is the domain outcome.
    pub async fn perform(
        &self,
        action: PetAction,
    ) -> Result<Result<ActionReport, RejectionReason>, RunnerError> {
        self.request(|reply| Command::Perform { action, reply }).await
    }

    /// Pause or resume ticking.
    pub async fn toggle_pause(&self) -> Result<PetEvent, RunnerError> {
        self.request(|reply| Command::TogglePause { reply }).await
    }

    /// Change the speed multiplier.
    pub async fn set_speed(&self, speed: SpeedMultiplier) -> Result<PetEvent, RunnerError> {
        self.request(|reply| Command::SetSpeed { speed, reply }).await
    }

    /// Discard the pet and hatch a new one.
    pub async fn reinitialize(&self) -> Result<PetEvent, RunnerError> {
        self.request(|reply| Command::Reinitialize { reply }).await
    }

    /// Read the current state.
    pub async fn snapshot(&self) -> Result<PetSnapshot, RunnerError> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Ask the driver to stop. Pending commands ahead of it are still served.
    pub async fn shutdown(&self) -> Result<(), RunnerError> {
        self.tx.send(Command::Shutdown).await?;
        Ok(())
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(oneshot::Sender<R>) -> Command,
    ) -> Result<R, RunnerError> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(make(reply)).await?;
        Ok(rx.await?)
    }
}

/// Move `sim` into a new driver task.
///
/// The task ends on [`PetHandle::shutdown`] or when every handle is
/// dropped, and yields the final simulation.
pub fn spawn_driver<T, C>(
    sim: Simulation,
    time: T,
    tick_interval: Duration,
    mut callback: C,
) -> (PetHandle, JoinHandle<Simulation>)
where
    T: TimeSource + 'static,
    C: SimulationCallback + 'static,
{
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    let task = tokio::spawn(async move {
        run_driver(sim, rx, &time, tick_interval, &mut callback).await
    });
    (PetHandle { tx }, task)
}

/// Drive `sim` until shutdown or until the command channel closes.
pub async fn run_driver(
    mut sim: Simulation,
    mut commands: mpsc::Receiver<Command>,
    time: &dyn TimeSource,
    tick_interval: Duration,
    callback: &mut dyn SimulationCallback,
) -> Simulation {
    let period = tick_interval.max(MIN_TICK_INTERVAL);
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval.reset();

    info!(
        pet_id = %sim.pet_id(),
        tick_interval_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
        "Driver starting"
    );

    loop {
        tokio::select! {
            _ = interval.tick(), if sim.is_ticking() => {
                let summary = sim.advance(time.now());
                callback.on_tick(&summary, &sim);
                if !sim.state().is_alive {
                    info!(pet_id = %sim.pet_id(), "Ticks suspended until reinitialized");
                }
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("All handles dropped");
                    break;
                };
                let was_ticking = sim.is_ticking();
                if !handle_command(&mut sim, command, time.now()) {
                    break;
                }
                if !was_ticking && sim.is_ticking() {
                    interval.reset();
                }
            }
        }
    }

    info!(pet_id = %sim.pet_id(), "Driver stopped");
    sim
}

/// Apply one command. Returns `false` on shutdown.
///
/// A dropped reply receiver is not an error; the caller simply stopped
/// waiting.
fn handle_command(sim: &mut Simulation, command: Command, now: DateTime<Utc>) -> bool {
    match command {
        Command::Perform { action, reply } => {
            let _ = reply.send(sim.perform(action, now));
        }
        Command::TogglePause { reply } => {
            let _ = reply.send(sim.toggle_pause(now));
        }
        Command::SetSpeed { speed, reply } => {
            let _ = reply.send(sim.set_speed(speed, now));
        }
        Command::Reinitialize { reply } => {
            let _ = reply.send(sim.reinitialize(now));
        }
        Command::Snapshot { reply } => {
            let _ = reply.send(sim.snapshot(now));
        }
        Command::Shutdown => return false,
    }
    true
}
