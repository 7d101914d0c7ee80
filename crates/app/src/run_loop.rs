//! Single-threaded event loop — snapshots, timers, and session boundaries.
//!
//! All automation logic runs on the one task that drains this loop, so no
//! two pieces of logic ever run concurrently with each other. A snapshot
//! can arrive and be processed while a scheduled timer is still pending;
//! interleaving follows arrival order only.

use tokio::sync::mpsc;

use playloop_domain::error::PlayLoopError;
use playloop_domain::session::Session;
use playloop_domain::snapshot::Snapshot;
use playloop_domain::timer::TimerCommand;

use crate::engine::PlaybackEngine;
use crate::ports::{ActionDriver, Clock, TimerScheduler};

/// Everything the event loop consumes.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// The external launcher opened the target application; a new cycle
    /// begins. Sent exactly once per cycle.
    SessionStarted,
    /// A UI-tree snapshot was delivered by the host.
    Snapshot(Snapshot),
    /// A scheduled timer elapsed.
    Timer(TimerCommand),
}

/// Drain `events` until the channel closes, dispatching into the engine.
///
/// # Errors
///
/// Propagates the first engine error; transient conditions never surface
/// here.
pub async fn run<D, S, C>(
    engine: &PlaybackEngine<D, S, C>,
    session: &mut Session,
    events: &mut mpsc::Receiver<InputEvent>,
) -> Result<(), PlayLoopError>
where
    D: ActionDriver,
    S: TimerScheduler,
    C: Clock,
{
    while let Some(event) = events.recv().await {
        match event {
            InputEvent::SessionStarted => {
                session.begin_cycle();
                tracing::info!(session = %session.id, "cycle started");
            }
            InputEvent::Snapshot(snapshot) => {
                engine.handle_snapshot(session, &snapshot).await?;
            }
            InputEvent::Timer(command) => {
                engine.handle_timer(session, command).await?;
            }
        }
    }
    tracing::debug!("event channel closed, loop finished");
    Ok(())
}
