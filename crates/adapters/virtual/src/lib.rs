//! # playloop-adapter-virtual
//!
//! Virtual/demo player that simulates the target video application for
//! testing and demonstration.
//!
//! The simulated player opens autoplaying, advances one second per
//! [`tick`](VirtualPlayer::tick), auto-hides its controls after a few idle
//! ticks, and emits a fresh [`Snapshot`] into the event loop whenever its
//! UI changes — the same delivery contract a real host environment
//! provides. It doubles as the [`ActionDriver`]: taps land back on the
//! simulation, and a relaunch request re-opens the player for the next
//! cycle.
//!
//! ## Dependency rule
//!
//! Depends on `playloop-app` (port traits) and `playloop-domain` only.

mod sim;

pub use sim::PlayerSim;

use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use playloop_app::ports::ActionDriver;
use playloop_app::run_loop::InputEvent;
use playloop_domain::controls::ControlIds;
use playloop_domain::error::{DispatchError, PlayLoopError};
use playloop_domain::node::UiNode;
use playloop_domain::snapshot::{PackageName, Snapshot};

/// Shared handle to the simulated player.
#[derive(Clone)]
pub struct VirtualPlayer {
    inner: Arc<Inner>,
}

struct Inner {
    package: PackageName,
    controls: ControlIds,
    sim: Mutex<PlayerSim>,
    events: mpsc::Sender<InputEvent>,
}

impl VirtualPlayer {
    /// Create a player identified as `package`, delivering snapshots into
    /// `events`.
    #[must_use]
    pub fn new(
        package: PackageName,
        controls: ControlIds,
        events: mpsc::Sender<InputEvent>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                package,
                controls,
                sim: Mutex::new(PlayerSim::new()),
                events,
            }),
        }
    }

    /// Open (or re-open) the player: marks the session boundary and emits
    /// the first snapshot of the cycle.
    ///
    /// # Errors
    ///
    /// Returns a dispatch error when the event loop is gone.
    pub async fn open(&self) -> Result<(), PlayLoopError> {
        self.inner.sim.lock().expect("sim lock").reopen();
        tracing::debug!(package = %self.inner.package, "player opened");
        self.send(InputEvent::SessionStarted).await?;
        self.emit_snapshot().await
    }

    /// Advance the simulation by one second and emit the updated UI.
    ///
    /// # Errors
    ///
    /// Returns a dispatch error when the event loop is gone.
    pub async fn tick(&self) -> Result<(), PlayLoopError> {
        self.inner.sim.lock().expect("sim lock").tick();
        self.emit_snapshot().await
    }

    /// Whether the simulated video is currently playing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.inner.sim.lock().expect("sim lock").is_playing()
    }

    /// Current playback position in seconds.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.inner.sim.lock().expect("sim lock").position()
    }

    async fn emit_snapshot(&self) -> Result<(), PlayLoopError> {
        let root = {
            let sim = self.inner.sim.lock().expect("sim lock");
            sim.tree(&self.inner.controls)
        };
        let snapshot = Snapshot::new(self.inner.package.clone(), root);
        self.send(InputEvent::Snapshot(snapshot)).await
    }

    async fn send(&self, event: InputEvent) -> Result<(), PlayLoopError> {
        self.inner
            .events
            .send(event)
            .await
            .map_err(|_| DispatchError::ChannelClosed.into())
    }
}

impl ActionDriver for VirtualPlayer {
    fn tap(&self, node: &UiNode) -> impl Future<Output = Result<(), PlayLoopError>> + Send {
        {
            let mut sim = self.inner.sim.lock().expect("sim lock");
            if node.view_id.as_ref() == Some(&self.inner.controls.surface) {
                sim.tap_surface();
            } else if node.view_id.as_ref() == Some(&self.inner.controls.play_pause) {
                sim.tap_play_pause();
            }
        }
        tracing::trace!(view_id = ?node.view_id, "tap");
        self.emit_snapshot()
    }

    fn launch_controller(&self) -> impl Future<Output = Result<(), PlayLoopError>> + Send {
        // In the demo environment the controller immediately re-opens the
        // player, which starts the next cycle.
        self.open()
    }
}
