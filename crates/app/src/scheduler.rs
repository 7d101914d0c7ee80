//! In-process timer scheduler backed by tokio sleeps.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;

use playloop_domain::error::PlayLoopError;
use playloop_domain::timer::TimerCommand;

use crate::ports::TimerScheduler;
use crate::run_loop::InputEvent;

/// Scheduler that sleeps on a spawned task and feeds the elapsed command
/// back into the event loop's own channel.
///
/// The loop keeps processing snapshots while timers are pending; a command
/// is delivered in arrival order once its delay elapses. Delivery is
/// best-effort: when the loop is already gone the command is dropped.
pub struct TokioTimerScheduler {
    events: mpsc::Sender<InputEvent>,
}

impl TokioTimerScheduler {
    /// Create a scheduler delivering into `events`.
    #[must_use]
    pub fn new(events: mpsc::Sender<InputEvent>) -> Self {
        Self { events }
    }
}

impl TimerScheduler for TokioTimerScheduler {
    fn schedule(
        &self,
        delay: Duration,
        command: TimerCommand,
    ) -> impl Future<Output = Result<(), PlayLoopError>> + Send {
        let events = self.events.clone();
        async move {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if events.send(InputEvent::Timer(command)).await.is_err() {
                    tracing::debug!("event loop gone, dropping elapsed timer");
                }
            });
            Ok(())
        }
    }
}
