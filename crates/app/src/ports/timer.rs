//! Timer scheduler port — fire-once delayed commands.

use std::future::Future;
use std::time::Duration;

use playloop_domain::error::PlayLoopError;
use playloop_domain::timer::TimerCommand;

/// Registers a command to be delivered back into the event loop once, no
/// earlier than `delay` after registration.
///
/// There is no cancellation: a scheduled command always fires. Commands
/// carry an epoch token so the engine can drop the ones that outlived
/// their cycle. Registrations are independent; two commands with different
/// delays are delivered in wall-clock expiry order.
pub trait TimerScheduler {
    /// Schedule `command` to fire after `delay`.
    fn schedule(
        &self,
        delay: Duration,
        command: TimerCommand,
    ) -> impl Future<Output = Result<(), PlayLoopError>> + Send;
}

impl<T: TimerScheduler + Send + Sync> TimerScheduler for std::sync::Arc<T> {
    fn schedule(
        &self,
        delay: Duration,
        command: TimerCommand,
    ) -> impl Future<Output = Result<(), PlayLoopError>> + Send {
        (**self).schedule(delay, command)
    }
}
