//! Action driver port — simulated taps on UI nodes.

use std::future::Future;

use playloop_domain::error::PlayLoopError;
use playloop_domain::node::UiNode;

/// Performs primitive actions on the target application's UI.
///
/// Taps have no confirmation channel: a returned `Ok` means the request was
/// issued, not that the target application reacted. Whether an action took
/// effect only shows up in later snapshots.
pub trait ActionDriver {
    /// Simulate a primary action (tap/click) on `node`.
    fn tap(&self, node: &UiNode) -> impl Future<Output = Result<(), PlayLoopError>> + Send;

    /// Ask the host environment to bring the automation's own controlling
    /// process back to the foreground. Issued once per full cycle.
    fn launch_controller(&self) -> impl Future<Output = Result<(), PlayLoopError>> + Send;
}

impl<T: ActionDriver + Send + Sync> ActionDriver for std::sync::Arc<T> {
    fn tap(&self, node: &UiNode) -> impl Future<Output = Result<(), PlayLoopError>> + Send {
        (**self).tap(node)
    }

    fn launch_controller(&self) -> impl Future<Output = Result<(), PlayLoopError>> + Send {
        (**self).launch_controller()
    }
}
