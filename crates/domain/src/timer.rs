//! Timer commands — delayed actions fed back into the event loop.
//!
//! Scheduled callbacks cannot be cancelled; instead every command carries
//! the [`Epoch`] current at registration time, and the engine drops
//! commands whose epoch no longer matches the session's.

use serde::{Deserialize, Serialize};

use crate::id::Epoch;
use crate::node::UiNode;

/// The delayed action to perform when a timer fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimerAction {
    /// Press the play control, operating on the UI tree captured when the
    /// timer was scheduled (the tree may be stale by the time it fires).
    PressPlay { root: UiNode },
    /// Bring the controlling process back to the foreground and end the cycle.
    Relaunch,
}

impl std::fmt::Display for TimerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PressPlay { .. } => f.write_str("press_play"),
            Self::Relaunch => f.write_str("relaunch"),
        }
    }
}

/// A delayed action together with its registration epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerCommand {
    /// Epoch captured when the timer was registered.
    pub epoch: Epoch,
    /// What to do when the delay elapses.
    pub action: TimerAction,
}

impl TimerCommand {
    /// A delayed press-play command over a captured tree.
    #[must_use]
    pub fn press_play(epoch: Epoch, root: UiNode) -> Self {
        Self {
            epoch,
            action: TimerAction::PressPlay { root },
        }
    }

    /// A delayed relaunch command.
    #[must_use]
    pub fn relaunch(epoch: Epoch) -> Self {
        Self {
            epoch,
            action: TimerAction::Relaunch,
        }
    }
}
