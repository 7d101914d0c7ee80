//! Phase — the automation's current stage within one play/pause/replay cycle.

use serde::{Deserialize, Serialize};

/// Mutually exclusive stages of a playback cycle.
///
/// A cycle runs `Idle → SleepingBefore → Playing → SleepingAfter →
/// NotRunning`; the external launcher moves the session back to [`Idle`]
/// when it opens the target application again. [`Paused`] is a parking
/// phase in which incoming snapshots are skipped entirely.
///
/// [`Idle`]: Self::Idle
/// [`Paused`]: Self::Paused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Cycle entry: the target application was just launched.
    Idle,
    /// Waiting for the delayed "press play" action.
    SleepingBefore,
    /// The video is playing; elapsed time is being watched.
    Playing,
    /// Snapshot processing is explicitly skipped.
    Paused,
    /// The video was paused; waiting for the delayed relaunch.
    SleepingAfter,
    /// Rest phase between cycles.
    #[default]
    NotRunning,
}

impl Phase {
    /// Whether a cycle is currently in progress.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::NotRunning)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::SleepingBefore => f.write_str("sleeping_before"),
            Self::Playing => f.write_str("playing"),
            Self::Paused => f.write_str("paused"),
            Self::SleepingAfter => f.write_str("sleeping_after"),
            Self::NotRunning => f.write_str("not_running"),
        }
    }
}
