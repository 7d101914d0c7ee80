//! Session — the per-cycle automation context.
//!
//! One [`Session`] value lives for the whole process and is passed by
//! mutable reference into the engine. A *cycle* starts when the external
//! launcher opens the target application ([`Session::begin_cycle`]) and
//! ends when the delayed relaunch fires ([`Session::finish_cycle`]).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::id::{Epoch, SessionId};
use crate::phase::Phase;
use crate::time::Timestamp;

/// The three configured wait durations, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    /// Wait before pressing play.
    pub before_play: u64,
    /// Minimum playback time before pausing is allowed.
    pub play: u64,
    /// Wait after pausing before restarting the cycle.
    pub after_play: u64,
}

impl Durations {
    /// `before_play` as a [`Duration`].
    #[must_use]
    pub fn before_play_delay(&self) -> Duration {
        Duration::from_secs(self.before_play)
    }

    /// `after_play` as a [`Duration`].
    #[must_use]
    pub fn after_play_delay(&self) -> Duration {
        Duration::from_secs(self.after_play)
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            before_play: 3,
            play: 5,
            after_play: 5,
        }
    }
}

/// Mutable state of the current automation cycle.
///
/// Invariants:
/// - `waiting_to_play` is true only while `phase == SleepingBefore`; it is
///   set when the delayed play action is scheduled and cleared when that
///   action executes.
/// - `started_at` is set only on the transition into `Playing` and is
///   consulted only while `Playing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identifier of the current cycle, refreshed by [`begin_cycle`](Self::begin_cycle).
    pub id: SessionId,
    /// Current automation phase.
    pub phase: Phase,
    /// Configured wait durations; read-only during a cycle.
    pub durations: Durations,
    /// True once the target app's on-screen controls are believed hidden.
    pub buttons_hidden: bool,
    /// True between scheduling the delayed play action and its execution.
    pub waiting_to_play: bool,
    /// When playback actually began.
    pub started_at: Option<Timestamp>,
    epoch: Epoch,
}

impl Session {
    /// A session at rest, before any cycle has started.
    #[must_use]
    pub fn new(durations: Durations) -> Self {
        Self {
            id: SessionId::new(),
            phase: Phase::NotRunning,
            durations,
            buttons_hidden: false,
            waiting_to_play: false,
            started_at: None,
            epoch: Epoch::default(),
        }
    }

    /// Start a new cycle: fresh id, phase `Idle`, flags cleared, epoch
    /// advanced so that timers from the previous cycle become stale.
    pub fn begin_cycle(&mut self) {
        self.id = SessionId::new();
        self.phase = Phase::Idle;
        self.buttons_hidden = false;
        self.waiting_to_play = false;
        self.started_at = None;
        self.epoch = self.epoch.next();
    }

    /// End the current cycle and return to rest.
    pub fn finish_cycle(&mut self) {
        self.phase = Phase::NotRunning;
        self.buttons_hidden = false;
        self.waiting_to_play = false;
        self.started_at = None;
        self.epoch = self.epoch.next();
    }

    /// The epoch of the current cycle, captured by timers at scheduling time.
    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Whether a timer registered under `epoch` belongs to an earlier cycle.
    #[must_use]
    pub fn is_stale(&self, epoch: Epoch) -> bool {
        epoch != self.epoch
    }
}
