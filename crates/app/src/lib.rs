//! # playloop-app
//!
//! Application layer — the playback state machine and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `ActionDriver` — simulated taps and the relaunch request
//!   - `TimerScheduler` — fire-once delayed commands
//!   - `Clock` — current time, swappable in tests
//! - Provide the **`PlaybackEngine`** that consumes snapshots and timer
//!   commands and drives the session through its phases
//! - Provide **in-process infrastructure** (the tokio timer scheduler and
//!   the single-threaded run loop) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `playloop-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod engine;
pub mod ports;
pub mod run_loop;
pub mod scheduler;
