//! # playloop-domain
//!
//! Pure domain model for the playloop playback automation system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Phases** (the stages of one play/pause/replay cycle)
//! - Define **Sessions** (the per-cycle context: phase, flags, durations)
//! - Define **Snapshots** (read-only UI-tree views tagged with their
//!   originating application) and tree search over them
//! - Define **Timer commands** (delayed actions carried back into the
//!   event loop, guarded by an epoch token)
//! - Parse human-readable elapsed-time text into seconds
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod controls;
pub mod elapsed;
pub mod node;
pub mod phase;
pub mod session;
pub mod snapshot;
pub mod timer;
