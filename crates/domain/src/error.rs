//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PlayLoopError`] via `#[from]`. Transient conditions (a control node
//! missing from a snapshot, elapsed text that does not parse yet) are
//! **not** errors — they are modelled as flags and `Option`s.

/// Top-level error for the playloop workspace.
#[derive(Debug, thiserror::Error)]
pub enum PlayLoopError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// An event or timer could not be dispatched.
    #[error("dispatch error")]
    Dispatch(#[from] DispatchError),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A package name must not be empty.
    #[error("package name is empty")]
    EmptyPackageName,
}

/// Failures delivering events into the processing loop.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The event channel was closed before the message could be delivered.
    #[error("event channel closed")]
    ChannelClosed,
}
