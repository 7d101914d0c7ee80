//! Clock port — current time, swappable in tests.

use playloop_domain::time::Timestamp;

/// Source of the current time.
pub trait Clock {
    /// The current UTC time.
    fn now(&self) -> Timestamp;
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        playloop_domain::time::now()
    }
}

impl<T: Clock + Send + Sync> Clock for std::sync::Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
