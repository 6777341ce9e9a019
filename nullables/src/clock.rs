//! Controllable clock for issuance and validity-window tests.

use skillmint_types::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};

/// A clock that only moves when told to.
///
/// Backed by an atomic so it can be shared across the async tasks a test
/// spawns. Services take `now: Timestamp` as a parameter; tests feed them
/// from one of these.
pub struct NullClock {
    secs: AtomicU64,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            secs: AtomicU64::new(initial_secs),
        }
    }

    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.secs.load(Ordering::Relaxed))
    }

    /// Move time forward and return the new reading.
    pub fn advance(&self, secs: u64) -> Timestamp {
        let new = self.secs.fetch_add(secs, Ordering::Relaxed) + secs;
        Timestamp::new(new)
    }

    /// Jump to an absolute time, forward or backward.
    pub fn set(&self, secs: u64) {
        self.secs.store(secs, Ordering::Relaxed);
    }
}
