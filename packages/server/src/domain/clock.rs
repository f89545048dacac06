//! Time source used for heartbeats and expiry.

use std::{
    sync::atomic::{AtomicI64, Ordering},
    time::Instant,
};

use super::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Unix milliseconds that advance monotonically.
///
/// The wall clock is read once at construction; later readings add the
/// elapsed `Instant`, so system clock steps do not move expiry.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    anchor_millis: i64,
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            anchor_millis: roomly_shared::time::now_millis(),
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let elapsed = i64::try_from(self.started.elapsed().as_millis()).unwrap_or(i64::MAX);
        Timestamp::new(self.anchor_millis.saturating_add(elapsed))
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            millis: AtomicI64::new(start.value()),
        }
    }

    pub fn advance_millis(&self, millis: i64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }

    pub fn set(&self, now: Timestamp) {
        self.millis.store(now.value(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.millis.load(Ordering::SeqCst))
    }
}
