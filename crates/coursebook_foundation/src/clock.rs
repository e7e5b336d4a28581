//! Time sources for registration timestamps.
//!
//! The catalog never reads the system clock directly. Production code uses
//! [`SystemClock`]; tests inject a [`FixedClock`] for reproducible timestamps.
//!
//! # Invariants
//!
//! - Monotonicity: successive calls to `now()` never go backwards

use std::cell::Cell;
use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// Abstract source of the current time.
pub trait Clock: fmt::Debug {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that advances by a fixed step on every read.
pub struct FixedClock {
    next: Cell<DateTime<Utc>>,
    step: Duration,
}

impl FixedClock {
    /// Creates a clock starting at `start` that advances one second per read.
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::with_step(start, Duration::seconds(1))
    }

    /// Creates a clock starting at `start` that advances `step` per read.
    #[must_use]
    pub fn with_step(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl fmt::Debug for FixedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedClock")
            .field("next", &self.next.get())
            .field("step", &self.step)
            .finish()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + self.step);
        now
    }
}
