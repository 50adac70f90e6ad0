//! Helpers for tests that need deterministic release dates
//!
//! Compiled for this crate's own tests and, for downstream crates, behind the
//! `test-utils` feature.

use crate::clock::Clock;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, PoisonError};

/// Clock returning a settable instant
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock frozen at `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the clock to `now`
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
