//! Clock port
//!
//! Evaluations are judged against a single "now". Services read it once per
//! pass from a [`Clock`], so production code uses the wall clock while tests
//! pin it.

use chrono::{Local, NaiveDateTime};

/// Source of the shop's local wall-clock time
pub trait Clock: Send + Sync {
    /// Current local date and time, without offset
    fn now(&self) -> NaiveDateTime;
}

/// Real local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
