use std::cell::Cell;

use chrono::{DateTime, Local, SubsecRound};

/// Source of "now" for transaction timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a given instant until moved with [`FixedClock::set`] or
/// [`FixedClock::advance`]. Used to make timestamps deterministic.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Cell<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self {
            instant: Cell::new(instant),
        }
    }

    pub fn set(&self, instant: DateTime<Local>) {
        self.instant.set(instant);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.instant.set(self.instant.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

/// Read the clock at second resolution.
pub(crate) fn now_in_seconds<C: Clock + ?Sized>(clock: &C) -> DateTime<Local> {
    clock.now().trunc_subsecs(0)
}
