// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Injected time source for audit timestamps.
//!
//! Stores write concrete timestamp values obtained from a [`Clock`] instead
//! of deferring to the database's `NOW()`. One consistent source avoids skew
//! between `created`/`updated`/`deleted` and keeps the stamping logic
//! testable with [`FixedClock`].

use chrono::{DateTime, Utc};

/// Time source for audit timestamps.
///
/// Generated stores are generic over their clock; [`SystemClock`] is the
/// default.
pub trait Clock: Send + Sync {
    /// Current moment in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock of the application server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
///
/// Test double: lets assertions compare stamped values exactly.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use record_core::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
/// let clock = FixedClock::at(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Create a clock frozen at `instant`.
    #[must_use]
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn clock_is_object_safe() {
        let instant = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let clock: &dyn Clock = &FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
    }
}
