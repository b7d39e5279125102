// Copyright 2026 the KoppeK Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock instants and countdown durations.
//!
//! [`WallTime`] is a point in time as milliseconds since the Unix epoch, the
//! unit the browser's `Date.now()` reports. [`LaunchDate`] names a calendar
//! hour that a backend resolves to a [`WallTime`] in the runtime's local time
//! zone. [`Remaining`] is the non-negative distance from now to that instant.

use core::fmt;
use core::ops::Sub;

/// Milliseconds in one second.
pub const MS_PER_SECOND: u64 = 1_000;
/// Milliseconds in one minute.
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
/// Milliseconds in one hour.
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
/// Milliseconds in one (always 24-hour) day.
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// A point in time expressed as milliseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WallTime(pub i64);

impl WallTime {
    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Creates a [`WallTime`] from a browser timestamp (`f64` milliseconds).
    ///
    /// Fractional milliseconds are truncated; the countdown only ever looks at
    /// whole seconds.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Date.now() is an integral f64 well inside the i64 range"
    )]
    pub fn from_js_millis(ms: f64) -> Self {
        Self(ms as i64)
    }

    /// Returns this instant shifted by `ms` milliseconds.
    #[inline]
    #[must_use]
    pub const fn add_millis(self, ms: i64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

impl Sub for WallTime {
    type Output = i64;

    /// Signed distance in milliseconds.
    #[inline]
    fn sub(self, rhs: Self) -> i64 {
        self.0.saturating_sub(rhs.0)
    }
}

impl fmt::Debug for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WallTime({}ms)", self.0)
    }
}

/// A calendar hour in the runtime's local time zone.
///
/// The backend turns this into a [`WallTime`] once at startup (see
/// `koppek_backend_web::resolve_launch`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LaunchDate {
    /// Four-digit year.
    pub year: i32,
    /// Month, 1-based (January is 1).
    pub month: u8,
    /// Day of month, 1-based.
    pub day: u8,
    /// Hour of day, 0–23.
    pub hour: u8,
}

impl LaunchDate {
    /// Creates a launch date.
    ///
    /// # Panics
    ///
    /// Panics if `year` is before 1970, `month` is outside `1..=12`, `day`
    /// outside `1..=31`, or `hour` outside `0..=23`.
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8, hour: u8) -> Self {
        assert!(year >= 1970, "year must not be before the Unix epoch");
        assert!(month >= 1 && month <= 12, "month must be in 1..=12");
        assert!(day >= 1 && day <= 31, "day must be in 1..=31");
        assert!(hour <= 23, "hour must be in 0..=23");
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Returns the month as a 0-based index, the form JavaScript's `Date`
    /// constructor expects.
    #[inline]
    #[must_use]
    pub const fn month_index(self) -> u8 {
        self.month - 1
    }
}

/// Non-negative time left until a target instant, in milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Remaining(pub u64);

impl Remaining {
    /// Nothing left.
    pub const ZERO: Self = Self(0);

    /// Returns the time left from `now` until `target`, or `None` once
    /// `now` is past `target`.
    ///
    /// `now == target` is `Some(Remaining::ZERO)`.
    #[must_use]
    pub const fn until(target: WallTime, now: WallTime) -> Option<Self> {
        let distance = target.0.saturating_sub(now.0);
        if distance < 0 {
            None
        } else {
            Some(Self(distance.unsigned_abs()))
        }
    }

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Remaining({}ms)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_constants() {
        assert_eq!(MS_PER_DAY, 86_400_000, "day");
        assert_eq!(MS_PER_HOUR, 3_600_000, "hour");
        assert_eq!(MS_PER_MINUTE, 60_000, "minute");
    }

    #[test]
    fn remaining_before_at_and_after_target() {
        let target = WallTime(10_000);
        assert_eq!(Remaining::until(target, WallTime(4_000)), Some(Remaining(6_000)));
        assert_eq!(Remaining::until(target, target), Some(Remaining::ZERO));
        assert_eq!(Remaining::until(target, WallTime(10_001)), None);
    }

    #[test]
    fn from_js_millis_truncates() {
        assert_eq!(WallTime::from_js_millis(1_234.9), WallTime(1_234));
        assert_eq!(WallTime::from_js_millis(0.0), WallTime(0));
    }

    #[test]
    fn wall_time_difference_is_signed() {
        assert_eq!(WallTime(500) - WallTime(200), 300);
        assert_eq!(WallTime(200) - WallTime(500), -300);
        assert_eq!(WallTime(0).add_millis(-5), WallTime(-5));
    }

    #[test]
    fn launch_date_month_index() {
        let date = LaunchDate::new(2025, 12, 24, 0);
        assert_eq!(date.month_index(), 11, "December is month 11 in JS");
    }

    #[test]
    #[should_panic(expected = "month must be in 1..=12")]
    fn launch_date_rejects_month_zero() {
        let _ = LaunchDate::new(2025, 0, 1, 0);
    }
}
