//! Temporal values.
//!
//! A [`Timestamp`] is an instant in UTC with millisecond precision, stored as
//! the signed number of milliseconds since the Unix epoch. Calendar
//! conversions use the proleptic Gregorian calendar.
//!
//! # Example
//!
//! ```
//! use arrkit_values::Timestamp;
//!
//! let christmas = Timestamp::from_ymd_hms_milli(2024, 12, 25, 14, 30, 0, 0).unwrap();
//! assert_eq!(christmas.as_millis(), 1_735_137_000_000);
//! assert_eq!(christmas.to_iso8601(), "2024-12-25T14:30:00.000Z");
//! ```

use alloc::{format, string::String};
use core::fmt;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// An instant in time, in milliseconds since `1970-01-01T00:00:00.000Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    millis: i64,
}

impl Timestamp {
    /// `1970-01-01T00:00:00.000Z`
    pub const UNIX_EPOCH: Timestamp = Timestamp { millis: 0 };

    /// Create a timestamp from milliseconds since the Unix epoch.
    pub const fn from_millis(millis: i64) -> Self {
        Timestamp { millis }
    }

    /// Milliseconds since the Unix epoch (negative before 1970).
    pub const fn as_millis(&self) -> i64 {
        self.millis
    }

    /// The current system time.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_millis() as i64,
            Err(before) => -(before.duration().as_millis() as i64),
        };
        Timestamp { millis }
    }

    /// Build a timestamp from UTC calendar fields.
    ///
    /// Returns `None` if any field is out of range (e.g. February 30th or
    /// hour 24), or if the instant does not fit in an `i64` of milliseconds.
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        milli: u16,
    ) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year as i64, month) {
            return None;
        }
        if hour > 23 || minute > 59 || second > 59 || milli > 999 {
            return None;
        }

        let days = days_from_civil(year as i64, month as i64, day as i64);
        let time_of_day = hour as i64 * MILLIS_PER_HOUR
            + minute as i64 * MILLIS_PER_MINUTE
            + second as i64 * MILLIS_PER_SECOND
            + milli as i64;
        let millis = days.checked_mul(MILLIS_PER_DAY)?.checked_add(time_of_day)?;
        Some(Timestamp { millis })
    }

    /// Format as an ISO-8601 UTC string: `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    ///
    /// Years outside `0..=9999` use the expanded six-digit signed form
    /// (`+012345-...`).
    pub fn to_iso8601(&self) -> String {
        let days = self.millis.div_euclid(MILLIS_PER_DAY);
        let rem = self.millis.rem_euclid(MILLIS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        let hour = rem / MILLIS_PER_HOUR;
        let minute = (rem % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
        let second = (rem % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
        let milli = rem % MILLIS_PER_SECOND;

        let year = if (0..=9999).contains(&year) {
            format!("{:04}", year)
        } else {
            format!("{:+07}", year)
        };
        format!(
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year, month, day, hour, minute, second, milli
        )
    }

    /// Format the way JavaScript's `Date.prototype.toUTCString` does:
    /// `Wed, 25 Dec 2024 14:30:00 GMT`.
    pub fn to_utc_string(&self) -> String {
        const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        let days = self.millis.div_euclid(MILLIS_PER_DAY);
        let rem = self.millis.rem_euclid(MILLIS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        // 1970-01-01 was a Thursday.
        let weekday = (days + 4).rem_euclid(7) as usize;

        format!(
            "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
            WEEKDAYS[weekday],
            day,
            MONTHS[(month - 1) as usize],
            year,
            rem / MILLIS_PER_HOUR,
            (rem % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            (rem % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
        )
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i64, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// Eras are 400-year cycles starting March 1st, so leap days fall at the end
// of each shifted year.

/// Days since the Unix epoch for a civil date.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = if year >= 0 { year } else { year - 399 } / 400;
    let yoe = year - era * 400;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let doy = (153 * shifted_month + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date `(year, month, day)` for days since the Unix epoch.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let shifted_month = (5 * doy + 2) / 153;
    let day = doy - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = yoe + era * 400;
    (if month <= 2 { year + 1 } else { year }, month, day)
}
