//! Time units for forecast offsets
//!
//! Every offset axis expresses its values as integer multiples of one
//! [`TimeUnit`] relative to a run's reference time. The unit also supplies
//! the calendar arithmetic between two reference times that the 2-D index
//! needs when it aligns runs against each other.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit in which forecast offsets are counted
///
/// Fixed-length units (seconds through days) are exact multiples of a
/// second; months and years follow the calendar and clamp the day-of-month
/// when a target month is shorter (as `chrono::Months` defines it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl TimeUnit {
    /// Get all units for iteration
    pub fn all() -> &'static [TimeUnit] {
        &[
            TimeUnit::Seconds,
            TimeUnit::Minutes,
            TimeUnit::Hours,
            TimeUnit::Days,
            TimeUnit::Months,
            TimeUnit::Years,
        ]
    }

    /// Length in seconds for fixed units, `None` for calendar units
    fn fixed_seconds(&self) -> Option<i64> {
        match self {
            TimeUnit::Seconds => Some(1),
            TimeUnit::Minutes => Some(60),
            TimeUnit::Hours => Some(3600),
            TimeUnit::Days => Some(86_400),
            TimeUnit::Months | TimeUnit::Years => None,
        }
    }

    /// Signed count of whole units from `from` to `to`
    ///
    /// A partial trailing unit is truncated toward zero, so the result may
    /// lose precision when this unit is coarser than the spacing of the
    /// underlying dates. `offset_between(d, d)` is always 0.
    pub fn offset_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
        match self.fixed_seconds() {
            Some(secs) => (to - from).num_seconds() / secs,
            None => {
                let months = months_between(from, to);
                match self {
                    TimeUnit::Years => months / 12,
                    _ => months,
                }
            }
        }
    }

    /// `base` advanced by `n` of this unit (calendar-aware for months/years)
    pub fn offset_date(&self, base: DateTime<Utc>, n: i64) -> DateTime<Utc> {
        match self.fixed_seconds() {
            Some(secs) => base + Duration::seconds(n * secs),
            None => match self {
                TimeUnit::Months => add_months(base, n),
                _ => add_months(base, n * 12),
            },
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Seconds => write!(f, "seconds"),
            TimeUnit::Minutes => write!(f, "minutes"),
            TimeUnit::Hours => write!(f, "hours"),
            TimeUnit::Days => write!(f, "days"),
            TimeUnit::Months => write!(f, "months"),
            TimeUnit::Years => write!(f, "years"),
        }
    }
}

/// Move `base` by `n` calendar months, clamping the day-of-month
fn add_months(base: DateTime<Utc>, n: i64) -> DateTime<Utc> {
    if n >= 0 {
        base.checked_add_months(chrono::Months::new(n as u32))
            .expect("datetime out of range")
    } else {
        base.checked_sub_months(chrono::Months::new((-n) as u32))
            .expect("datetime out of range")
    }
}

/// Whole calendar months from `from` to `to`, truncated toward zero
fn months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let mut n = (to.year() as i64 - from.year() as i64) * 12
        + (to.month() as i64 - from.month() as i64);
    // The field difference lands in `to`'s month; back off one step if the
    // final month is only partially covered.
    if n > 0 && add_months(from, n) > to {
        n -= 1;
    } else if n < 0 && add_months(from, n) < to {
        n += 1;
    }
    n
}
