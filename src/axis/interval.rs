//! Interval offset axis for accumulation-style products

use crate::unit::TimeUnit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Accumulation period in axis units past a run's reference time
///
/// `start` and `end` bound the period; `end - start` is the accumulation
/// length. Both may be negative for products anchored before the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetInterval {
    pub start: i64,
    pub end: i64,
}

impl OffsetInterval {
    pub fn new(start: i64, end: i64) -> Self {
        OffsetInterval { start, end }
    }

    /// Accumulation length in axis units
    pub fn length(&self) -> i64 {
        self.end - self.start
    }

    /// Both endpoints moved by `delta` units
    pub fn shifted(&self, delta: i64) -> Self {
        OffsetInterval {
            start: self.start + delta,
            end: self.end + delta,
        }
    }
}

// Ordered by end first: the accumulation that finishes later is the later
// coordinate, regardless of where it starts.
impl Ord for OffsetInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.end
            .cmp(&other.end)
            .then_with(|| self.start.cmp(&other.start))
    }
}

impl PartialOrd for OffsetInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OffsetInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.start, self.end)
    }
}

/// Summary of the accumulation lengths on an interval axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalLabel {
    /// Every interval has the same length
    Uniform { length: i64, unit: TimeUnit },
    /// Lengths differ; callers usually render this as "mixed intervals"
    Mixed,
}

impl fmt::Display for IntervalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalLabel::Uniform { length, unit } => write!(f, "{} {}", length, unit),
            IntervalLabel::Mixed => write!(f, "mixed intervals"),
        }
    }
}

/// Accumulation periods of one run, sorted and deduplicated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalAxis {
    ref_date: DateTime<Utc>,
    unit: TimeUnit,
    intervals: Vec<OffsetInterval>,
}

impl IntervalAxis {
    /// Build from any collection of intervals; sorts and deduplicates
    pub fn new<I>(ref_date: DateTime<Utc>, unit: TimeUnit, intervals: I) -> Self
    where
        I: IntoIterator<Item = OffsetInterval>,
    {
        let set: BTreeSet<OffsetInterval> = intervals.into_iter().collect();
        IntervalAxis {
            ref_date,
            unit,
            intervals: set.into_iter().collect(),
        }
    }

    /// Reference time the intervals count from
    pub fn ref_date(&self) -> DateTime<Utc> {
        self.ref_date
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// All intervals in (end, start) order
    pub fn intervals(&self) -> &[OffsetInterval] {
        &self.intervals
    }

    pub fn interval_at(&self, index: usize) -> Option<OffsetInterval> {
        self.intervals.get(index).copied()
    }

    /// Position of `interval` on the axis, `None` if absent
    pub fn index_of(&self, interval: OffsetInterval) -> Option<usize> {
        self.intervals.binary_search(&interval).ok()
    }

    /// The same intervals counted from a different reference time
    pub fn with_ref_date(&self, ref_date: DateTime<Utc>) -> Self {
        IntervalAxis {
            ref_date,
            unit: self.unit,
            intervals: self.intervals.clone(),
        }
    }

    /// Common accumulation length, or `Mixed`; `None` for an empty axis
    pub fn interval_label(&self) -> Option<IntervalLabel> {
        let first = self.intervals.first()?;
        let length = first.length();
        if self.intervals.iter().all(|iv| iv.length() == length) {
            Some(IntervalLabel::Uniform {
                length,
                unit: self.unit,
            })
        } else {
            Some(IntervalLabel::Mixed)
        }
    }

    /// Absolute time where the first interval opens
    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.intervals
            .first()
            .map(|iv| self.unit.offset_date(self.ref_date, iv.start))
    }

    /// Absolute time where the last interval closes
    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.intervals
            .last()
            .map(|iv| self.unit.offset_date(self.ref_date, iv.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 7, 1, h, 0, 0).unwrap()
    }

    fn iv(start: i64, end: i64) -> OffsetInterval {
        OffsetInterval::new(start, end)
    }

    #[test]
    fn test_interval_order_is_end_then_start() {
        assert!(iv(0, 6) < iv(0, 12));
        assert!(iv(0, 12) < iv(6, 12));
        assert!(iv(6, 12) < iv(0, 18));
        assert_eq!(iv(3, 9).cmp(&iv(3, 9)), Ordering::Equal);
    }

    #[test]
    fn test_interval_shift_and_length() {
        let moved = iv(0, 6).shifted(12);

        assert_eq!(moved, iv(12, 18));
        assert_eq!(moved.length(), 6);
        assert_eq!(iv(-6, 0).length(), 6);
    }

    #[test]
    fn test_interval_display() {
        assert_eq!(iv(0, 6).to_string(), "(0,6)");
        assert_eq!(iv(-12, 0).to_string(), "(-12,0)");
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let axis = IntervalAxis::new(
            date(0),
            TimeUnit::Hours,
            [iv(6, 12), iv(0, 6), iv(0, 12), iv(0, 6)],
        );

        assert_eq!(axis.len(), 3);
        assert_eq!(axis.intervals(), &[iv(0, 6), iv(0, 12), iv(6, 12)]);
    }

    #[test]
    fn test_lookup() {
        let axis = IntervalAxis::new(date(0), TimeUnit::Hours, [iv(0, 6), iv(6, 12)]);

        assert_eq!(axis.index_of(iv(6, 12)), Some(1));
        assert_eq!(axis.index_of(iv(0, 12)), None);
        assert_eq!(axis.interval_at(0), Some(iv(0, 6)));
        assert_eq!(axis.interval_at(2), None);
    }

    #[test]
    fn test_interval_label() {
        let uniform = IntervalAxis::new(date(0), TimeUnit::Hours, [iv(0, 6), iv(6, 12)]);
        assert_eq!(
            uniform.interval_label(),
            Some(IntervalLabel::Uniform {
                length: 6,
                unit: TimeUnit::Hours
            })
        );

        let mixed = IntervalAxis::new(date(0), TimeUnit::Hours, [iv(0, 6), iv(0, 12)]);
        assert_eq!(mixed.interval_label(), Some(IntervalLabel::Mixed));

        let empty = IntervalAxis::new(date(0), TimeUnit::Hours, []);
        assert_eq!(empty.interval_label(), None);
    }

    #[test]
    fn test_label_display() {
        let label = IntervalLabel::Uniform {
            length: 6,
            unit: TimeUnit::Hours,
        };
        assert_eq!(label.to_string(), "6 hours");
        assert_eq!(IntervalLabel::Mixed.to_string(), "mixed intervals");
    }

    #[test]
    fn test_start_end_dates() {
        let axis = IntervalAxis::new(date(6), TimeUnit::Hours, [iv(0, 6), iv(6, 12)]);

        assert_eq!(axis.start_date(), Some(date(6)));
        assert_eq!(axis.end_date(), Some(date(18)));
    }
}
