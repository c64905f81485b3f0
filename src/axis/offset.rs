//! Tagged offset axis
//!
//! An archive product either verifies at an instant or accumulates over an
//! interval; [`OffsetAxis`] carries one of the two per-run axes behind a
//! single type so the 2-D index never has to care which it holds. The kind
//! is fixed when a builder is created and checked on every insert.

use crate::axis::instant::InstantAxis;
use crate::axis::interval::{IntervalAxis, IntervalLabel, OffsetInterval};
use crate::error::{CoordError, CoordResult};
use crate::unit::TimeUnit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Which flavor of forecast offset an axis carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetKind {
    Instant,
    Interval,
}

impl fmt::Display for OffsetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetKind::Instant => write!(f, "instant"),
            OffsetKind::Interval => write!(f, "interval"),
        }
    }
}

/// One forecast offset, in the units of its axis
///
/// Kinds never mix inside one structure; the cross-kind ordering (instants
/// before intervals) exists only to keep the type totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetValue {
    Instant(i64),
    Interval(OffsetInterval),
}

impl OffsetValue {
    pub fn kind(&self) -> OffsetKind {
        match self {
            OffsetValue::Instant(_) => OffsetKind::Instant,
            OffsetValue::Interval(_) => OffsetKind::Interval,
        }
    }

    /// The value moved by `delta` units (both endpoints for an interval)
    pub fn shifted(&self, delta: i64) -> Self {
        match self {
            OffsetValue::Instant(off) => OffsetValue::Instant(off + delta),
            OffsetValue::Interval(iv) => OffsetValue::Interval(iv.shifted(delta)),
        }
    }
}

impl fmt::Display for OffsetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetValue::Instant(off) => write!(f, "{}", off),
            OffsetValue::Interval(iv) => write!(f, "{}", iv),
        }
    }
}

/// Offset axis of a single run: instants or intervals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetAxis {
    Instant(InstantAxis),
    Interval(IntervalAxis),
}

impl OffsetAxis {
    pub fn kind(&self) -> OffsetKind {
        match self {
            OffsetAxis::Instant(_) => OffsetKind::Instant,
            OffsetAxis::Interval(_) => OffsetKind::Interval,
        }
    }

    pub fn unit(&self) -> TimeUnit {
        match self {
            OffsetAxis::Instant(axis) => axis.unit(),
            OffsetAxis::Interval(axis) => axis.unit(),
        }
    }

    /// Reference time the offsets count from
    pub fn ref_date(&self) -> DateTime<Utc> {
        match self {
            OffsetAxis::Instant(axis) => axis.ref_date(),
            OffsetAxis::Interval(axis) => axis.ref_date(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OffsetAxis::Instant(axis) => axis.len(),
            OffsetAxis::Interval(axis) => axis.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All offsets in axis order
    pub fn values(&self) -> Vec<OffsetValue> {
        match self {
            OffsetAxis::Instant(axis) => axis
                .offsets()
                .iter()
                .map(|&off| OffsetValue::Instant(off))
                .collect(),
            OffsetAxis::Interval(axis) => axis
                .intervals()
                .iter()
                .map(|&iv| OffsetValue::Interval(iv))
                .collect(),
        }
    }

    pub fn value_at(&self, index: usize) -> Option<OffsetValue> {
        match self {
            OffsetAxis::Instant(axis) => axis.offset_at(index).map(OffsetValue::Instant),
            OffsetAxis::Interval(axis) => axis.interval_at(index).map(OffsetValue::Interval),
        }
    }

    /// Position of `value` on the axis
    ///
    /// A value of the other kind is simply not on the axis: `None`.
    pub fn index_of(&self, value: &OffsetValue) -> Option<usize> {
        match (self, value) {
            (OffsetAxis::Instant(axis), OffsetValue::Instant(off)) => axis.index_of(*off),
            (OffsetAxis::Interval(axis), OffsetValue::Interval(iv)) => axis.index_of(*iv),
            _ => None,
        }
    }

    /// The same offsets counted from a different reference time
    pub fn with_ref_date(&self, ref_date: DateTime<Utc>) -> Self {
        match self {
            OffsetAxis::Instant(axis) => OffsetAxis::Instant(axis.with_ref_date(ref_date)),
            OffsetAxis::Interval(axis) => OffsetAxis::Interval(axis.with_ref_date(ref_date)),
        }
    }

    /// Accumulation-length summary; `None` for instant axes and empty axes
    pub fn interval_label(&self) -> Option<IntervalLabel> {
        match self {
            OffsetAxis::Instant(_) => None,
            OffsetAxis::Interval(axis) => axis.interval_label(),
        }
    }

    /// Absolute time where the axis begins
    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        match self {
            OffsetAxis::Instant(axis) => axis.start_date(),
            OffsetAxis::Interval(axis) => axis.start_date(),
        }
    }

    /// Absolute time where the axis ends
    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        match self {
            OffsetAxis::Instant(axis) => axis.end_date(),
            OffsetAxis::Interval(axis) => axis.end_date(),
        }
    }
}

enum ValueSet {
    Instant(BTreeSet<i64>),
    Interval(BTreeSet<OffsetInterval>),
}

/// Incremental collector for one run's offsets
///
/// Kind, unit and reference time are fixed at creation; inserts of the
/// wrong kind are rejected. Values deduplicate as they arrive.
pub struct OffsetAxisBuilder {
    unit: TimeUnit,
    ref_date: DateTime<Utc>,
    values: ValueSet,
}

impl OffsetAxisBuilder {
    pub fn new(kind: OffsetKind, unit: TimeUnit, ref_date: DateTime<Utc>) -> Self {
        let values = match kind {
            OffsetKind::Instant => ValueSet::Instant(BTreeSet::new()),
            OffsetKind::Interval => ValueSet::Interval(BTreeSet::new()),
        };
        OffsetAxisBuilder {
            unit,
            ref_date,
            values,
        }
    }

    pub fn kind(&self) -> OffsetKind {
        match &self.values {
            ValueSet::Instant(_) => OffsetKind::Instant,
            ValueSet::Interval(_) => OffsetKind::Interval,
        }
    }

    pub fn ref_date(&self) -> DateTime<Utc> {
        self.ref_date
    }

    /// Record one offset (repeats are fine)
    pub fn add(&mut self, value: OffsetValue) -> CoordResult<()> {
        match (&mut self.values, value) {
            (ValueSet::Instant(set), OffsetValue::Instant(off)) => {
                set.insert(off);
                Ok(())
            }
            (ValueSet::Interval(set), OffsetValue::Interval(iv)) => {
                set.insert(iv);
                Ok(())
            }
            (ValueSet::Instant(_), found) => Err(CoordError::KindMismatch {
                expected: OffsetKind::Instant,
                found: found.kind(),
            }),
            (ValueSet::Interval(_), found) => Err(CoordError::KindMismatch {
                expected: OffsetKind::Interval,
                found: found.kind(),
            }),
        }
    }

    /// Distinct offsets collected so far
    pub fn len(&self) -> usize {
        match &self.values {
            ValueSet::Instant(set) => set.len(),
            ValueSet::Interval(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the builder and produce the axis
    pub fn finish(self) -> OffsetAxis {
        match self.values {
            ValueSet::Instant(set) => {
                OffsetAxis::Instant(InstantAxis::new(self.ref_date, self.unit, set))
            }
            ValueSet::Interval(set) => {
                OffsetAxis::Interval(IntervalAxis::new(self.ref_date, self.unit, set))
            }
        }
    }
}
