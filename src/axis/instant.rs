//! Instant offset axis for a single model run

use crate::unit::TimeUnit;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Forecast instants of one run, as whole units past its reference time
///
/// Offsets are sorted and deduplicated at construction, so position `i`
/// always names the i-th instant and lookups binary-search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantAxis {
    ref_date: DateTime<Utc>,
    unit: TimeUnit,
    offsets: Vec<i64>,
}

impl InstantAxis {
    /// Build from any collection of offsets; sorts and deduplicates
    pub fn new<I>(ref_date: DateTime<Utc>, unit: TimeUnit, offsets: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let set: BTreeSet<i64> = offsets.into_iter().collect();
        InstantAxis {
            ref_date,
            unit,
            offsets: set.into_iter().collect(),
        }
    }

    /// Reference time the offsets count from
    pub fn ref_date(&self) -> DateTime<Utc> {
        self.ref_date
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// All offsets in ascending order
    pub fn offsets(&self) -> &[i64] {
        &self.offsets
    }

    pub fn offset_at(&self, index: usize) -> Option<i64> {
        self.offsets.get(index).copied()
    }

    /// Position of `offset` on the axis, `None` if absent
    pub fn index_of(&self, offset: i64) -> Option<usize> {
        self.offsets.binary_search(&offset).ok()
    }

    /// The same offsets counted from a different reference time
    pub fn with_ref_date(&self, ref_date: DateTime<Utc>) -> Self {
        InstantAxis {
            ref_date,
            unit: self.unit,
            offsets: self.offsets.clone(),
        }
    }

    /// Absolute time of the earliest instant
    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.offsets
            .first()
            .map(|&off| self.unit.offset_date(self.ref_date, off))
    }

    /// Absolute time of the latest instant
    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.offsets
            .last()
            .map(|&off| self.unit.offset_date(self.ref_date, off))
    }
}
