//! Run axis: the ordered list of model-run reference times

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered, deduplicated model-run reference times
///
/// Positions are stable once constructed: index `i` always names the i-th
/// run in chronological order, so the 2-D index can store per-run data in
/// parallel vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeAxis {
    dates: Vec<DateTime<Utc>>,
}

impl RuntimeAxis {
    /// Build from any collection of run dates; sorts and deduplicates
    pub fn new<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let set: BTreeSet<DateTime<Utc>> = dates.into_iter().collect();
        RuntimeAxis {
            dates: set.into_iter().collect(),
        }
    }

    /// Number of runs
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// All run dates in chronological order
    pub fn dates(&self) -> &[DateTime<Utc>] {
        &self.dates
    }

    /// Reference time of the run at `index`
    pub fn date_at(&self, index: usize) -> Option<DateTime<Utc>> {
        self.dates.get(index).copied()
    }

    /// Position of `date` on the axis, `None` if it is not a run
    pub fn index_of(&self, date: &DateTime<Utc>) -> Option<usize> {
        self.dates.binary_search(date).ok()
    }

    /// Earliest run
    pub fn first_date(&self) -> Option<DateTime<Utc>> {
        self.dates.first().copied()
    }

    /// Latest run
    pub fn last_date(&self) -> Option<DateTime<Utc>> {
        self.dates.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.dates.iter().copied()
    }
}

/// Incremental collector for run dates
///
/// Accepts dates in any order, with repeats; `finish` yields the sorted,
/// deduplicated axis.
#[derive(Debug, Default)]
pub struct RuntimeAxisBuilder {
    dates: BTreeSet<DateTime<Utc>>,
}

impl RuntimeAxisBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one run reference time (repeats are fine)
    pub fn add(&mut self, date: DateTime<Utc>) {
        self.dates.insert(date);
    }

    /// Distinct dates collected so far
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Consume the builder and produce the axis
    pub fn finish(self) -> RuntimeAxis {
        RuntimeAxis {
            dates: self.dates.into_iter().collect(),
        }
    }
}
