//! The finished two-dimensional index
//!
//! A [`Time2DIndex`] is immutable: the builder (or a classification pass)
//! produces it fully formed, and every operation afterwards is a read. The
//! per-run offset axes live behind one of three [`Layout`]s; resolution
//! through [`Time2DIndex::axis_for_run`] hides which one.

use crate::axis::{IntervalLabel, OffsetAxis, OffsetKind, OffsetValue, RuntimeAxis};
use crate::error::{CoordError, CoordResult};
use crate::record::TimeExtractor;
use crate::time2d::Time2D;
use crate::unit::TimeUnit;
use chrono::{DateTime, Timelike, Utc};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// How the per-run offset axes are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// One independent axis per run, parallel to the run axis
    General { per_run: Vec<OffsetAxis> },
    /// Every run shares the same offsets; one axis, re-anchored on resolution
    Orthogonal { shared: OffsetAxis },
    /// Offsets depend only on the run's hour-of-day (UTC)
    Regular { by_hour: BTreeMap<u32, OffsetAxis> },
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::General { .. } => "general",
            Layout::Orthogonal { .. } => "orthogonal",
            Layout::Regular { .. } => "regular",
        }
    }

    /// All axes the layout stores, in a stable order
    pub fn axes(&self) -> Box<dyn Iterator<Item = &OffsetAxis> + '_> {
        match self {
            Layout::General { per_run } => Box::new(per_run.iter()),
            Layout::Orthogonal { shared } => Box::new(std::iter::once(shared)),
            Layout::Regular { by_hour } => Box::new(by_hour.values()),
        }
    }
}

/// Two-dimensional (run x forecast offset) time index
///
/// Holds the run axis, the offset axes in one of the three layouts, the
/// precomputed unit offset of every run from the first run, and (while the
/// structure is freshly built) the sorted list of distinct coordinate keys.
/// Immutable after construction; shared freely across readers.
#[derive(Debug, Clone)]
pub struct Time2DIndex {
    runs: RuntimeAxis,
    layout: Layout,
    kind: OffsetKind,
    unit: TimeUnit,
    run_offset: Vec<i64>,
    max_offset_count: usize,
    values: Option<Vec<Time2D>>,
}

impl Time2DIndex {
    /// Build a general-layout structure: one offset axis per run
    ///
    /// `per_run` must be parallel to `runs`, each axis anchored at its run's
    /// reference time and carrying the structure's kind and unit.
    pub fn general(
        runs: RuntimeAxis,
        kind: OffsetKind,
        unit: TimeUnit,
        per_run: Vec<OffsetAxis>,
        values: Option<Vec<Time2D>>,
    ) -> CoordResult<Self> {
        if per_run.len() != runs.len() {
            return Err(CoordError::AxisCountMismatch {
                axes: per_run.len(),
                runs: runs.len(),
            });
        }
        Self::build(runs, kind, unit, Layout::General { per_run }, values)
    }

    /// Build an orthogonal structure: every run shares `shared`'s offsets
    pub fn orthogonal(
        runs: RuntimeAxis,
        kind: OffsetKind,
        unit: TimeUnit,
        shared: OffsetAxis,
        values: Option<Vec<Time2D>>,
    ) -> CoordResult<Self> {
        Self::build(runs, kind, unit, Layout::Orthogonal { shared }, values)
    }

    /// Build a regular structure: one axis per run hour-of-day
    ///
    /// Every run's hour must have a bucket in `by_hour`; an uncovered hour
    /// is rejected here rather than surfacing later during resolution.
    pub fn regular(
        runs: RuntimeAxis,
        kind: OffsetKind,
        unit: TimeUnit,
        by_hour: BTreeMap<u32, OffsetAxis>,
        values: Option<Vec<Time2D>>,
    ) -> CoordResult<Self> {
        for date in runs.iter() {
            let hour = date.hour();
            if !by_hour.contains_key(&hour) {
                return Err(CoordError::NoAxisForHour { hour });
            }
        }
        Self::build(runs, kind, unit, Layout::Regular { by_hour }, values)
    }

    fn build(
        runs: RuntimeAxis,
        kind: OffsetKind,
        unit: TimeUnit,
        layout: Layout,
        values: Option<Vec<Time2D>>,
    ) -> CoordResult<Self> {
        for axis in layout.axes() {
            if axis.kind() != kind {
                return Err(CoordError::KindMismatch {
                    expected: kind,
                    found: axis.kind(),
                });
            }
            if axis.unit() != unit {
                return Err(CoordError::UnitMismatch {
                    expected: unit,
                    found: axis.unit(),
                });
            }
        }

        let run_offset = match runs.first_date() {
            Some(first) => runs.iter().map(|d| unit.offset_between(first, d)).collect(),
            None => Vec::new(),
        };
        let max_offset_count = layout.axes().map(|a| a.len()).max().unwrap_or(0);
        let values = values.map(|mut v| {
            v.sort();
            v.dedup();
            v
        });

        Ok(Time2DIndex {
            runs,
            layout,
            kind,
            unit,
            run_offset,
            max_offset_count,
            values,
        })
    }

    /// Number of runs
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Length of the longest per-run axis (the time dimension size)
    pub fn max_offset_count(&self) -> usize {
        self.max_offset_count
    }

    pub fn kind(&self) -> OffsetKind {
        self.kind
    }

    pub fn is_interval(&self) -> bool {
        self.kind == OffsetKind::Interval
    }

    pub fn is_orthogonal(&self) -> bool {
        matches!(self.layout, Layout::Orthogonal { .. })
    }

    pub fn is_regular(&self) -> bool {
        matches!(self.layout, Layout::Regular { .. })
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn runs(&self) -> &RuntimeAxis {
        &self.runs
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Reference time of the run at `run_idx`
    pub fn ref_date(&self, run_idx: usize) -> CoordResult<DateTime<Utc>> {
        self.runs
            .date_at(run_idx)
            .ok_or(CoordError::IndexOutOfRange {
                index: run_idx,
                len: self.runs.len(),
            })
    }

    /// Unit offset of the run at `run_idx` from the first run
    pub fn run_offset(&self, run_idx: usize) -> CoordResult<i64> {
        self.run_offset
            .get(run_idx)
            .copied()
            .ok_or(CoordError::IndexOutOfRange {
                index: run_idx,
                len: self.run_offset.len(),
            })
    }

    /// Unit offsets of every run from the first run (`[0] == 0`)
    pub fn run_offsets(&self) -> &[i64] {
        &self.run_offset
    }

    /// The offset axis of one run, anchored at that run's reference time
    ///
    /// General and regular layouts lend their stored axis (a regular bucket
    /// stays anchored at its hour group's first run; positions are unaffected).
    /// Orthogonal re-anchors the shared axis, so the return is owned.
    pub fn axis_for_run(&self, run_idx: usize) -> CoordResult<Cow<'_, OffsetAxis>> {
        let run_date = self.ref_date(run_idx)?;
        match &self.layout {
            Layout::General { per_run } => Ok(Cow::Borrowed(&per_run[run_idx])),
            Layout::Orthogonal { shared } => Ok(Cow::Owned(shared.with_ref_date(run_date))),
            Layout::Regular { by_hour } => {
                let hour = run_date.hour();
                by_hour
                    .get(&hour)
                    .map(Cow::Borrowed)
                    .ok_or(CoordError::NoAxisForHour { hour })
            }
        }
    }

    /// Stored axis for a run, without re-anchoring (positions only)
    fn axis_ref(&self, run_idx: usize) -> Option<&OffsetAxis> {
        match &self.layout {
            Layout::General { per_run } => per_run.get(run_idx),
            Layout::Orthogonal { shared } => {
                if run_idx < self.runs.len() {
                    Some(shared)
                } else {
                    None
                }
            }
            Layout::Regular { by_hour } => {
                let date = self.runs.date_at(run_idx)?;
                by_hour.get(&date.hour())
            }
        }
    }

    /// Resolve a coordinate key to (run position, offset position)
    ///
    /// Each component is independently `None` on a miss; an unknown run
    /// means the offset cannot be resolved either.
    pub fn locate(&self, key: &Time2D) -> (Option<usize>, Option<usize>) {
        let run_idx = match self.runs.index_of(&key.run) {
            Some(idx) => idx,
            None => return (None, None),
        };
        let offset_idx = self
            .axis_ref(run_idx)
            .and_then(|axis| axis.index_of(&key.value));
        (Some(run_idx), offset_idx)
    }

    /// Extract a record's key and resolve it, in one step
    ///
    /// Uses the same extractor the builder used, so a record that was fed
    /// in always resolves to the position it was indexed under.
    pub fn locate_record<R, X>(&self, extractor: &X, record: &R) -> (Option<usize>, Option<usize>)
    where
        X: TimeExtractor<R>,
    {
        self.locate(&extractor.time_of(record))
    }

    /// Find an offset expressed relative to a different reference time
    ///
    /// The value is shifted by the whole-unit distance from the run's
    /// reference time to `value_ref_date`, then looked up on the run's
    /// axis. `Ok(None)` when the rewritten value is not on the axis.
    pub fn match_offset(
        &self,
        run_idx: usize,
        value: &OffsetValue,
        value_ref_date: DateTime<Utc>,
    ) -> CoordResult<Option<usize>> {
        let run_date = self.ref_date(run_idx)?;
        let delta = self.unit.offset_between(run_date, value_ref_date);
        let shifted = value.shifted(delta);
        tracing::trace!(
            run = %run_date,
            value = %value,
            delta,
            shifted = %shifted,
            "Rewrote offset to run-relative terms"
        );
        Ok(self
            .axis_ref(run_idx)
            .and_then(|axis| axis.index_of(&shifted)))
    }

    /// Absolute time span covered, from the first run's earliest offset to
    /// the last run's latest; `None` for an empty structure
    pub fn covered_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let run_count = self.runs.len();
        if run_count == 0 {
            return None;
        }
        let first_date = self.runs.date_at(0)?;
        let last_date = self.runs.date_at(run_count - 1)?;
        let start = self.axis_ref(0)?.with_ref_date(first_date).start_date()?;
        let end = self
            .axis_ref(run_count - 1)?
            .with_ref_date(last_date)
            .end_date()?;
        Some((start, end))
    }

    /// Deduplicated sorted union of every axis's offsets, run-relative
    pub fn offsets_sorted(&self) -> Vec<OffsetValue> {
        let mut set = BTreeSet::new();
        for axis in self.layout.axes() {
            set.extend(axis.values());
        }
        set.into_iter().collect()
    }

    /// Accumulation-length summary across all axes
    ///
    /// `None` for instant-typed structures (and when every axis is empty);
    /// `Mixed` as soon as any axis mixes lengths or two axes disagree.
    pub fn interval_label(&self) -> Option<IntervalLabel> {
        if self.kind != OffsetKind::Interval {
            return None;
        }
        let mut common: Option<IntervalLabel> = None;
        for axis in self.layout.axes() {
            let label = match axis.interval_label() {
                Some(label) => label,
                None => continue,
            };
            if label == IntervalLabel::Mixed {
                return Some(IntervalLabel::Mixed);
            }
            match common {
                None => common = Some(label),
                Some(prev) if prev != label => return Some(IntervalLabel::Mixed),
                Some(_) => {}
            }
        }
        common
    }

    /// The sorted distinct coordinate keys, if still materialized
    pub fn values(&self) -> Option<&[Time2D]> {
        self.values.as_deref()
    }

    /// Number of materialized keys (0 once stripped)
    pub fn value_count(&self) -> usize {
        self.values.as_ref().map_or(0, |v| v.len())
    }

    pub fn value_at(&self, index: usize) -> Option<Time2D> {
        self.values.as_ref()?.get(index).copied()
    }

    /// Position of `key` in the materialized key list
    pub fn index_of_value(&self, key: &Time2D) -> Option<usize> {
        self.values.as_ref()?.binary_search(key).ok()
    }

    /// Drop the materialized keys, as a persisted-then-reloaded structure
    /// would arrive; axes and lookups are unaffected
    pub fn strip_values(mut self) -> Self {
        self.values = None;
        self
    }

    /// Rough heap footprint for capacity planning
    pub fn estimated_size_bytes(&self) -> usize {
        // struct overhead + per-run date and offset + per-position key
        864 + self.runs.len() * 52 + self.max_offset_count * 24
    }
}

// Structural identity is the runs, kind, unit and layout; the materialized
// keys are a construction-time convenience, so a structure equals its
// reloaded (stripped) self.
impl PartialEq for Time2DIndex {
    fn eq(&self, other: &Self) -> bool {
        self.runs == other.runs
            && self.kind == other.kind
            && self.unit == other.unit
            && self.layout == other.layout
    }
}

impl Eq for Time2DIndex {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{InstantAxis, IntervalAxis, OffsetInterval};
    use chrono::TimeZone;

    fn run(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 7, 1, h, 0, 0).unwrap()
    }

    fn instant_axis(h: u32, offsets: &[i64]) -> OffsetAxis {
        OffsetAxis::Instant(InstantAxis::new(
            run(h),
            TimeUnit::Hours,
            offsets.iter().copied(),
        ))
    }

    fn interval_axis(h: u32, intervals: &[(i64, i64)]) -> OffsetAxis {
        OffsetAxis::Interval(IntervalAxis::new(
            run(h),
            TimeUnit::Hours,
            intervals.iter().map(|&(s, e)| OffsetInterval::new(s, e)),
        ))
    }

    /// Three runs six hours apart, each reaching fewer hours ahead
    fn shrinking_general() -> Time2DIndex {
        let runs = RuntimeAxis::new([run(0), run(6), run(12)]);
        let per_run = vec![
            instant_axis(0, &[0, 6, 12]),
            instant_axis(6, &[0, 6]),
            instant_axis(12, &[0]),
        ];
        let mut values = Vec::new();
        for (h, offsets) in [(0u32, vec![0i64, 6, 12]), (6, vec![0, 6]), (12, vec![0])] {
            for off in offsets {
                values.push(Time2D::instant(run(h), off));
            }
        }
        Time2DIndex::general(
            runs,
            OffsetKind::Instant,
            TimeUnit::Hours,
            per_run,
            Some(values),
        )
        .unwrap()
    }

    #[test]
    fn test_general_construction() {
        let index = shrinking_general();

        assert_eq!(index.run_count(), 3);
        assert_eq!(index.max_offset_count(), 3);
        assert_eq!(index.run_offsets(), &[0, 6, 12]);
        assert_eq!(index.kind(), OffsetKind::Instant);
        assert_eq!(index.unit(), TimeUnit::Hours);
        assert!(!index.is_interval());
        assert!(!index.is_orthogonal());
        assert!(!index.is_regular());
        assert_eq!(index.layout().name(), "general");
        assert_eq!(index.value_count(), 6);
    }

    #[test]
    fn test_axis_count_mismatch() {
        let runs = RuntimeAxis::new([run(0), run(6)]);
        let err = Time2DIndex::general(
            runs,
            OffsetKind::Instant,
            TimeUnit::Hours,
            vec![instant_axis(0, &[0])],
            None,
        )
        .unwrap_err();

        assert_eq!(err, CoordError::AxisCountMismatch { axes: 1, runs: 2 });
    }

    #[test]
    fn test_kind_and_unit_mismatch() {
        let runs = RuntimeAxis::new([run(0)]);
        let err = Time2DIndex::general(
            runs.clone(),
            OffsetKind::Interval,
            TimeUnit::Hours,
            vec![instant_axis(0, &[0])],
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CoordError::KindMismatch {
                expected: OffsetKind::Interval,
                found: OffsetKind::Instant,
            }
        );

        let wrong_unit = OffsetAxis::Instant(InstantAxis::new(run(0), TimeUnit::Days, [0]));
        let err = Time2DIndex::general(
            runs,
            OffsetKind::Instant,
            TimeUnit::Hours,
            vec![wrong_unit],
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CoordError::UnitMismatch {
                expected: TimeUnit::Hours,
                found: TimeUnit::Days,
            }
        );
    }

    #[test]
    fn test_regular_rejects_uncovered_hour() {
        let runs = RuntimeAxis::new([run(0), run(6)]);
        let mut by_hour = BTreeMap::new();
        by_hour.insert(0u32, instant_axis(0, &[0, 6]));

        let err = Time2DIndex::regular(runs, OffsetKind::Instant, TimeUnit::Hours, by_hour, None)
            .unwrap_err();
        assert_eq!(err, CoordError::NoAxisForHour { hour: 6 });
    }

    #[test]
    fn test_index_bounds() {
        let index = shrinking_general();

        assert_eq!(index.ref_date(1).unwrap(), run(6));
        assert_eq!(index.run_offset(2).unwrap(), 12);
        assert_eq!(
            index.ref_date(3).unwrap_err(),
            CoordError::IndexOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(
            index.run_offset(9).unwrap_err(),
            CoordError::IndexOutOfRange { index: 9, len: 3 }
        );
    }

    #[test]
    fn test_axis_for_run_general() {
        let index = shrinking_general();
        let axis = index.axis_for_run(1).unwrap();

        assert!(matches!(axis, Cow::Borrowed(_)));
        assert_eq!(axis.ref_date(), run(6));
        assert_eq!(
            axis.values(),
            vec![OffsetValue::Instant(0), OffsetValue::Instant(6)]
        );
    }

    #[test]
    fn test_axis_for_run_orthogonal_reanchors() {
        let runs = RuntimeAxis::new([run(0), run(6), run(12)]);
        let index = Time2DIndex::orthogonal(
            runs,
            OffsetKind::Instant,
            TimeUnit::Hours,
            instant_axis(0, &[0, 6]),
            None,
        )
        .unwrap();

        let axis = index.axis_for_run(2).unwrap();
        assert!(matches!(axis, Cow::Owned(_)));
        assert_eq!(axis.ref_date(), run(12));
        assert_eq!(
            axis.values(),
            vec![OffsetValue::Instant(0), OffsetValue::Instant(6)]
        );
        assert_eq!(index.max_offset_count(), 2);
        assert!(index.is_orthogonal());
    }

    #[test]
    fn test_axis_for_run_regular_bucket() {
        let runs = RuntimeAxis::new([run(0), run(6), run(12), run(18)]);
        let mut by_hour = BTreeMap::new();
        by_hour.insert(0u32, instant_axis(0, &[0, 6, 12]));
        by_hour.insert(6u32, instant_axis(6, &[0, 6]));
        by_hour.insert(12u32, instant_axis(12, &[0, 6, 12]));
        by_hour.insert(18u32, instant_axis(18, &[0, 6]));
        let index =
            Time2DIndex::regular(runs, OffsetKind::Instant, TimeUnit::Hours, by_hour, None)
                .unwrap();

        assert!(index.is_regular());
        let axis = index.axis_for_run(3).unwrap();
        assert_eq!(
            axis.values(),
            vec![OffsetValue::Instant(0), OffsetValue::Instant(6)]
        );
    }

    #[test]
    fn test_locate_round_trip() {
        let index = shrinking_general();
        let values: Vec<Time2D> = index.values().unwrap().to_vec();

        for key in values {
            let (run_idx, offset_idx) = index.locate(&key);
            let run_idx = run_idx.unwrap();
            let offset_idx = offset_idx.unwrap();

            assert_eq!(index.ref_date(run_idx).unwrap(), key.run);
            let axis = index.axis_for_run(run_idx).unwrap();
            assert_eq!(axis.value_at(offset_idx), Some(key.value));
        }
    }

    #[test]
    fn test_locate_misses() {
        let index = shrinking_general();

        // Unknown run: nothing resolves
        assert_eq!(index.locate(&Time2D::instant(run(3), 0)), (None, None));
        // Known run, offset not on that run's axis
        assert_eq!(
            index.locate(&Time2D::instant(run(12), 6)),
            (Some(2), None)
        );
        // Wrong kind is just a miss
        assert_eq!(
            index.locate(&Time2D::interval(run(0), 0, 6)),
            (Some(0), None)
        );
    }

    #[test]
    fn test_match_offset_shifts_reference() {
        let index = shrinking_general();

        // Offset 6 relative to the 06Z run is absolute hour 12, which run 0
        // stores as offset 12.
        let found = index
            .match_offset(0, &OffsetValue::Instant(6), run(6))
            .unwrap();
        assert_eq!(found, Some(2));

        // Same reference time: plain lookup
        let found = index
            .match_offset(1, &OffsetValue::Instant(6), run(6))
            .unwrap();
        assert_eq!(found, Some(1));

        // Shifted off the axis
        let found = index
            .match_offset(2, &OffsetValue::Instant(6), run(6))
            .unwrap();
        assert_eq!(found, None);

        let err = index
            .match_offset(5, &OffsetValue::Instant(0), run(0))
            .unwrap_err();
        assert_eq!(err, CoordError::IndexOutOfRange { index: 5, len: 3 });
    }

    #[test]
    fn test_covered_range() {
        let index = shrinking_general();
        // First run starts at 00Z+0; last run's only offset is 12Z+0.
        assert_eq!(index.covered_range(), Some((run(0), run(12))));

        let runs = RuntimeAxis::new([run(0), run(12)]);
        let ortho = Time2DIndex::orthogonal(
            runs,
            OffsetKind::Instant,
            TimeUnit::Hours,
            instant_axis(0, &[0, 6]),
            None,
        )
        .unwrap();
        assert_eq!(ortho.covered_range(), Some((run(0), run(18))));
    }

    #[test]
    fn test_offsets_sorted() {
        let index = shrinking_general();
        assert_eq!(
            index.offsets_sorted(),
            vec![
                OffsetValue::Instant(0),
                OffsetValue::Instant(6),
                OffsetValue::Instant(12)
            ]
        );
    }

    #[test]
    fn test_interval_label_across_axes() {
        let runs = RuntimeAxis::new([run(0), run(6)]);
        let uniform = Time2DIndex::general(
            runs.clone(),
            OffsetKind::Interval,
            TimeUnit::Hours,
            vec![
                interval_axis(0, &[(0, 6), (6, 12)]),
                interval_axis(6, &[(0, 6)]),
            ],
            None,
        )
        .unwrap();
        assert_eq!(
            uniform.interval_label(),
            Some(IntervalLabel::Uniform {
                length: 6,
                unit: TimeUnit::Hours
            })
        );

        // One axis accumulates over a different length
        let mixed = Time2DIndex::general(
            runs,
            OffsetKind::Interval,
            TimeUnit::Hours,
            vec![
                interval_axis(0, &[(0, 6), (6, 12)]),
                interval_axis(6, &[(0, 12)]),
            ],
            None,
        )
        .unwrap();
        assert_eq!(mixed.interval_label(), Some(IntervalLabel::Mixed));

        // Instant structures have no accumulation lengths
        assert_eq!(shrinking_general().interval_label(), None);
    }

    #[test]
    fn test_values_api() {
        let index = shrinking_general();
        let key = Time2D::instant(run(6), 6);

        assert_eq!(index.value_count(), 6);
        let pos = index.index_of_value(&key).unwrap();
        assert_eq!(index.value_at(pos), Some(key));
        assert_eq!(index.index_of_value(&Time2D::instant(run(6), 9)), None);

        let stripped = index.clone().strip_values();
        assert_eq!(stripped.value_count(), 0);
        assert_eq!(stripped.values(), None);
        assert_eq!(stripped.index_of_value(&key), None);
        // Lookups still work without materialized keys
        assert_eq!(stripped.locate(&key), (Some(1), Some(1)));
    }

    #[test]
    fn test_equality_ignores_values() {
        let index = shrinking_general();
        let stripped = index.clone().strip_values();

        assert_eq!(index, stripped);
    }

    #[test]
    fn test_values_sorted_and_deduped_at_construction() {
        let runs = RuntimeAxis::new([run(0)]);
        let values = vec![
            Time2D::instant(run(0), 6),
            Time2D::instant(run(0), 0),
            Time2D::instant(run(0), 6),
        ];
        let index = Time2DIndex::general(
            runs,
            OffsetKind::Instant,
            TimeUnit::Hours,
            vec![instant_axis(0, &[0, 6])],
            Some(values),
        )
        .unwrap();

        assert_eq!(
            index.values().unwrap(),
            &[Time2D::instant(run(0), 0), Time2D::instant(run(0), 6)]
        );
    }

    #[test]
    fn test_empty_structure() {
        let index = Time2DIndex::general(
            RuntimeAxis::default(),
            OffsetKind::Instant,
            TimeUnit::Hours,
            Vec::new(),
            Some(Vec::new()),
        )
        .unwrap();

        assert_eq!(index.run_count(), 0);
        assert_eq!(index.max_offset_count(), 0);
        assert_eq!(index.run_offsets(), &[] as &[i64]);
        assert_eq!(index.covered_range(), None);
        assert!(index.offsets_sorted().is_empty());
        assert_eq!(index.locate(&Time2D::instant(run(0), 0)), (None, None));
        assert!(index.axis_for_run(0).is_err());
    }

    #[test]
    fn test_estimated_size() {
        let index = shrinking_general();
        assert_eq!(index.estimated_size_bytes(), 864 + 3 * 52 + 3 * 24);
    }
}
