//! Incremental construction from archive records
//!
//! One builder serves every record type: the archive hands it a
//! [`TimeExtractor`] for its records, and the builder only ever sees the
//! extracted [`Time2D`] keys. Every sink deduplicates, so feeding the same
//! record twice (or replaying a whole structure) changes nothing.

use crate::axis::{OffsetAxis, OffsetAxisBuilder, OffsetKind, RuntimeAxisBuilder};
use crate::error::{CoordError, CoordResult};
use crate::record::TimeExtractor;
use crate::time2d::index::Time2DIndex;
use crate::time2d::Time2D;
use crate::unit::TimeUnit;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;

/// Builds a [`Time2DIndex`] one record at a time
///
/// Kind and unit are fixed at creation; a record of the wrong kind is
/// rejected when it is added. `finish` always yields a general-layout
/// structure; compaction is a separate pass (see
/// [`classify`](crate::time2d::classify::classify)).
pub struct Time2DBuilder<R, X> {
    extractor: X,
    kind: OffsetKind,
    unit: TimeUnit,
    runs: RuntimeAxisBuilder,
    axes: BTreeMap<DateTime<Utc>, OffsetAxisBuilder>,
    values: BTreeSet<Time2D>,
    _record: PhantomData<fn(&R)>,
}

impl<R, X> Time2DBuilder<R, X>
where
    X: TimeExtractor<R>,
{
    pub fn new(extractor: X, kind: OffsetKind, unit: TimeUnit) -> Self {
        Time2DBuilder {
            extractor,
            kind,
            unit,
            runs: RuntimeAxisBuilder::new(),
            axes: BTreeMap::new(),
            values: BTreeSet::new(),
            _record: PhantomData,
        }
    }

    /// Distinct runs seen so far
    pub fn run_count(&self) -> usize {
        self.axes.len()
    }

    /// Distinct coordinate keys seen so far
    pub fn key_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Extract `record`'s coordinate and absorb it
    pub fn add_record(&mut self, record: &R) -> CoordResult<()> {
        let key = self.extractor.time_of(record);
        self.add_key(key)
    }

    fn add_key(&mut self, key: Time2D) -> CoordResult<()> {
        if key.kind() != self.kind {
            return Err(CoordError::KindMismatch {
                expected: self.kind,
                found: key.kind(),
            });
        }
        self.runs.add(key.run);
        let (kind, unit) = (self.kind, self.unit);
        let axis = self
            .axes
            .entry(key.run)
            .or_insert_with(|| OffsetAxisBuilder::new(kind, unit, key.run));
        axis.add(key.value)?;
        self.values.insert(key);
        Ok(())
    }

    /// Absorb an already-built structure, key by key
    ///
    /// Partitioned archives build one structure per partition and fold them
    /// into a combined builder with this. When the structure's keys are no
    /// longer materialized they are reconstructed from its per-run axes,
    /// which hold the same deduplicated set.
    pub fn merge_index(&mut self, index: &Time2DIndex) -> CoordResult<()> {
        if index.kind() != self.kind {
            return Err(CoordError::KindMismatch {
                expected: self.kind,
                found: index.kind(),
            });
        }
        if index.unit() != self.unit {
            return Err(CoordError::UnitMismatch {
                expected: self.unit,
                found: index.unit(),
            });
        }
        match index.values() {
            Some(values) => {
                for key in values {
                    self.add_key(*key)?;
                }
            }
            None => {
                for run_idx in 0..index.run_count() {
                    let run_date = index.ref_date(run_idx)?;
                    let axis = index.axis_for_run(run_idx)?;
                    for value in axis.values() {
                        self.add_key(Time2D::new(run_date, value))?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Consume the builder and produce the general-layout structure
    pub fn finish(self) -> CoordResult<Time2DIndex> {
        let runs = self.runs.finish();
        // The axes map is keyed by run date, so iteration order matches the
        // finished run axis.
        let per_run: Vec<OffsetAxis> = self.axes.into_values().map(|b| b.finish()).collect();
        let values: Vec<Time2D> = self.values.into_iter().collect();
        tracing::debug!(
            runs = runs.len(),
            keys = values.len(),
            "Finished two-dimensional time index"
        );
        Time2DIndex::general(runs, self.kind, self.unit, per_run, Some(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::OffsetValue;
    use chrono::TimeZone;

    #[derive(Clone, Copy)]
    struct TestRecord {
        key: Time2D,
    }

    fn by_key(r: &TestRecord) -> Time2D {
        r.key
    }

    fn run(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 7, 1, h, 0, 0).unwrap()
    }

    fn instant_records() -> Vec<TestRecord> {
        // Three runs six hours apart; each later run reaches less far ahead
        let mut records = Vec::new();
        for (h, offsets) in [(0u32, vec![0i64, 6, 12]), (6, vec![0, 6]), (12, vec![0])] {
            for off in offsets {
                records.push(TestRecord {
                    key: Time2D::instant(run(h), off),
                });
            }
        }
        records
    }

    fn build(records: &[TestRecord]) -> Time2DIndex {
        let mut builder = Time2DBuilder::new(by_key, OffsetKind::Instant, TimeUnit::Hours);
        for record in records {
            builder.add_record(record).unwrap();
        }
        builder.finish().unwrap()
    }

    #[test]
    fn test_build_from_records() {
        let index = build(&instant_records());

        assert_eq!(index.run_count(), 3);
        assert_eq!(index.run_offsets(), &[0, 6, 12]);
        assert_eq!(index.max_offset_count(), 3);
        assert_eq!(index.value_count(), 6);

        let axis = index.axis_for_run(1).unwrap();
        assert_eq!(
            axis.values(),
            vec![OffsetValue::Instant(0), OffsetValue::Instant(6)]
        );
        assert_eq!(axis.ref_date(), run(6));
    }

    #[test]
    fn test_determinism_under_reordering() {
        let records = instant_records();
        let mut reversed = records.clone();
        reversed.reverse();

        let a = build(&records);
        let b = build(&reversed);

        assert_eq!(a, b);
        assert_eq!(a.values(), b.values());
        assert_eq!(a.run_offsets(), b.run_offsets());
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut records = instant_records();
        records.extend(instant_records());

        let once = build(&instant_records());
        let twice = build(&records);

        assert_eq!(once, twice);
        assert_eq!(once.values(), twice.values());
    }

    #[test]
    fn test_round_trip_through_locate() {
        let records = instant_records();
        let index = build(&records);

        for record in &records {
            let (run_idx, offset_idx) = index.locate_record(&by_key, record);
            let run_idx = run_idx.unwrap();
            let offset_idx = offset_idx.unwrap();

            let axis = index.axis_for_run(run_idx).unwrap();
            assert_eq!(index.ref_date(run_idx).unwrap(), record.key.run);
            assert_eq!(axis.value_at(offset_idx), Some(record.key.value));
        }
    }

    #[test]
    fn test_kind_mismatch_on_add() {
        let mut builder = Time2DBuilder::new(by_key, OffsetKind::Instant, TimeUnit::Hours);
        let record = TestRecord {
            key: Time2D::interval(run(0), 0, 6),
        };

        let err = builder.add_record(&record).unwrap_err();
        assert_eq!(
            err,
            CoordError::KindMismatch {
                expected: OffsetKind::Instant,
                found: OffsetKind::Interval,
            }
        );
    }

    #[test]
    fn test_merge_index() {
        let records = instant_records();
        let (early, late) = records.split_at(3);

        let combined = build(&records);

        let part_a = build(early);
        let part_b = build(late);
        let mut builder = Time2DBuilder::new(by_key, OffsetKind::Instant, TimeUnit::Hours);
        builder.merge_index(&part_a).unwrap();
        builder.merge_index(&part_b).unwrap();
        // Replaying a partition is a no-op
        builder.merge_index(&part_b).unwrap();
        let merged = builder.finish().unwrap();

        assert_eq!(merged, combined);
        assert_eq!(merged.values(), combined.values());
    }

    #[test]
    fn test_merge_index_without_materialized_keys() {
        let index = build(&instant_records());
        let stripped = index.clone().strip_values();

        let mut builder = Time2DBuilder::new(by_key, OffsetKind::Instant, TimeUnit::Hours);
        builder.merge_index(&stripped).unwrap();
        let rebuilt = builder.finish().unwrap();

        assert_eq!(rebuilt, index);
        assert_eq!(rebuilt.values(), index.values());
    }

    #[test]
    fn test_merge_rejects_mismatched_structure() {
        let index = build(&instant_records());

        let mut builder = Time2DBuilder::new(by_key, OffsetKind::Interval, TimeUnit::Hours);
        assert!(matches!(
            builder.merge_index(&index),
            Err(CoordError::KindMismatch { .. })
        ));

        let mut builder = Time2DBuilder::new(by_key, OffsetKind::Instant, TimeUnit::Days);
        assert!(matches!(
            builder.merge_index(&index),
            Err(CoordError::UnitMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_builder() {
        let builder = Time2DBuilder::new(by_key, OffsetKind::Instant, TimeUnit::Hours);
        assert!(builder.is_empty());
        assert_eq!(builder.run_count(), 0);

        let index = builder.finish().unwrap();
        assert_eq!(index.run_count(), 0);
        assert_eq!(index.value_count(), 0);
        assert_eq!(index.locate(&Time2D::instant(run(0), 0)), (None, None));
    }

    #[test]
    fn test_counts_during_build() {
        let mut builder = Time2DBuilder::new(by_key, OffsetKind::Instant, TimeUnit::Hours);
        for record in instant_records() {
            builder.add_record(&record).unwrap();
        }

        assert_eq!(builder.run_count(), 3);
        assert_eq!(builder.key_count(), 6);
        assert!(!builder.is_empty());
    }
}
