//! Layout classification
//!
//! The builder always produces a general structure: one axis per run.
//! Archives where every run shares the same offsets (or where offsets
//! repeat by cycle hour) waste space that way, so classification is run as
//! a separate pass over the finished structure when the caller wants the
//! compaction. It never changes what any lookup resolves to, only how the
//! axes are stored.

use crate::axis::{OffsetAxis, OffsetAxisBuilder, OffsetValue};
use crate::error::CoordResult;
use crate::time2d::index::{Layout, Time2DIndex};
use chrono::{DateTime, Timelike, Utc};
use std::collections::BTreeMap;

/// Compact a general structure into orthogonal or regular form
///
/// Orthogonal when every run's offset set is identical; otherwise regular
/// when offset sets are identical within each hour-of-day group and at
/// least one group has two or more runs (nothing is shared below that, so
/// the structure stays general). Structures that are not general, or have
/// fewer than two runs, pass through unchanged.
pub fn classify(index: Time2DIndex) -> CoordResult<Time2DIndex> {
    if !matches!(index.layout(), Layout::General { .. }) || index.run_count() < 2 {
        return Ok(index);
    }

    let run_count = index.run_count();
    let mut per_run: Vec<Vec<OffsetValue>> = Vec::with_capacity(run_count);
    for run_idx in 0..run_count {
        per_run.push(index.axis_for_run(run_idx)?.values());
    }

    if per_run.iter().all(|values| *values == per_run[0]) {
        tracing::debug!(
            runs = run_count,
            offsets = per_run[0].len(),
            "Classified structure as orthogonal"
        );
        let shared = build_axis(&index, index.ref_date(0)?, &per_run[0])?;
        let values = index.values().map(|v| v.to_vec());
        return Time2DIndex::orthogonal(
            index.runs().clone(),
            index.kind(),
            index.unit(),
            shared,
            values,
        );
    }

    let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for run_idx in 0..run_count {
        let hour = index.ref_date(run_idx)?.hour();
        groups.entry(hour).or_default().push(run_idx);
    }
    let identical_within_groups = groups
        .values()
        .all(|members| members.iter().all(|&i| per_run[i] == per_run[members[0]]));
    let any_group_shared = groups.values().any(|members| members.len() >= 2);

    if identical_within_groups && any_group_shared {
        let mut by_hour = BTreeMap::new();
        for (hour, members) in &groups {
            let first = members[0];
            let axis = build_axis(&index, index.ref_date(first)?, &per_run[first])?;
            by_hour.insert(*hour, axis);
        }
        tracing::debug!(
            runs = run_count,
            hours = by_hour.len(),
            "Classified structure as regular"
        );
        let values = index.values().map(|v| v.to_vec());
        return Time2DIndex::regular(
            index.runs().clone(),
            index.kind(),
            index.unit(),
            by_hour,
            values,
        );
    }

    tracing::debug!(runs = run_count, "Structure stays general");
    Ok(index)
}

fn build_axis(
    index: &Time2DIndex,
    ref_date: DateTime<Utc>,
    values: &[OffsetValue],
) -> CoordResult<OffsetAxis> {
    let mut builder = OffsetAxisBuilder::new(index.kind(), index.unit(), ref_date);
    for value in values {
        builder.add(*value)?;
    }
    Ok(builder.finish())
}
