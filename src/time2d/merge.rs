//! The "best" flattened axis
//!
//! Forecast viewers usually want one 1-D time axis where every position is
//! served by the most recent run that reached it. `make_best` puts every
//! run's offsets into absolute terms (units past the first run), merges
//! them into one sorted deduplicated axis, and records which run wins each
//! position. Positions are resolved against a *master* run axis so the
//! preference table stays meaningful when this structure covers only a
//! subset of the archive's runs.

use crate::axis::{OffsetAxis, OffsetAxisBuilder, RuntimeAxis};
use crate::error::{CoordError, CoordResult};
use crate::time2d::index::Time2DIndex;
use chrono::DateTime;
use std::collections::BTreeSet;

/// One merged axis plus the winning run per position
///
/// `preferred_run` is parallel to the axis; each entry is an index into the
/// master run axis the merge was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestTimeAxis {
    axis: OffsetAxis,
    preferred_run: Vec<Option<usize>>,
}

impl BestTimeAxis {
    /// The merged offsets, anchored at the first run's reference time
    pub fn axis(&self) -> &OffsetAxis {
        &self.axis
    }

    /// Master run index winning each position
    pub fn preferred_run(&self) -> &[Option<usize>] {
        &self.preferred_run
    }

    /// Winning run for one position; `None` off the end or unserved
    pub fn preferred_run_at(&self, index: usize) -> Option<usize> {
        self.preferred_run.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.preferred_run.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferred_run.is_empty()
    }
}

impl Time2DIndex {
    /// Merge every run's offsets into one best axis
    ///
    /// `master` must contain every run of this structure, in order; runs of
    /// other partitions may be interleaved. Later runs win ties, so each
    /// position names the most recent run that produced it.
    pub fn make_best(&self, master: &RuntimeAxis) -> CoordResult<BestTimeAxis> {
        let run_count = self.run_count();

        // Every offset in absolute terms: units past the first run
        let mut distinct = BTreeSet::new();
        for run_idx in 0..run_count {
            let delta = self.run_offset(run_idx)?;
            let axis = self.axis_for_run(run_idx)?;
            for value in axis.values() {
                distinct.insert(value.shifted(delta));
            }
        }
        let best: Vec<_> = distinct.into_iter().collect();

        // Lockstep walk mapping each run onto the master axis
        let mut run2master = Vec::with_capacity(run_count);
        let mut master_pos = 0usize;
        for run_date in self.runs().iter() {
            loop {
                match master.date_at(master_pos) {
                    Some(date) if date == run_date => break,
                    Some(_) => master_pos += 1,
                    None => {
                        return Err(CoordError::Invariant(format!(
                            "run {} missing from master run axis",
                            run_date
                        )))
                    }
                }
            }
            run2master.push(master_pos);
        }

        // Chronological sweep: later runs overwrite, so the most recent run
        // that produced an offset holds its position afterwards.
        let mut preferred_run = vec![None; best.len()];
        for run_idx in 0..run_count {
            let delta = self.run_offset(run_idx)?;
            let axis = self.axis_for_run(run_idx)?;
            for value in axis.values() {
                let shifted = value.shifted(delta);
                let pos = best.binary_search(&shifted).map_err(|_| {
                    CoordError::Invariant(format!(
                        "merged offset {} missing from best axis",
                        shifted
                    ))
                })?;
                preferred_run[pos] = Some(run2master[run_idx]);
            }
        }

        let anchor = self
            .runs()
            .first_date()
            .or_else(|| master.first_date())
            .unwrap_or(DateTime::<chrono::Utc>::UNIX_EPOCH);
        let mut axis_builder = OffsetAxisBuilder::new(self.kind(), self.unit(), anchor);
        for value in &best {
            axis_builder.add(*value)?;
        }
        let axis = axis_builder.finish();

        tracing::debug!(
            runs = run_count,
            positions = axis.len(),
            "Merged runs into best axis"
        );

        Ok(BestTimeAxis {
            axis,
            preferred_run,
        })
    }
}
