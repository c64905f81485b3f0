//! Two-dimensional time coordinates
//!
//! A gridded-forecast archive stores many model runs, and each run carries
//! its own set of forecast offsets. This module indexes that run/offset
//! plane:
//!
//! - **Time2D**: the composite key (run reference time, forecast offset)
//! - **index**: Layout + Time2DIndex, the immutable finished structure
//! - **builder**: Time2DBuilder, incremental construction from records
//! - **merge**: the "best" flattened axis with a preferred run per offset
//! - **classify**: compaction of a general structure into orthogonal or
//!   regular form when the per-run axes repeat
//!
//! # Layouts
//!
//! ```text
//! General:      run[i] → axis[i]          (independent per-run offsets)
//! Orthogonal:   run[i] → shared axis      (identical offsets every run)
//! Regular:      run[i] → axis[hour(i)]    (offsets depend on hour-of-day)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use gridtime::axis::OffsetKind;
//! use gridtime::time2d::{Time2D, Time2DBuilder};
//! use gridtime::unit::TimeUnit;
//!
//! struct Record {
//!     run_hour: u32,
//!     offset: i64,
//! }
//!
//! let extractor = |r: &Record| {
//!     let run = Utc.with_ymd_and_hms(2021, 7, 1, r.run_hour, 0, 0).unwrap();
//!     Time2D::instant(run, r.offset)
//! };
//!
//! let mut builder = Time2DBuilder::new(extractor, OffsetKind::Instant, TimeUnit::Hours);
//! builder.add_record(&Record { run_hour: 0, offset: 6 }).unwrap();
//! builder.add_record(&Record { run_hour: 6, offset: 0 }).unwrap();
//! let index = builder.finish().unwrap();
//!
//! assert_eq!(index.run_count(), 2);
//! let key = Time2D::instant(Utc.with_ymd_and_hms(2021, 7, 1, 0, 0, 0).unwrap(), 6);
//! assert_eq!(index.locate(&key), (Some(0), Some(0)));
//! ```

pub mod builder;
pub mod classify;
pub mod index;
pub mod merge;

// Re-export commonly used types
pub use builder::Time2DBuilder;
pub use classify::classify;
pub use index::{Layout, Time2DIndex};
pub use merge::BestTimeAxis;

use crate::axis::{OffsetInterval, OffsetKind, OffsetValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite key of one record's position on the time plane
///
/// Ordered by run first, then by the offset value's own order, so a sorted
/// key list groups records by run in chronological order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Time2D {
    /// Reference time of the model run
    pub run: DateTime<Utc>,
    /// Forecast offset relative to `run`
    pub value: OffsetValue,
}

impl Time2D {
    pub fn new(run: DateTime<Utc>, value: OffsetValue) -> Self {
        Time2D { run, value }
    }

    /// Key for an instant-valued product
    pub fn instant(run: DateTime<Utc>, offset: i64) -> Self {
        Time2D {
            run,
            value: OffsetValue::Instant(offset),
        }
    }

    /// Key for an interval-valued (accumulation) product
    pub fn interval(run: DateTime<Utc>, start: i64, end: i64) -> Self {
        Time2D {
            run,
            value: OffsetValue::Interval(OffsetInterval::new(start, end)),
        }
    }

    pub fn kind(&self) -> OffsetKind {
        self.value.kind()
    }
}

impl fmt::Display for Time2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.run.format("%Y-%m-%dT%H:%MZ"), self.value)
    }
}
