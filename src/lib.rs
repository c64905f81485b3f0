//! # Gridtime
//!
//! Two-dimensional time coordinates for gridded forecast archives: every
//! record sits at a (model run, forecast offset) pair, and this crate
//! indexes that plane.
//!
//! ## Features
//!
//! - **Three layouts**: independent per-run axes, one shared axis, or
//!   per-hour-of-day axes, all resolved through one lookup surface
//! - **Best axis**: merge all runs into a single flattened axis where each
//!   position is served by the most recent run that reached it
//! - **Generic ingestion**: one builder serves any record type through a
//!   small extractor trait
//! - **Immutable results**: a finished index is read-only and freely shared
//!
//! ## Modules
//!
//! - [`axis`]: the 1-D building blocks (run axis, instant/interval axes)
//! - [`time2d`]: the composite key, the index, builder, merge and
//!   classification
//! - [`unit`]: calendar-aware offset arithmetic
//! - [`record`]: the record-decoding seam
//! - [`error`]: error types
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use gridtime::{OffsetKind, Time2D, Time2DBuilder, TimeUnit};
//!
//! struct GridRecord {
//!     run_hour: u32,
//!     forecast_hour: i64,
//! }
//!
//! let extractor = |r: &GridRecord| {
//!     let run = Utc.with_ymd_and_hms(2021, 7, 1, r.run_hour, 0, 0).unwrap();
//!     Time2D::instant(run, r.forecast_hour)
//! };
//!
//! let mut builder = Time2DBuilder::new(extractor, OffsetKind::Instant, TimeUnit::Hours);
//! for (run_hour, forecast_hour) in [(0, 0), (0, 6), (0, 12), (6, 0), (6, 6), (12, 0)] {
//!     builder
//!         .add_record(&GridRecord { run_hour, forecast_hour })
//!         .unwrap();
//! }
//! let index = builder.finish().unwrap();
//!
//! // Resolve a record back to its (run, offset) position
//! let record = GridRecord { run_hour: 6, forecast_hour: 6 };
//! assert_eq!(index.locate_record(&extractor, &record), (Some(1), Some(1)));
//!
//! // Flatten to the best axis: the newest run serves each position
//! let best = index.make_best(index.runs()).unwrap();
//! assert_eq!(best.preferred_run(), &[Some(0), Some(1), Some(2)]);
//! ```

pub mod axis;
pub mod error;
pub mod record;
pub mod time2d;
pub mod unit;

// Re-export top-level types for convenience
pub use axis::{
    InstantAxis, IntervalAxis, IntervalLabel, OffsetAxis, OffsetAxisBuilder, OffsetInterval,
    OffsetKind, OffsetValue, RuntimeAxis, RuntimeAxisBuilder,
};

pub use error::{CoordError, CoordResult};

pub use record::TimeExtractor;

pub use time2d::{classify, BestTimeAxis, Layout, Time2D, Time2DBuilder, Time2DIndex};

pub use unit::TimeUnit;
