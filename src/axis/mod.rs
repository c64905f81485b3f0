//! One-dimensional coordinate axes
//!
//! The 2-D index is assembled from flat axes:
//!
//! - **runtime**: RuntimeAxis, the ordered list of model-run reference times
//! - **instant**: InstantAxis, forecast instants for a single run
//! - **interval**: OffsetInterval and IntervalAxis, accumulation periods
//! - **offset**: OffsetAxis, the tagged union over the two offset kinds,
//!   plus the incremental OffsetAxisBuilder
//!
//! # Layout
//!
//! ```text
//! RuntimeAxis:   run[0] < run[1] < ... < run[n-1]      (reference times)
//! OffsetAxis:    off[0] < off[1] < ... < off[m-1]      (units past one ref)
//!
//! absolute time = ref_date + offset * unit
//! ```
//!
//! Every axis is immutable once constructed; its values are sorted and
//! deduplicated so positions are stable and lookups can binary-search.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use gridtime::axis::{OffsetAxisBuilder, OffsetKind, OffsetValue};
//! use gridtime::unit::TimeUnit;
//!
//! let run = Utc.with_ymd_and_hms(2021, 7, 1, 0, 0, 0).unwrap();
//! let mut builder = OffsetAxisBuilder::new(OffsetKind::Instant, TimeUnit::Hours, run);
//! for hour in [12, 0, 6, 6] {
//!     builder.add(OffsetValue::Instant(hour)).unwrap();
//! }
//! let axis = builder.finish();
//!
//! assert_eq!(axis.len(), 3);
//! assert_eq!(axis.index_of(&OffsetValue::Instant(6)), Some(1));
//! ```

pub mod instant;
pub mod interval;
pub mod offset;
pub mod runtime;

// Re-export commonly used types
pub use instant::InstantAxis;
pub use interval::{IntervalAxis, IntervalLabel, OffsetInterval};
pub use offset::{OffsetAxis, OffsetAxisBuilder, OffsetKind, OffsetValue};
pub use runtime::{RuntimeAxis, RuntimeAxisBuilder};
