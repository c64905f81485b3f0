//! Coordinate error types
//!
//! Defines the failures that can surface while constructing or resolving
//! two-dimensional time coordinates. Lookup misses are *not* errors: every
//! lookup operation returns `Option` for the "not present" case, which is an
//! expected, frequently-checked outcome during merging and record matching.

use crate::axis::OffsetKind;
use crate::unit::TimeUnit;
use thiserror::Error;

/// Errors that can occur in coordinate construction and resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Run index outside the run axis bounds (caller bug, always surfaced)
    #[error("run index {index} out of range ({len} runs)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A regular-layout structure has no offset axis for a run's hour-of-day
    #[error("no offset axis for hour-of-day {hour}")]
    NoAxisForHour { hour: u32 },

    /// An instant offset was fed to an interval structure, or vice versa
    #[error("offset kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: OffsetKind,
        found: OffsetKind,
    },

    /// Axes with different time units were combined into one structure
    #[error("time unit mismatch: expected {expected}, found {found}")]
    UnitMismatch { expected: TimeUnit, found: TimeUnit },

    /// A general-layout structure was given a different number of axes than runs
    #[error("axis count {axes} does not match run count {runs}")]
    AxisCountMismatch { axes: usize, runs: usize },

    /// Internal consistency failure that should be unreachable when the
    /// structure was built correctly; aborts the operation rather than
    /// attempting recovery
    #[error("invariant violated: {0}")]
    Invariant(String),
}

/// Result type alias for coordinate operations
pub type CoordResult<T> = Result<T, CoordError>;
