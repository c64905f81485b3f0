//! Record decoding seam
//!
//! The index builder is generic over the archive's record type. A
//! [`TimeExtractor`] pulls the run/offset coordinate out of a record;
//! any `Fn(&R) -> Time2D` closure works out of the box, and readers with
//! more context (lookup tables, unit conversion state) can implement the
//! trait on their own types.

use crate::time2d::Time2D;

/// Extracts the two-dimensional time coordinate from an archive record
pub trait TimeExtractor<R> {
    /// Decode the run reference time and forecast offset of `record`
    fn time_of(&self, record: &R) -> Time2D;
}

impl<R, F> TimeExtractor<R> for F
where
    F: Fn(&R) -> Time2D,
{
    fn time_of(&self, record: &R) -> Time2D {
        self(record)
    }
}
