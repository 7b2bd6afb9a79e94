//! Binary searches over sorted columns.
//!
//! Every search expects the searched rows to be sorted ascending by the order the search
//! uses; unsorted input yields an unspecified (but in-bounds) result.

pub mod bounds;
pub mod multikey;

pub use multikey::*;

use std::ops::{Bound, Range, RangeBounds};

use crate::bail;
use crate::error::{ErrorKind, TableResult};

/// Result of a binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// The key was found at this row.
    Found(usize),
    /// The key was not found; `insertion_point` is where the search converged.
    NotFound { insertion_point: usize },
}

impl SearchOutcome {
    /// Returns the matching row, if any.
    pub fn found(self) -> Option<usize> {
        match self {
            SearchOutcome::Found(row) => Some(row),
            SearchOutcome::NotFound { .. } => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Converts into the `Result` shape used by [`slice::binary_search`].
    pub fn into_result(self) -> Result<usize, usize> {
        match self {
            SearchOutcome::Found(row) => Ok(row),
            SearchOutcome::NotFound { insertion_point } => Err(insertion_point),
        }
    }

    /// Encodes the outcome as a single integer: the row when found, otherwise
    /// `-(insertion_point + 1)`.
    pub fn encoded(self) -> i64 {
        match self {
            SearchOutcome::Found(row) => row as i64,
            SearchOutcome::NotFound { insertion_point } => -(insertion_point as i64) - 1,
        }
    }
}

/// Resolves `range` against a table of `rows` rows into a half-open row range.
///
/// Fails if the range reaches past the last row. A range whose start is past its end is
/// returned as is and searched as empty.
pub(crate) fn resolve_range(range: impl RangeBounds<usize>, rows: usize) -> TableResult<Range<usize>> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => rows,
    };

    if end > rows || start > rows {
        bail!(
            ErrorKind::RowOutOfRange,
            "Search range out of range",
            format!("range {start}..{end} exceeds a table with {rows} rows")
        );
    }

    Ok(start..end)
}
