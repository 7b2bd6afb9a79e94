//! Search loops shared by every column kind.
//!
//! Each function takes a half-open row range and a probe returning how the element at a
//! row compares to the key. None of them touch the table directly.

use std::cmp::Ordering;
use std::ops::Range;

use crate::search::SearchOutcome;

/// Which row of a run of equal keys a search reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Any matching row, see [`search_by`].
    Any,
    /// The first matching row, see [`floor_by`].
    First,
    /// The last matching row, see [`ceil_by`].
    Last,
}

impl SearchMode {
    pub fn run<F>(self, rows: Range<usize>, probe: F) -> SearchOutcome
    where
        F: FnMut(usize) -> Ordering,
    {
        match self {
            SearchMode::Any => search_by(rows, probe),
            SearchMode::First => floor_by(rows, probe),
            SearchMode::Last => ceil_by(rows, probe),
        }
    }
}

/// Classic binary search. With duplicate keys any of the matching rows may be returned.
pub fn search_by<F>(rows: Range<usize>, mut probe: F) -> SearchOutcome
where
    F: FnMut(usize) -> Ordering,
{
    let Range { mut start, mut end } = rows;

    while start < end {
        let mid = start + (end - 1 - start) / 2;
        match probe(mid) {
            Ordering::Less => start = mid + 1,
            Ordering::Greater => end = mid,
            Ordering::Equal => return SearchOutcome::Found(mid),
        }
    }

    SearchOutcome::NotFound {
        insertion_point: start,
    }
}

/// Lower-bound search: the first row equal to the key.
///
/// When the key is absent the outcome carries the row the search converged on, which is
/// the first row greater than the key or the last row of the range.
pub fn floor_by<F>(rows: Range<usize>, mut probe: F) -> SearchOutcome
where
    F: FnMut(usize) -> Ordering,
{
    if rows.is_empty() {
        return SearchOutcome::NotFound {
            insertion_point: rows.start,
        };
    }

    let mut low = rows.start;
    let mut high = rows.end - 1;
    while low < high {
        let mid = low + (high - low) / 2;
        if probe(mid) == Ordering::Less {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    converged(low, probe(low))
}

/// Upper-bound search: the last row equal to the key.
///
/// When the key is absent the outcome carries the row the search converged on, which is
/// the last row smaller than the key or the first row of the range.
pub fn ceil_by<F>(rows: Range<usize>, mut probe: F) -> SearchOutcome
where
    F: FnMut(usize) -> Ordering,
{
    if rows.is_empty() {
        return SearchOutcome::NotFound {
            insertion_point: rows.start,
        };
    }

    let mut low = rows.start;
    let mut high = rows.end - 1;
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if probe(mid) == Ordering::Greater {
            high = mid - 1;
        } else {
            low = mid;
        }
    }

    converged(low, probe(low))
}

fn converged(row: usize, ordering: Ordering) -> SearchOutcome {
    match ordering {
        Ordering::Equal => SearchOutcome::Found(row),
        _ => SearchOutcome::NotFound {
            insertion_point: row,
        },
    }
}
