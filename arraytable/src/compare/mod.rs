//! Row comparison strategies used to sort tables.
//!
//! A [`RowComparator`] compares two rows of a [`Table`] by index. Single-column strategies
//! live in [`column`]; [`chained`] composes them into a lexicographic order.
//!
//! Comparators must describe a consistent total preorder for the duration of one sort. An
//! inconsistent comparator never causes memory unsafety, but the resulting row order is
//! unspecified.

pub mod chained;
pub mod column;

pub use chained::*;
pub use column::*;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::bail;
use crate::error::{ErrorKind, TableResult};
use crate::table::Table;
use crate::types::{Cell, ColumnKind};

/// Strategy comparing two rows of a table.
pub trait RowComparator: fmt::Debug + Send + Sync {
    /// Compares `row_a` with `row_b`. Both indices are below `table.row_count()`.
    fn compare(&self, table: &Table, row_a: usize, row_b: usize) -> Ordering;

    /// Checks that the columns this comparator reads exist in `kinds` with a kind it can read.
    ///
    /// Called once before a sort starts so that [`RowComparator::compare`] can stay
    /// infallible.
    fn validate(&self, _kinds: &[ColumnKind]) -> TableResult<()> {
        Ok(())
    }
}

/// Direction of a single-column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Applies this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("ASC"),
            SortOrder::Descending => f.write_str("DESC"),
        }
    }
}

/// Total order over [`Cell`] values, used by object columns.
#[derive(Clone)]
pub struct CellOrdering {
    compare: Arc<dyn Fn(&Cell, &Cell) -> Ordering + Send + Sync>,
}

impl CellOrdering {
    /// The natural cell order: nulls first, then by variant and value.
    pub fn natural() -> Self {
        Self::from_fn(Cell::natural_cmp)
    }

    /// Wraps a caller-supplied total order.
    pub fn from_fn<F>(compare: F) -> Self
    where
        F: Fn(&Cell, &Cell) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(compare),
        }
    }

    /// Returns the reverse of this order.
    pub fn reverse(self) -> Self {
        let inner = self.compare;
        Self::from_fn(move |a, b| inner(b, a))
    }

    pub fn compare(&self, a: &Cell, b: &Cell) -> Ordering {
        (self.compare)(a, b)
    }

    /// Compares with nulls ahead of every other cell, handing only non-null pairs to
    /// the ordering.
    ///
    /// This is the order object columns are sorted and searched in.
    pub fn compare_nulls_first(&self, a: &Cell, b: &Cell) -> Ordering {
        match (a.is_null(), b.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.compare(a, b),
        }
    }
}

impl Default for CellOrdering {
    fn default() -> Self {
        Self::natural()
    }
}

impl fmt::Debug for CellOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellOrdering").finish_non_exhaustive()
    }
}

/// Adapts a closure into a [`RowComparator`].
pub struct FnRowComparator<F> {
    compare: F,
}

impl<F> FnRowComparator<F>
where
    F: Fn(&Table, usize, usize) -> Ordering + Send + Sync,
{
    pub fn new(compare: F) -> Self {
        Self { compare }
    }
}

impl<F> RowComparator for FnRowComparator<F>
where
    F: Fn(&Table, usize, usize) -> Ordering + Send + Sync,
{
    fn compare(&self, table: &Table, row_a: usize, row_b: usize) -> Ordering {
        (self.compare)(table, row_a, row_b)
    }
}

impl<F> fmt::Debug for FnRowComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRowComparator").finish_non_exhaustive()
    }
}

/// Fails unless `column` exists in `kinds` and its kind satisfies `accepts`.
pub(crate) fn ensure_column_kind(
    kinds: &[ColumnKind],
    column: usize,
    accepts: impl Fn(ColumnKind) -> bool,
    expected: &str,
) -> TableResult<()> {
    let Some(&kind) = kinds.get(column) else {
        bail!(
            ErrorKind::ColumnOutOfRange,
            "Column index out of range",
            format!("column {column} does not exist, table has {}", kinds.len())
        );
    };

    if !accepts(kind) {
        bail!(
            ErrorKind::ColumnKindMismatch,
            "Column kind does not match the comparator",
            format!("column {column} is of kind {kind}, expected {expected}")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_flips_the_order() {
        let ordering = CellOrdering::natural().reverse();

        assert_eq!(
            ordering.compare(&Cell::from("a"), &Cell::from("b")),
            Ordering::Greater
        );
    }

    #[test]
    fn nulls_stay_first_under_reversed_order() {
        let ordering = CellOrdering::natural().reverse();

        assert_eq!(
            ordering.compare_nulls_first(&Cell::Null, &Cell::from("z")),
            Ordering::Less
        );
        assert_eq!(
            ordering.compare_nulls_first(&Cell::from("a"), &Cell::Null),
            Ordering::Greater
        );
        assert_eq!(
            ordering.compare_nulls_first(&Cell::from("a"), &Cell::from("b")),
            Ordering::Greater
        );
        assert_eq!(ordering.compare_nulls_first(&Cell::Null, &Cell::Null), Ordering::Equal);
    }

    #[test]
    fn descending_reverses_comparisons() {
        assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn kind_check_reports_mismatch() {
        let kinds = [ColumnKind::Int, ColumnKind::Object];

        assert!(ensure_column_kind(&kinds, 0, ColumnKind::is_integer, "an integer kind").is_ok());

        let err = ensure_column_kind(&kinds, 1, ColumnKind::is_integer, "an integer kind")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ColumnKindMismatch);
        assert_eq!(
            err.detail(),
            Some("column 1 is of kind object, expected an integer kind")
        );

        let err = ensure_column_kind(&kinds, 5, ColumnKind::is_integer, "an integer kind")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ColumnOutOfRange);
    }
}
