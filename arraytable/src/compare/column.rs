use std::cmp::Ordering;
use std::fmt;

use crate::compare::{CellOrdering, RowComparator, SortOrder, ensure_column_kind};
use crate::error::TableResult;
use crate::store::ColumnData;
use crate::table::Table;
use crate::types::ColumnKind;

/// Orders rows by an `int` or `long` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRowComparator {
    column: usize,
    order: SortOrder,
}

impl IntRowComparator {
    pub fn new(column: usize, order: SortOrder) -> Self {
        Self { column, order }
    }

    pub fn asc(column: usize) -> Self {
        Self::new(column, SortOrder::Ascending)
    }

    pub fn desc(column: usize) -> Self {
        Self::new(column, SortOrder::Descending)
    }
}

impl RowComparator for IntRowComparator {
    fn compare(&self, table: &Table, row_a: usize, row_b: usize) -> Ordering {
        let ordering = match table.column_data(self.column) {
            Some(ColumnData::Int(values)) => values[row_a].cmp(&values[row_b]),
            Some(ColumnData::Long(values)) => values[row_a].cmp(&values[row_b]),
            _ => Ordering::Equal,
        };

        self.order.apply(ordering)
    }

    fn validate(&self, kinds: &[ColumnKind]) -> TableResult<()> {
        ensure_column_kind(kinds, self.column, ColumnKind::is_integer, "int or long")
    }
}

impl fmt::Display for IntRowComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.order)
    }
}

/// Orders rows by a `float` or `double` column using the IEEE 754 total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatRowComparator {
    column: usize,
    order: SortOrder,
}

impl FloatRowComparator {
    pub fn new(column: usize, order: SortOrder) -> Self {
        Self { column, order }
    }

    pub fn asc(column: usize) -> Self {
        Self::new(column, SortOrder::Ascending)
    }

    pub fn desc(column: usize) -> Self {
        Self::new(column, SortOrder::Descending)
    }
}

impl RowComparator for FloatRowComparator {
    fn compare(&self, table: &Table, row_a: usize, row_b: usize) -> Ordering {
        let ordering = match table.column_data(self.column) {
            Some(ColumnData::Float(values)) => values[row_a].total_cmp(&values[row_b]),
            Some(ColumnData::Double(values)) => values[row_a].total_cmp(&values[row_b]),
            _ => Ordering::Equal,
        };

        self.order.apply(ordering)
    }

    fn validate(&self, kinds: &[ColumnKind]) -> TableResult<()> {
        ensure_column_kind(kinds, self.column, ColumnKind::is_floating, "float or double")
    }
}

impl fmt::Display for FloatRowComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.order)
    }
}

/// Orders rows by the natural order of any column kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalRowComparator {
    column: usize,
    order: SortOrder,
}

impl NaturalRowComparator {
    pub fn new(column: usize, order: SortOrder) -> Self {
        Self { column, order }
    }
}

impl RowComparator for NaturalRowComparator {
    fn compare(&self, table: &Table, row_a: usize, row_b: usize) -> Ordering {
        self.order
            .apply(table.compare_elements(self.column, row_a, row_b))
    }

    fn validate(&self, kinds: &[ColumnKind]) -> TableResult<()> {
        ensure_column_kind(kinds, self.column, |_| true, "any kind")
    }
}

/// Orders rows by an object column through a caller-supplied [`CellOrdering`].
///
/// Nulls sort first; the ordering only ever sees non-null cells.
#[derive(Debug, Clone)]
pub struct ObjectRowComparator {
    column: usize,
    ordering: CellOrdering,
}

impl ObjectRowComparator {
    pub fn new(column: usize, ordering: CellOrdering) -> Self {
        Self { column, ordering }
    }

    /// Orders the column by [`CellOrdering::natural`].
    pub fn natural(column: usize) -> Self {
        Self::new(column, CellOrdering::natural())
    }

    pub fn ordering(&self) -> &CellOrdering {
        &self.ordering
    }
}

impl RowComparator for ObjectRowComparator {
    fn compare(&self, table: &Table, row_a: usize, row_b: usize) -> Ordering {
        match table.column_data(self.column) {
            Some(ColumnData::Object(values)) => {
                self.ordering.compare_nulls_first(&values[row_a], &values[row_b])
            }
            _ => Ordering::Equal,
        }
    }

    fn validate(&self, kinds: &[ColumnKind]) -> TableResult<()> {
        ensure_column_kind(
            kinds,
            self.column,
            |kind| kind == ColumnKind::Object,
            "object",
        )
    }
}
