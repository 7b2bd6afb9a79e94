//! Column storage for tables.
//!
//! A [`ColumnStore`] owns one backing array per column and keeps every array at the same
//! length, the store capacity. It knows how to grow the arrays with an amortized 1.5x policy
//! and how to swap or compare two elements of a column; it does not track which prefix of the
//! arrays holds valid rows, so callers pass that count in when it matters.

mod column;

pub use column::*;

use std::cmp::Ordering;
use tracing::{debug, warn};

use crate::bail;
use crate::error::{ErrorKind, TableResult};
use crate::types::ColumnKind;

/// Equal-length backing arrays for every column of a table, grown together up to
/// `max_capacity` elements.
#[derive(Debug, Clone)]
pub struct ColumnStore {
    columns: Vec<Column>,
    capacity: usize,
    max_capacity: usize,
}

impl ColumnStore {
    /// Allocates empty columns of the given kinds, each `capacity` elements long.
    pub fn allocate(
        kinds: &[ColumnKind],
        capacity: usize,
        max_capacity: usize,
    ) -> TableResult<ColumnStore> {
        if capacity > max_capacity {
            bail!(
                ErrorKind::CapacityExhausted,
                "Requested capacity exceeds the maximum",
                format!("requested {capacity} rows, maximum is {max_capacity}")
            );
        }

        let columns = kinds
            .iter()
            .map(|&kind| ColumnData::allocate(kind, capacity).map(Column::new))
            .collect::<TableResult<Vec<_>>>()?;

        Ok(ColumnStore {
            columns,
            capacity,
            max_capacity,
        })
    }

    /// Wraps existing backing arrays, which must all have the same length.
    ///
    /// The common length becomes the store capacity.
    pub fn from_data(data: Vec<ColumnData>, max_capacity: usize) -> TableResult<ColumnStore> {
        let capacity = data.first().map_or(0, ColumnData::len);

        for (index, column) in data.iter().enumerate() {
            if column.len() != capacity {
                bail!(
                    ErrorKind::SchemaMismatch,
                    "Columns have different lengths",
                    format!(
                        "column {index} contains {} rows, expected {capacity}",
                        column.len()
                    )
                );
            }
        }

        if capacity > max_capacity {
            bail!(
                ErrorKind::CapacityExhausted,
                "Requested capacity exceeds the maximum",
                format!("columns contain {capacity} rows, maximum is {max_capacity}")
            );
        }

        Ok(ColumnStore {
            columns: data.into_iter().map(Column::new).collect(),
            capacity,
            max_capacity,
        })
    }

    /// Returns the length shared by every backing array.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the largest capacity this store may grow to.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Returns all columns in schema order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column at `index`.
    pub fn column(&self, index: usize) -> TableResult<&Column> {
        match self.columns.get(index) {
            Some(column) => Ok(column),
            None => bail!(
                ErrorKind::ColumnOutOfRange,
                "Column index out of range",
                format!("column {index} does not exist, table has {}", self.columns.len())
            ),
        }
    }

    pub(crate) fn column_mut(&mut self, index: usize) -> TableResult<&mut Column> {
        let count = self.columns.len();
        match self.columns.get_mut(index) {
            Some(column) => Ok(column),
            None => bail!(
                ErrorKind::ColumnOutOfRange,
                "Column index out of range",
                format!("column {index} does not exist, table has {count}")
            ),
        }
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Grows the backing arrays if they hold fewer than `min_capacity` elements.
    pub(crate) fn ensure_capacity(&mut self, min_capacity: usize) -> TableResult<()> {
        if min_capacity > self.capacity {
            self.grow(min_capacity)?;
        }

        Ok(())
    }

    /// Grows every backing array to at least `min_capacity` elements.
    ///
    /// Either every column grows or none does: room is reserved in all columns before any of
    /// them changes length.
    pub(crate) fn grow(&mut self, min_capacity: usize) -> TableResult<()> {
        let new_capacity = grown_capacity(self.capacity, min_capacity, self.max_capacity)?;
        if new_capacity <= self.capacity {
            return Ok(());
        }

        debug!(
            old_capacity = self.capacity,
            new_capacity, "growing table columns"
        );

        let additional = new_capacity - self.capacity;
        for column in &mut self.columns {
            column.data.try_reserve(additional)?;
        }

        for column in &mut self.columns {
            column.data.extend_to(new_capacity);
        }
        self.capacity = new_capacity;

        Ok(())
    }

    /// Swaps elements `i` and `j` of column `column`.
    pub(crate) fn element_swap(&mut self, column: usize, i: usize, j: usize) {
        self.columns[column].data.swap(i, j);
    }

    /// Compares elements `i` and `j` of column `column` by natural order.
    pub(crate) fn compare_elements(&self, column: usize, i: usize, j: usize) -> Ordering {
        self.columns[column].data.compare(i, j)
    }
}

/// Computes the capacity to grow to: 1.5x the current capacity, at least `min_capacity`,
/// clamped to `max_capacity`.
pub fn grown_capacity(
    capacity: usize,
    min_capacity: usize,
    max_capacity: usize,
) -> TableResult<usize> {
    if min_capacity > max_capacity {
        bail!(
            ErrorKind::CapacityExhausted,
            "Requested capacity exceeds the maximum",
            format!("requested {min_capacity} rows, maximum is {max_capacity}")
        );
    }

    let mut new_capacity = capacity.saturating_add(capacity >> 1);
    if new_capacity < min_capacity {
        new_capacity = min_capacity;
    }

    if new_capacity > max_capacity {
        warn!(
            requested = new_capacity,
            max_capacity, "clamping table growth to the maximum capacity"
        );
        new_capacity = max_capacity;
    }

    Ok(new_capacity)
}
