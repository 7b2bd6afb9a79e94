//! The table: a set of equally long columns plus the count of rows in use.
//!
//! Rows are identified by index in `[0, row_count)`. Every mutation keeps all columns in
//! lockstep, so a row index always refers to the same logical row in every column.
//!
//! Row mutation lives in [`mutate`], sorting and shuffling in [`sort`] and single column
//! searches in [`search`].

mod mutate;
mod search;
mod sort;

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use tracing::trace;

use crate::bail;
use crate::compare::RowComparator;
use crate::config::TableConfig;
use crate::conversions::numeric::ensure_assignable;
use crate::error::{ErrorKind, TableError, TableResult};
use crate::store::{Column, ColumnData, ColumnStore};
use crate::table_error;
use crate::types::{Cell, ColumnKind};

/// Number of rows rendered by the [`fmt::Display`] implementation.
const DISPLAY_ROWS: usize = 5;

/// Growable, column oriented in-memory table.
///
/// Cloning a table copies every column, so the clone evolves independently of the
/// original. The active comparator is shared between the two.
#[derive(Debug, Clone)]
pub struct Table {
    store: ColumnStore,
    row_count: usize,
    comparator: Option<Arc<dyn RowComparator>>,
    config: TableConfig,
}

impl Table {
    /// Creates a table holding a copy of `columns`.
    ///
    /// Every column becomes a full row range: `row_count` and `capacity` both equal the
    /// common column length.
    pub fn from_columns_copy(columns: &[ColumnData]) -> TableResult<Table> {
        Self::from_columns_owning(columns.to_vec())
    }

    /// Creates a table that takes ownership of `columns` without copying them.
    pub fn from_columns_owning(columns: Vec<ColumnData>) -> TableResult<Table> {
        let config = TableConfig::default();
        let store = ColumnStore::from_data(columns, config.max_capacity)?;
        let row_count = store.capacity();

        trace!(
            columns = store.columns().len(),
            rows = row_count,
            "created table from columns"
        );

        Ok(Table {
            store,
            row_count,
            comparator: None,
            config,
        })
    }

    /// Creates an empty table with `initial_capacity` preallocated rows per column.
    pub fn with_kinds(initial_capacity: usize, kinds: &[ColumnKind]) -> TableResult<Table> {
        let config = TableConfig {
            initial_capacity,
            ..TableConfig::default()
        };

        Self::allocate(config, kinds)
    }

    /// Creates an empty table using [`TableConfig::DEFAULT_INITIAL_CAPACITY`].
    pub fn with_default_capacity(kinds: &[ColumnKind]) -> TableResult<Table> {
        Self::with_config(TableConfig::default(), kinds)
    }

    /// Creates an empty table sized by `config`, after validating it.
    pub fn with_config(config: TableConfig, kinds: &[ColumnKind]) -> TableResult<Table> {
        config.validate()?;

        Self::allocate(config, kinds)
    }

    fn allocate(config: TableConfig, kinds: &[ColumnKind]) -> TableResult<Table> {
        let store = ColumnStore::allocate(kinds, config.initial_capacity, config.max_capacity)?;

        trace!(
            columns = kinds.len(),
            capacity = store.capacity(),
            "allocated empty table"
        );

        Ok(Table {
            store,
            row_count: 0,
            comparator: None,
            config,
        })
    }

    pub fn column_count(&self) -> usize {
        self.store.columns().len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of rows the columns can hold before growing.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the comparator used by the last [`Table::sort`], if any.
    pub fn comparator(&self) -> Option<&Arc<dyn RowComparator>> {
        self.comparator.as_ref()
    }

    /// Returns all columns, including the unused tail of each backing array.
    pub fn columns(&self) -> &[Column] {
        self.store.columns()
    }

    pub fn column_kind(&self, column: usize) -> TableResult<ColumnKind> {
        Ok(self.store.column(column)?.kind())
    }

    /// Returns the kind of every column in schema order.
    pub fn column_kinds(&self) -> Vec<ColumnKind> {
        self.store.columns().iter().map(Column::kind).collect()
    }

    pub fn column_name(&self, column: usize) -> TableResult<Option<&str>> {
        Ok(self.store.column(column)?.name())
    }

    pub fn set_column_name(&mut self, column: usize, name: impl Into<String>) -> TableResult<()> {
        self.store.column_mut(column)?.name = Some(name.into());

        Ok(())
    }

    /// Returns the index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.store
            .columns()
            .iter()
            .position(|column| column.name() == Some(name))
    }

    /// Returns a copy of the valid rows of `column`.
    pub fn column_snapshot(&self, column: usize) -> TableResult<ColumnData> {
        Ok(self.store.column(column)?.data().prefix(self.row_count))
    }

    pub(crate) fn column_data(&self, column: usize) -> Option<&ColumnData> {
        self.store.columns().get(column).map(Column::data)
    }

    /// Compares two elements of `column` by natural order.
    ///
    /// Panics if `column` does not exist; callers validate it beforehand.
    pub(crate) fn compare_elements(&self, column: usize, row_a: usize, row_b: usize) -> Ordering {
        self.store.compare_elements(column, row_a, row_b)
    }

    /// Fails with [`ErrorKind::RowOutOfRange`] unless `row < row_count`.
    pub(crate) fn check_row(&self, row: usize) -> TableResult<()> {
        if row >= self.row_count {
            bail!(
                ErrorKind::RowOutOfRange,
                "Row index out of range",
                format!("row {row} does not exist, table has {} rows", self.row_count)
            );
        }

        Ok(())
    }

    fn readable(&self, row: usize, column: usize) -> TableResult<&ColumnData> {
        let data = self.store.column(column)?.data();
        self.check_row(row)?;

        Ok(data)
    }

    /// Reads an `int` element.
    pub fn get_i32(&self, row: usize, column: usize) -> TableResult<i32> {
        match self.readable(row, column)? {
            ColumnData::Int(values) => Ok(values[row]),
            data => Err(kind_mismatch(column, data.kind(), "int")),
        }
    }

    /// Reads an `int` or `long` element as `i64`.
    pub fn get_i64(&self, row: usize, column: usize) -> TableResult<i64> {
        match self.readable(row, column)? {
            ColumnData::Int(values) => Ok(i64::from(values[row])),
            ColumnData::Long(values) => Ok(values[row]),
            data => Err(kind_mismatch(column, data.kind(), "int or long")),
        }
    }

    /// Reads a `float` element.
    pub fn get_f32(&self, row: usize, column: usize) -> TableResult<f32> {
        match self.readable(row, column)? {
            ColumnData::Float(values) => Ok(values[row]),
            data => Err(kind_mismatch(column, data.kind(), "float")),
        }
    }

    /// Reads an `int`, `float` or `double` element as `f64`.
    pub fn get_f64(&self, row: usize, column: usize) -> TableResult<f64> {
        match self.readable(row, column)? {
            ColumnData::Int(values) => Ok(f64::from(values[row])),
            ColumnData::Float(values) => Ok(f64::from(values[row])),
            ColumnData::Double(values) => Ok(values[row]),
            data => Err(kind_mismatch(column, data.kind(), "int, float or double")),
        }
    }

    pub fn get_bool(&self, row: usize, column: usize) -> TableResult<bool> {
        match self.readable(row, column)? {
            ColumnData::Bool(values) => Ok(values[row]),
            data => Err(kind_mismatch(column, data.kind(), "bool")),
        }
    }

    /// Borrows the cell stored in an object column.
    pub fn get_object(&self, row: usize, column: usize) -> TableResult<&Cell> {
        match self.readable(row, column)? {
            ColumnData::Object(values) => Ok(&values[row]),
            data => Err(kind_mismatch(column, data.kind(), "object")),
        }
    }

    /// Reads any element as a [`Cell`].
    pub fn get(&self, row: usize, column: usize) -> TableResult<Cell> {
        Ok(self.readable(row, column)?.cell(row))
    }

    /// Writes `value` into an existing row, widening it into the column kind when that is
    /// lossless.
    pub fn set(&mut self, row: usize, column: usize, value: impl Into<Cell>) -> TableResult<()> {
        let value = value.into();
        let kind = self.readable(row, column)?.kind();
        ensure_assignable(kind, column, &value)?;

        self.store.column_mut(column)?.data.write_cell(row, value);

        Ok(())
    }

    pub fn set_i32(&mut self, row: usize, column: usize, value: i32) -> TableResult<()> {
        self.set(row, column, value)
    }

    pub fn set_i64(&mut self, row: usize, column: usize, value: i64) -> TableResult<()> {
        self.set(row, column, value)
    }

    pub fn set_f32(&mut self, row: usize, column: usize, value: f32) -> TableResult<()> {
        self.set(row, column, value)
    }

    pub fn set_f64(&mut self, row: usize, column: usize, value: f64) -> TableResult<()> {
        self.set(row, column, value)
    }

    pub fn set_bool(&mut self, row: usize, column: usize, value: bool) -> TableResult<()> {
        self.set(row, column, value)
    }

    /// Stores `value` in an object column. Unlike [`Table::set`] this refuses primitive
    /// columns even when the value would fit.
    pub fn set_object(
        &mut self,
        row: usize,
        column: usize,
        value: impl Into<Cell>,
    ) -> TableResult<()> {
        let kind = self.readable(row, column)?.kind();
        if kind != ColumnKind::Object {
            return Err(kind_mismatch(column, kind, "object"));
        }

        self.set(row, column, value)
    }

    /// Returns a lazy iterator mapping every row index through `f`.
    ///
    /// Each call starts a new pass from row `0`.
    pub fn iter_rows<T, F>(&self, f: F) -> RowIter<'_, F>
    where
        F: FnMut(&Table, usize) -> T,
    {
        RowIter {
            table: self,
            next: 0,
            end: self.row_count,
            f,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.row_count.min(DISPLAY_ROWS);

        for row in 0..shown {
            f.write_str("[")?;
            for column in self.store.columns() {
                let rendered = match column.data() {
                    ColumnData::Float(values) => format!("{:.4}", values[row]),
                    ColumnData::Double(values) => format!("{:.4}", values[row]),
                    data => data.cell(row).to_string(),
                };
                write!(f, "{rendered:<6.6} ")?;
            }
            f.write_str("]\n")?;
        }

        if self.row_count > shown {
            f.write_str("...")?;
        }

        Ok(())
    }
}

/// Iterator returned by [`Table::iter_rows`].
pub struct RowIter<'a, F> {
    table: &'a Table,
    next: usize,
    end: usize,
    f: F,
}

impl<T, F> Iterator for RowIter<'_, F>
where
    F: FnMut(&Table, usize) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next >= self.end {
            return None;
        }

        let row = self.next;
        self.next += 1;

        Some((self.f)(self.table, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<T, F> ExactSizeIterator for RowIter<'_, F> where F: FnMut(&Table, usize) -> T {}

impl<T, F> FusedIterator for RowIter<'_, F> where F: FnMut(&Table, usize) -> T {}

impl<F> fmt::Debug for RowIter<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowIter")
            .field("next", &self.next)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

fn kind_mismatch(column: usize, actual: ColumnKind, expected: &str) -> TableError {
    table_error!(
        ErrorKind::ColumnKindMismatch,
        "Column kind does not match the accessor",
        format!("column {column} is of kind {actual}, expected {expected}")
    )
}
