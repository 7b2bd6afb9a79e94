use crate::bail;
use crate::conversions::numeric::ensure_assignable;
use crate::error::{ErrorKind, TableResult};
use crate::table::Table;
use crate::types::Cell;

impl Table {
    /// Appends a row, growing the columns when they are full.
    ///
    /// `values` must hold one value per column. Every value is checked against its column
    /// before anything is written, so a rejected row leaves the table untouched.
    pub fn add_row<I>(&mut self, values: I) -> TableResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        let values = self.prepare_row(values)?;
        let row = self.row_count;

        self.store.ensure_capacity(row + 1)?;
        self.write_row(row, values);
        self.row_count += 1;

        Ok(())
    }

    /// Inserts a row at `index`, moving the rows at and after `index` down by one.
    ///
    /// `index` may equal `row_count`, which appends.
    pub fn insert_at<I>(&mut self, index: usize, values: I) -> TableResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        if index > self.row_count {
            bail!(
                ErrorKind::RowOutOfRange,
                "Insert position out of range",
                format!(
                    "position {index} is past the end of a table with {} rows",
                    self.row_count
                )
            );
        }

        let values = self.prepare_row(values)?;
        let rows = self.row_count;

        self.store.ensure_capacity(rows + 1)?;
        for column in self.store.columns_mut() {
            column.data.shift_right(index, rows);
        }
        self.write_row(index, values);
        self.row_count += 1;

        Ok(())
    }

    /// Removes the row at `index`, keeping the relative order of the remaining rows.
    pub fn delete_row(&mut self, index: usize) -> TableResult<()> {
        self.check_row(index)?;

        let rows = self.row_count;
        for column in self.store.columns_mut() {
            column.data.shift_left(index, rows);
        }
        self.row_count -= 1;

        Ok(())
    }

    /// Removes every row. The capacity is kept.
    pub fn clear(&mut self) {
        let rows = self.row_count;
        for column in self.store.columns_mut() {
            column.data.release(0..rows);
        }
        self.row_count = 0;
    }

    /// Exchanges rows `i` and `j` in every column.
    pub fn swap(&mut self, i: usize, j: usize) -> TableResult<()> {
        self.check_row(i)?;
        self.check_row(j)?;
        self.swap_rows(i, j);

        Ok(())
    }

    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        for column in 0..self.store.columns().len() {
            self.store.element_swap(column, i, j);
        }
    }

    fn prepare_row<I>(&self, values: I) -> TableResult<Vec<Cell>>
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        let values: Vec<Cell> = values.into_iter().map(Into::into).collect();

        let columns = self.store.columns();
        if values.len() != columns.len() {
            bail!(
                ErrorKind::ArityMismatch,
                "Row arity does not match the column count",
                format!(
                    "row has {} values, table has {} columns",
                    values.len(),
                    columns.len()
                )
            );
        }

        for (index, (column, value)) in columns.iter().zip(&values).enumerate() {
            ensure_assignable(column.kind(), index, value)?;
        }

        Ok(values)
    }

    fn write_row(&mut self, row: usize, values: Vec<Cell>) {
        for (column, value) in self.store.columns_mut().iter_mut().zip(values) {
            column.data.write_cell(row, value);
        }
    }
}
