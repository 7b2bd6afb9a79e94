use std::cmp::Ordering;

use crate::compare::RowComparator;
use crate::store::ColumnData;
use crate::table::Table;
use crate::types::{Cell, ColumnKind};

/// Builds a table with a single `int` column holding `values`.
pub fn int_table(values: &[i32]) -> Table {
    Table::from_columns_copy(&[ColumnData::from(values.to_vec())]).unwrap()
}

/// Builds the cross product of `0..numbers` and `letters` as a two column table.
///
/// Column `0` is a `long` column named `number`, column `1` an object column named
/// `letter`. Rows are sorted by number, then letter in the order given.
pub fn letters_table(numbers: i64, letters: &[&str]) -> Table {
    let mut table = Table::with_kinds(0, &[ColumnKind::Long, ColumnKind::Object]).unwrap();
    table.set_column_name(0, "number").unwrap();
    table.set_column_name(1, "letter").unwrap();

    for number in 0..numbers {
        for letter in letters {
            table.add_row([Cell::I64(number), Cell::from(*letter)]).unwrap();
        }
    }

    table
}

/// Reads the valid rows of an `int` column.
///
/// # Panics
///
/// Panics if the column does not exist or is not an `int` column.
pub fn column_i32(table: &Table, column: usize) -> Vec<i32> {
    table
        .iter_rows(|table, row| table.get_i32(row, column).unwrap())
        .collect()
}

/// Reads the valid rows of any column as cells.
pub fn column_cells(table: &Table, column: usize) -> Vec<Cell> {
    table
        .iter_rows(|table, row| table.get(row, column).unwrap())
        .collect()
}

/// Asserts that no row of `table` compares greater than the row after it.
///
/// # Panics
///
/// Panics with the offending row pair when the table is not sorted.
pub fn assert_sorted_by(table: &Table, comparator: &dyn RowComparator) {
    for row in 1..table.row_count() {
        assert_ne!(
            comparator.compare(table, row - 1, row),
            Ordering::Greater,
            "rows {} and {row} are out of order",
            row - 1
        );
    }
}
