//! Lossless conversions of [`Cell`] values into primitive column elements.
//!
//! A value is accepted by a primitive column when it has the column's exact kind or when it
//! can be widened without losing information: `i32` into `i64` or `f64`, and `f32` into
//! `f64`. Everything else is rejected instead of being truncated.

use crate::bail;
use crate::error::{ErrorKind, TableResult};
use crate::types::{Cell, ColumnKind};

/// Converts `cell` into an `i32` element.
pub fn cell_to_i32(cell: &Cell) -> Option<i32> {
    match *cell {
        Cell::I32(value) => Some(value),
        _ => None,
    }
}

/// Converts `cell` into an `i64` element, widening `i32`.
pub fn cell_to_i64(cell: &Cell) -> Option<i64> {
    match *cell {
        Cell::I32(value) => Some(i64::from(value)),
        Cell::I64(value) => Some(value),
        _ => None,
    }
}

/// Converts `cell` into an `f32` element.
pub fn cell_to_f32(cell: &Cell) -> Option<f32> {
    match *cell {
        Cell::F32(value) => Some(value),
        _ => None,
    }
}

/// Converts `cell` into an `f64` element, widening `i32` and `f32`.
pub fn cell_to_f64(cell: &Cell) -> Option<f64> {
    match *cell {
        Cell::I32(value) => Some(f64::from(value)),
        Cell::F32(value) => Some(f64::from(value)),
        Cell::F64(value) => Some(value),
        _ => None,
    }
}

/// Converts `cell` into a `bool` element.
pub fn cell_to_bool(cell: &Cell) -> Option<bool> {
    match *cell {
        Cell::Bool(value) => Some(value),
        _ => None,
    }
}

/// Returns `true` if a column of `kind` can store `cell`.
pub fn is_assignable(kind: ColumnKind, cell: &Cell) -> bool {
    match kind {
        ColumnKind::Int => cell_to_i32(cell).is_some(),
        ColumnKind::Long => cell_to_i64(cell).is_some(),
        ColumnKind::Float => cell_to_f32(cell).is_some(),
        ColumnKind::Double => cell_to_f64(cell).is_some(),
        ColumnKind::Bool => cell_to_bool(cell).is_some(),
        ColumnKind::Object => true,
    }
}

/// Fails with [`ErrorKind::ConversionError`] unless column `column` of `kind` can store `cell`.
pub fn ensure_assignable(kind: ColumnKind, column: usize, cell: &Cell) -> TableResult<()> {
    if !is_assignable(kind, cell) {
        bail!(
            ErrorKind::ConversionError,
            "Value cannot be stored in column",
            format!(
                "column {column} of kind {kind} cannot store a {} value",
                cell.type_name()
            )
        );
    }

    Ok(())
}
