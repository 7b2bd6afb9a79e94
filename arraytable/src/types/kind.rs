use std::fmt;

use crate::types::Cell;

/// Element kind of a column.
///
/// A column's kind is fixed when the column is created and decides how its elements are
/// laid out, compared and swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// 32-bit signed integers.
    Int,
    /// 64-bit signed integers.
    Long,
    /// 32-bit floats.
    Float,
    /// 64-bit floats.
    Double,
    /// Booleans.
    Bool,
    /// Arbitrary [`Cell`] values, including [`Cell::Null`].
    Object,
}

impl ColumnKind {
    /// Returns `true` for every kind except [`ColumnKind::Object`].
    pub fn is_primitive(self) -> bool {
        !matches!(self, ColumnKind::Object)
    }

    /// Returns `true` for the two integer kinds.
    pub fn is_integer(self) -> bool {
        matches!(self, ColumnKind::Int | ColumnKind::Long)
    }

    /// Returns `true` for the two floating point kinds.
    pub fn is_floating(self) -> bool {
        matches!(self, ColumnKind::Float | ColumnKind::Double)
    }

    /// Returns the kind a column would need to store `cell` without conversion.
    pub fn of_cell(cell: &Cell) -> ColumnKind {
        match cell {
            Cell::I32(_) => ColumnKind::Int,
            Cell::I64(_) => ColumnKind::Long,
            Cell::F32(_) => ColumnKind::Float,
            Cell::F64(_) => ColumnKind::Double,
            Cell::Bool(_) => ColumnKind::Bool,
            _ => ColumnKind::Object,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Int => "int",
            ColumnKind::Long => "long",
            ColumnKind::Float => "float",
            ColumnKind::Double => "double",
            ColumnKind::Bool => "bool",
            ColumnKind::Object => "object",
        };

        f.write_str(name)
    }
}
