use std::cmp::Ordering;

use crate::conversions::numeric::{
    cell_to_bool, cell_to_f32, cell_to_f64, cell_to_i32, cell_to_i64,
};
use crate::error::TableResult;
use crate::types::{Cell, ColumnKind};

/// Runs `$body` with `$v` bound to the backing vector of whichever variant `$data` holds.
macro_rules! with_vec {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            ColumnData::Int($v) => $body,
            ColumnData::Long($v) => $body,
            ColumnData::Float($v) => $body,
            ColumnData::Double($v) => $body,
            ColumnData::Bool($v) => $body,
            ColumnData::Object($v) => $body,
        }
    };
}

/// Backing array of one column.
///
/// The vector length is the column capacity; only the first `row_count` elements (tracked by
/// the owning table) are meaningful. Elements past that prefix hold default values.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Bool(Vec<bool>),
    Object(Vec<Cell>),
}

impl ColumnData {
    /// Allocates a column of `kind` holding `capacity` default elements.
    pub fn allocate(kind: ColumnKind, capacity: usize) -> TableResult<ColumnData> {
        let data = match kind {
            ColumnKind::Int => ColumnData::Int(allocate_filled(capacity)?),
            ColumnKind::Long => ColumnData::Long(allocate_filled(capacity)?),
            ColumnKind::Float => ColumnData::Float(allocate_filled(capacity)?),
            ColumnKind::Double => ColumnData::Double(allocate_filled(capacity)?),
            ColumnKind::Bool => ColumnData::Bool(allocate_filled(capacity)?),
            ColumnKind::Object => ColumnData::Object(allocate_filled(capacity)?),
        };

        Ok(data)
    }

    /// Returns the element kind of this column.
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Int(_) => ColumnKind::Int,
            ColumnData::Long(_) => ColumnKind::Long,
            ColumnData::Float(_) => ColumnKind::Float,
            ColumnData::Double(_) => ColumnKind::Double,
            ColumnData::Bool(_) => ColumnKind::Bool,
            ColumnData::Object(_) => ColumnKind::Object,
        }
    }

    /// Returns the length of the backing array.
    pub fn len(&self) -> usize {
        with_vec!(self, v => v.len())
    }

    /// Returns `true` if the backing array is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserves room for `additional` more elements without changing the length.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> TableResult<()> {
        with_vec!(self, v => v.try_reserve_exact(additional))?;

        Ok(())
    }

    /// Extends the backing array with default elements up to `capacity`.
    ///
    /// Expects the room to have been reserved with [`ColumnData::try_reserve`].
    pub(crate) fn extend_to(&mut self, capacity: usize) {
        with_vec!(self, v => v.resize(capacity, Default::default()))
    }

    /// Returns a copy of the first `valid` elements.
    pub(crate) fn prefix(&self, valid: usize) -> ColumnData {
        match self {
            ColumnData::Int(v) => ColumnData::Int(v[..valid].to_vec()),
            ColumnData::Long(v) => ColumnData::Long(v[..valid].to_vec()),
            ColumnData::Float(v) => ColumnData::Float(v[..valid].to_vec()),
            ColumnData::Double(v) => ColumnData::Double(v[..valid].to_vec()),
            ColumnData::Bool(v) => ColumnData::Bool(v[..valid].to_vec()),
            ColumnData::Object(v) => ColumnData::Object(v[..valid].to_vec()),
        }
    }

    /// Swaps the elements at `i` and `j`.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        with_vec!(self, v => v.swap(i, j))
    }

    /// Compares the elements at `i` and `j` by natural order.
    pub(crate) fn compare(&self, i: usize, j: usize) -> Ordering {
        match self {
            ColumnData::Int(v) => v[i].cmp(&v[j]),
            ColumnData::Long(v) => v[i].cmp(&v[j]),
            ColumnData::Float(v) => v[i].total_cmp(&v[j]),
            ColumnData::Double(v) => v[i].total_cmp(&v[j]),
            ColumnData::Bool(v) => v[i].cmp(&v[j]),
            ColumnData::Object(v) => v[i].natural_cmp(&v[j]),
        }
    }

    /// Moves the elements in `[index, valid)` one slot to the right.
    ///
    /// Requires `valid < self.len()`. The element previously at `valid` ends up at `index`
    /// and is expected to be overwritten by the caller.
    pub(crate) fn shift_right(&mut self, index: usize, valid: usize) {
        with_vec!(self, v => v[index..=valid].rotate_right(1))
    }

    /// Moves the elements in `(index, valid)` one slot to the left.
    ///
    /// The element removed from `index` ends up at `valid - 1`; object columns release it.
    pub(crate) fn shift_left(&mut self, index: usize, valid: usize) {
        with_vec!(self, v => v[index..valid].rotate_left(1));
        self.release(valid - 1..valid);
    }

    /// Drops the object references held in `range`. No-op for primitive columns.
    pub(crate) fn release(&mut self, range: std::ops::Range<usize>) {
        if let ColumnData::Object(v) = self {
            v[range].fill(Cell::Null);
        }
    }

    /// Reads the element at `row` as a [`Cell`].
    pub(crate) fn cell(&self, row: usize) -> Cell {
        match self {
            ColumnData::Int(v) => Cell::I32(v[row]),
            ColumnData::Long(v) => Cell::I64(v[row]),
            ColumnData::Float(v) => Cell::F32(v[row]),
            ColumnData::Double(v) => Cell::F64(v[row]),
            ColumnData::Bool(v) => Cell::Bool(v[row]),
            ColumnData::Object(v) => v[row].clone(),
        }
    }

    /// Writes `cell` at `row`, widening it into the column kind.
    ///
    /// Callers validate the value first; a value that does not fit leaves the slot as is.
    pub(crate) fn write_cell(&mut self, row: usize, cell: Cell) {
        match self {
            ColumnData::Int(v) => write_converted(&mut v[row], cell_to_i32(&cell)),
            ColumnData::Long(v) => write_converted(&mut v[row], cell_to_i64(&cell)),
            ColumnData::Float(v) => write_converted(&mut v[row], cell_to_f32(&cell)),
            ColumnData::Double(v) => write_converted(&mut v[row], cell_to_f64(&cell)),
            ColumnData::Bool(v) => write_converted(&mut v[row], cell_to_bool(&cell)),
            ColumnData::Object(v) => v[row] = cell,
        }
    }

    pub fn as_i32(&self) -> Option<&[i32]> {
        match self {
            ColumnData::Int(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<&[i64]> {
        match self {
            ColumnData::Long(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            ColumnData::Float(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            ColumnData::Double(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<&[bool]> {
        match self {
            ColumnData::Bool(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_objects(&self) -> Option<&[Cell]> {
        match self {
            ColumnData::Object(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

macro_rules! impl_from_vec_for_column_data {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for ColumnData {
                fn from(values: Vec<$ty>) -> Self {
                    ColumnData::$variant(values)
                }
            }
        )*
    };
}

impl_from_vec_for_column_data! {
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    Cell => Object,
}

/// Single column of a table: its backing array plus an optional display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub(crate) name: Option<String>,
    pub(crate) data: ColumnData,
}

impl Column {
    pub(crate) fn new(data: ColumnData) -> Self {
        Self { name: None, data }
    }

    /// Returns the column name, if one was assigned.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the element kind of the column.
    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    /// Returns the backing array, including the unused tail past the valid rows.
    pub fn data(&self) -> &ColumnData {
        &self.data
    }
}

fn write_converted<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn allocate_filled<T: Clone + Default>(capacity: usize) -> TableResult<Vec<T>> {
    let mut values = Vec::new();
    values.try_reserve_exact(capacity)?;
    values.resize(capacity, T::default());

    Ok(values)
}
