use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// A single untyped value moving in or out of a table.
///
/// Primitive columns accept the matching numeric or boolean variant (see
/// [`crate::conversions::numeric`] for the allowed widenings). Object columns store cells
/// as-is, with [`Cell::Null`] standing for an absent reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
}

impl Cell {
    /// Returns `true` if this cell is [`Cell::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Returns the string slice if this cell holds a [`Cell::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the name of the cell variant, used in error details.
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Null => "null",
            Cell::Bool(_) => "bool",
            Cell::I32(_) => "i32",
            Cell::I64(_) => "i64",
            Cell::F32(_) => "f32",
            Cell::F64(_) => "f64",
            Cell::String(_) => "string",
            Cell::Bytes(_) => "bytes",
            Cell::Uuid(_) => "uuid",
            Cell::Date(_) => "date",
            Cell::Timestamp(_) => "timestamp",
            Cell::TimestampTz(_) => "timestamptz",
        }
    }

    /// Compares two cells by their natural order.
    ///
    /// Nulls sort first. Cells of different variants order by variant, cells of the same
    /// variant by value; floating point values use the IEEE 754 total order so the result
    /// is a total order even in the presence of NaN.
    pub fn natural_cmp(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Null, Cell::Null) => Ordering::Equal,
            (Cell::Bool(a), Cell::Bool(b)) => a.cmp(b),
            (Cell::I32(a), Cell::I32(b)) => a.cmp(b),
            (Cell::I64(a), Cell::I64(b)) => a.cmp(b),
            (Cell::F32(a), Cell::F32(b)) => a.total_cmp(b),
            (Cell::F64(a), Cell::F64(b)) => a.total_cmp(b),
            (Cell::String(a), Cell::String(b)) => a.cmp(b),
            (Cell::Bytes(a), Cell::Bytes(b)) => a.cmp(b),
            (Cell::Uuid(a), Cell::Uuid(b)) => a.cmp(b),
            (Cell::Date(a), Cell::Date(b)) => a.cmp(b),
            (Cell::Timestamp(a), Cell::Timestamp(b)) => a.cmp(b),
            (Cell::TimestampTz(a), Cell::TimestampTz(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Cell::Null => 0,
            Cell::Bool(_) => 1,
            Cell::I32(_) => 2,
            Cell::I64(_) => 3,
            Cell::F32(_) => 4,
            Cell::F64(_) => 5,
            Cell::String(_) => 6,
            Cell::Bytes(_) => 7,
            Cell::Uuid(_) => 8,
            Cell::Date(_) => 9,
            Cell::Timestamp(_) => 10,
            Cell::TimestampTz(_) => 11,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "null"),
            Cell::Bool(value) => write!(f, "{value}"),
            Cell::I32(value) => write!(f, "{value}"),
            Cell::I64(value) => write!(f, "{value}"),
            Cell::F32(value) => write!(f, "{value}"),
            Cell::F64(value) => write!(f, "{value}"),
            Cell::String(value) => write!(f, "{value}"),
            Cell::Bytes(value) => {
                write!(f, "\\x")?;
                for byte in value {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Cell::Uuid(value) => write!(f, "{value}"),
            Cell::Date(value) => write!(f, "{value}"),
            Cell::Timestamp(value) => write!(f, "{value}"),
            Cell::TimestampTz(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! impl_from_for_cell {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Cell {
                fn from(value: $ty) -> Self {
                    Cell::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_cell! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveDateTime => Timestamp,
    DateTime<Utc> => TimestampTz,
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::String(value.to_owned())
    }
}

impl<T> From<Option<T>> for Cell
where
    T: Into<Cell>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nulls_sort_before_everything() {
        assert_eq!(Cell::Null.natural_cmp(&Cell::Bool(false)), Ordering::Less);
        assert_eq!(Cell::from("a").natural_cmp(&Cell::Null), Ordering::Greater);
        assert_eq!(Cell::Null.natural_cmp(&Cell::Null), Ordering::Equal);
    }

    #[test]
    fn same_variant_compares_by_value() {
        assert_eq!(Cell::from("a").natural_cmp(&Cell::from("b")), Ordering::Less);
        assert_eq!(Cell::I64(9).natural_cmp(&Cell::I64(-9)), Ordering::Greater);
        assert_eq!(
            Cell::F64(f64::NAN).natural_cmp(&Cell::F64(f64::INFINITY)),
            Ordering::Greater
        );
    }

    #[test]
    fn option_none_becomes_null() {
        let missing: Option<String> = None;

        assert!(Cell::from(missing).is_null());
        assert_eq!(Cell::from(Some(3)), Cell::I32(3));
    }

    #[test]
    fn bytes_render_as_hex() {
        assert_eq!(Cell::Bytes(vec![0x01, 0xab]).to_string(), "\\x01ab");
    }
}
