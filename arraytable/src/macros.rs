//! Macros for table error handling.
//!
//! Provides convenience macros for creating and returning [`crate::error::TableError`]
//! instances with reduced boilerplate for precondition checks.

/// Creates a [`crate::error::TableError`] from error kind and description.
///
/// Accepts an optional dynamic detail (use `detail =` to move an owned [`String`]) and an
/// optional source error.
#[macro_export]
macro_rules! table_error {
    ($kind:expr, $desc:expr) => {
        $crate::error::TableError::from(($kind, $desc))
    };
    ($kind:expr, $desc:expr, source: $source:expr) => {
        $crate::error::TableError::from(($kind, $desc)).with_source($source)
    };
    ($kind:expr, $desc:expr, detail = $detail:expr) => {
        $crate::error::TableError::from(($kind, $desc, $detail))
    };
    ($kind:expr, $desc:expr, $detail:expr) => {
        $crate::error::TableError::from(($kind, $desc, $detail.to_string()))
    };
}

/// Creates and returns a [`crate::error::TableError`] from the current function.
///
/// Supports the same optional detail and source arguments as [`table_error!`].
#[macro_export]
macro_rules! bail {
    ($kind:expr, $desc:expr) => {
        return ::core::result::Result::Err($crate::table_error!($kind, $desc))
    };
    ($kind:expr, $desc:expr, source: $source:expr) => {
        return ::core::result::Result::Err($crate::table_error!($kind, $desc, source: $source))
    };
    ($kind:expr, $desc:expr, detail = $detail:expr) => {
        return ::core::result::Result::Err($crate::table_error!($kind, $desc, detail = $detail))
    };
    ($kind:expr, $desc:expr, $detail:expr) => {
        return ::core::result::Result::Err($crate::table_error!($kind, $desc, $detail))
    };
}

/// Builds a row of [`crate::types::Cell`] values, converting each expression with
/// [`From`].
///
/// ```
/// use arraytable::cells;
/// use arraytable::types::Cell;
///
/// let row = cells![1i32, "one", None::<i64>];
///
/// assert_eq!(row, vec![Cell::I32(1), Cell::from("one"), Cell::Null]);
/// ```
#[macro_export]
macro_rules! cells {
    ($($value:expr),* $(,)?) => {
        ::std::vec![$($crate::types::Cell::from($value)),*]
    };
}
