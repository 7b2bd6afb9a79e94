//! Column oriented, growable in-memory tables with comparator driven sorting and binary
//! searches over sorted columns.

pub mod compare;
pub mod config;
pub mod conversions;
pub mod error;
pub mod macros;
pub mod search;
pub mod store;
pub mod table;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;

pub use table::Table;
