//! Value and schema types shared by every part of the table engine.
//!
//! [`Cell`] is the untyped value exchanged through row-level APIs and stored by object
//! columns; [`ColumnKind`] names the element kind of a column.

mod cell;
mod kind;

pub use cell::*;
pub use kind::*;
