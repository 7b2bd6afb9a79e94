use std::cmp::Ordering;
use std::ops::RangeBounds;

use crate::compare::CellOrdering;
use crate::error::TableResult;
use crate::search::bounds::SearchMode;
use crate::search::{SearchOutcome, resolve_range};
use crate::store::ColumnData;
use crate::table::{Table, kind_mismatch};
use crate::types::Cell;

/// Generates exact, floor and ceil searches over one primitive column kind.
macro_rules! primitive_searches {
    (
        $ty:ty, $as_slice:ident, $kind:literal, $cmp:path,
        $search:ident, $floor:ident, $ceil:ident
    ) => {
        #[doc = concat!("Binary search for `key` over all rows of the `", $kind, "` column `column`.")]
        ///
        /// Any row of a run of equal keys may be returned.
        pub fn $search(&self, column: usize, key: $ty) -> TableResult<SearchOutcome> {
            self.search_column(column, ColumnData::$as_slice, $kind, .., SearchMode::Any, |value| {
                $cmp(value, &key)
            })
        }

        #[doc = concat!("Finds the first row equal to `key` among `rows` of the `", $kind, "` column `column`.")]
        pub fn $floor(
            &self,
            column: usize,
            key: $ty,
            rows: impl RangeBounds<usize>,
        ) -> TableResult<SearchOutcome> {
            self.search_column(column, ColumnData::$as_slice, $kind, rows, SearchMode::First, |value| {
                $cmp(value, &key)
            })
        }

        #[doc = concat!("Finds the last row equal to `key` among `rows` of the `", $kind, "` column `column`.")]
        pub fn $ceil(
            &self,
            column: usize,
            key: $ty,
            rows: impl RangeBounds<usize>,
        ) -> TableResult<SearchOutcome> {
            self.search_column(column, ColumnData::$as_slice, $kind, rows, SearchMode::Last, |value| {
                $cmp(value, &key)
            })
        }
    };
}

impl Table {
    primitive_searches!(
        i32, as_i32, "int", i32::cmp,
        binary_search_i32, floor_i32, ceil_i32
    );
    primitive_searches!(
        i64, as_i64, "long", i64::cmp,
        binary_search_i64, floor_i64, ceil_i64
    );
    primitive_searches!(
        f32, as_f32, "float", f32::total_cmp,
        binary_search_f32, floor_f32, ceil_f32
    );
    primitive_searches!(
        f64, as_f64, "double", f64::total_cmp,
        binary_search_f64, floor_f64, ceil_f64
    );

    /// Binary search for `key` over all rows of an object column sorted by `ordering`.
    ///
    /// Nulls are expected first, the way [`crate::compare::ObjectRowComparator`] sorts them.
    pub fn binary_search_object(
        &self,
        column: usize,
        key: &Cell,
        ordering: &CellOrdering,
    ) -> TableResult<SearchOutcome> {
        self.search_objects(column, key, .., ordering, SearchMode::Any)
    }

    /// Finds the first row equal to `key` among `rows` of an object column.
    pub fn floor_object(
        &self,
        column: usize,
        key: &Cell,
        rows: impl RangeBounds<usize>,
        ordering: &CellOrdering,
    ) -> TableResult<SearchOutcome> {
        self.search_objects(column, key, rows, ordering, SearchMode::First)
    }

    /// Finds the last row equal to `key` among `rows` of an object column.
    pub fn ceil_object(
        &self,
        column: usize,
        key: &Cell,
        rows: impl RangeBounds<usize>,
        ordering: &CellOrdering,
    ) -> TableResult<SearchOutcome> {
        self.search_objects(column, key, rows, ordering, SearchMode::Last)
    }

    fn search_objects(
        &self,
        column: usize,
        key: &Cell,
        rows: impl RangeBounds<usize>,
        ordering: &CellOrdering,
        mode: SearchMode,
    ) -> TableResult<SearchOutcome> {
        self.search_column(column, ColumnData::as_objects, "object", rows, mode, |value| {
            ordering.compare_nulls_first(value, key)
        })
    }

    /// Runs `mode` over `rows` of `column`, probing each element with `compare`.
    fn search_column<T>(
        &self,
        column: usize,
        as_slice: fn(&ColumnData) -> Option<&[T]>,
        expected: &str,
        rows: impl RangeBounds<usize>,
        mode: SearchMode,
        compare: impl Fn(&T) -> Ordering,
    ) -> TableResult<SearchOutcome> {
        let data = self.store.column(column)?.data();
        let Some(values) = as_slice(data) else {
            return Err(kind_mismatch(column, data.kind(), expected));
        };
        let rows = resolve_range(rows, self.row_count)?;

        Ok(mode.run(rows, |row| compare(&values[row])))
    }
}
