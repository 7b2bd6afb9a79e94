use std::cmp::Ordering;
use std::ops::RangeBounds;

use tracing::trace;

use crate::bail;
use crate::compare::CellOrdering;
use crate::conversions::numeric::{
    cell_to_bool, cell_to_f32, cell_to_f64, cell_to_i32, cell_to_i64,
};
use crate::error::{ErrorKind, TableResult};
use crate::search::{SearchOutcome, bounds, resolve_range};
use crate::store::ColumnData;
use crate::table::Table;
use crate::types::{Cell, ColumnKind};

/// Key of a [`SearchStep`], already converted to the step's column kind.
#[derive(Debug, Clone)]
enum StepKey {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Object(Cell),
}

/// One column of a [`MultikeyBinarySearch`] together with the key searched in it.
#[derive(Debug, Clone)]
pub struct SearchStep {
    column: usize,
    kind: ColumnKind,
    ordering: CellOrdering,
    key: Option<StepKey>,
}

impl SearchStep {
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the column kind this step was declared for.
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    fn set_key(&mut self, index: usize, value: Cell) -> TableResult<()> {
        let key = match self.kind {
            ColumnKind::Int => cell_to_i32(&value).map(StepKey::Int),
            ColumnKind::Long => cell_to_i64(&value).map(StepKey::Long),
            ColumnKind::Float => cell_to_f32(&value).map(StepKey::Float),
            ColumnKind::Double => cell_to_f64(&value).map(StepKey::Double),
            ColumnKind::Bool => cell_to_bool(&value).map(StepKey::Bool),
            ColumnKind::Object => Some(StepKey::Object(value.clone())),
        };

        let Some(key) = key else {
            bail!(
                ErrorKind::ConversionError,
                "Key does not match the search step",
                format!(
                    "step {index} searches a {} column and cannot use a {} key",
                    self.kind,
                    value.type_name()
                )
            );
        };
        self.key = Some(key);

        Ok(())
    }

    /// Returns the key and the column data this step reads, after checking the column can
    /// be read as the step's kind.
    fn bind<'a>(
        &'a self,
        index: usize,
        table: &'a Table,
    ) -> TableResult<(&'a StepKey, &'a ColumnData)> {
        let actual = table.column_kind(self.column)?;
        // Long steps also read int columns, double steps int and float columns.
        let readable = actual == self.kind
            || (self.kind == ColumnKind::Long && actual == ColumnKind::Int)
            || (self.kind == ColumnKind::Double
                && matches!(actual, ColumnKind::Int | ColumnKind::Float));

        if !readable {
            bail!(
                ErrorKind::ColumnKindMismatch,
                "Column kind does not match the search step",
                format!(
                    "step {index} searches a {} column but column {} is of kind {actual}",
                    self.kind, self.column
                )
            );
        }

        let Some(key) = &self.key else {
            bail!(
                ErrorKind::InvalidState,
                "Search key is not set",
                format!("step {index} on column {} has no key", self.column)
            );
        };

        match table.column_data(self.column) {
            Some(data) => Ok((key, data)),
            None => bail!(ErrorKind::ColumnOutOfRange, "Column index out of range"),
        }
    }

    /// Compares the element at `row` of `data` with `key`.
    fn compare(&self, key: &StepKey, data: &ColumnData, row: usize) -> Ordering {
        match (key, data) {
            (StepKey::Int(key), ColumnData::Int(values)) => values[row].cmp(key),
            (StepKey::Long(key), ColumnData::Int(values)) => i64::from(values[row]).cmp(key),
            (StepKey::Long(key), ColumnData::Long(values)) => values[row].cmp(key),
            (StepKey::Float(key), ColumnData::Float(values)) => values[row].total_cmp(key),
            (StepKey::Double(key), ColumnData::Int(values)) => {
                f64::from(values[row]).total_cmp(key)
            }
            (StepKey::Double(key), ColumnData::Float(values)) => {
                f64::from(values[row]).total_cmp(key)
            }
            (StepKey::Double(key), ColumnData::Double(values)) => values[row].total_cmp(key),
            (StepKey::Bool(key), ColumnData::Bool(values)) => values[row].cmp(key),
            (StepKey::Object(key), ColumnData::Object(values)) => {
                self.ordering.compare_nulls_first(&values[row], key)
            }
            _ => Ordering::Equal,
        }
    }
}

/// Binary search over rows sorted by several columns at once.
///
/// Steps are compared in declaration order at every probe; the first step whose column
/// differs from its key decides the direction. Keys are set with
/// [`MultikeyBinarySearch::set_key`] and may be changed between searches.
///
/// ```
/// use arraytable::search::MultikeyBinarySearch;
/// use arraytable::store::ColumnData;
/// use arraytable::table::Table;
/// use arraytable::types::Cell;
///
/// let table = Table::from_columns_owning(vec![
///     ColumnData::from(vec![0i32, 0, 1, 1]),
///     ColumnData::from(vec![Cell::from("a"), Cell::from("b"), Cell::from("a"), Cell::from("b")]),
/// ])
/// .unwrap();
///
/// let mut search = MultikeyBinarySearch::builder()
///     .add_int_asc(0)
///     .add_object(1, Default::default())
///     .build();
/// search.set_key(0, 1i32).unwrap();
/// search.set_key(1, "b").unwrap();
///
/// assert_eq!(search.search(&table).unwrap().found(), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct MultikeyBinarySearch {
    steps: Vec<SearchStep>,
}

impl MultikeyBinarySearch {
    pub fn builder() -> MultikeyBinarySearchBuilder {
        MultikeyBinarySearchBuilder::default()
    }

    pub fn steps(&self) -> &[SearchStep] {
        &self.steps
    }

    /// Sets the key of step `step`.
    ///
    /// The key is converted into the step's column kind with the same widening rules as
    /// row values.
    pub fn set_key(&mut self, step: usize, key: impl Into<Cell>) -> TableResult<()> {
        let count = self.steps.len();
        let Some(target) = self.steps.get_mut(step) else {
            bail!(
                ErrorKind::InvalidState,
                "Search step does not exist",
                format!("step {step} requested, search has {count} steps")
            );
        };

        target.set_key(step, key.into())
    }

    /// Searches all rows of `table`.
    pub fn search(&self, table: &Table) -> TableResult<SearchOutcome> {
        self.search_range(table, ..)
    }

    /// Searches the rows of `table` inside `rows`.
    pub fn search_range(
        &self,
        table: &Table,
        rows: impl RangeBounds<usize>,
    ) -> TableResult<SearchOutcome> {
        let rows = resolve_range(rows, table.row_count())?;
        let bound = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| Ok((step, step.bind(index, table)?)))
            .collect::<TableResult<Vec<_>>>()?;

        trace!(steps = bound.len(), ?rows, "running multi-key search");

        Ok(bounds::search_by(rows, |row| {
            bound
                .iter()
                .map(|(step, (key, data))| step.compare(key, data, row))
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        }))
    }
}

/// Builder for [`MultikeyBinarySearch`].
#[derive(Debug, Clone, Default)]
pub struct MultikeyBinarySearchBuilder {
    steps: Vec<SearchStep>,
}

impl MultikeyBinarySearchBuilder {
    fn push(mut self, column: usize, kind: ColumnKind, ordering: CellOrdering) -> Self {
        self.steps.push(SearchStep {
            column,
            kind,
            ordering,
            key: None,
        });
        self
    }

    /// Adds a step over an ascending `int` column.
    pub fn add_int_asc(self, column: usize) -> Self {
        self.push(column, ColumnKind::Int, CellOrdering::natural())
    }

    /// Adds a step over an ascending `int` or `long` column.
    pub fn add_long_asc(self, column: usize) -> Self {
        self.push(column, ColumnKind::Long, CellOrdering::natural())
    }

    /// Adds a step over an ascending `float` column.
    pub fn add_float_asc(self, column: usize) -> Self {
        self.push(column, ColumnKind::Float, CellOrdering::natural())
    }

    /// Adds a step over an ascending `int`, `float` or `double` column.
    pub fn add_double_asc(self, column: usize) -> Self {
        self.push(column, ColumnKind::Double, CellOrdering::natural())
    }

    /// Adds a step over an ascending `bool` column, `false` first.
    pub fn add_bool_asc(self, column: usize) -> Self {
        self.push(column, ColumnKind::Bool, CellOrdering::natural())
    }

    /// Adds a step over an object column sorted by `ordering`, nulls first.
    pub fn add_object(self, column: usize, ordering: CellOrdering) -> Self {
        self.push(column, ColumnKind::Object, ordering)
    }

    pub fn build(self) -> MultikeyBinarySearch {
        MultikeyBinarySearch { steps: self.steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Table {
        let mut numbers = Vec::new();
        let mut letters = Vec::new();
        for number in 0..4i64 {
            for letter in ["A", "B", "C"] {
                numbers.push(number);
                letters.push(Cell::from(letter));
            }
        }

        Table::from_columns_owning(vec![ColumnData::from(numbers), ColumnData::from(letters)])
            .unwrap()
    }

    fn search() -> MultikeyBinarySearch {
        MultikeyBinarySearch::builder()
            .add_long_asc(0)
            .add_object(1, CellOrdering::natural())
            .build()
    }

    #[test]
    fn finds_row_matching_every_key() {
        let table = grid();
        let mut search = search();

        search.set_key(0, 1i64).unwrap();
        search.set_key(1, "A").unwrap();

        assert_eq!(search.search(&table).unwrap(), SearchOutcome::Found(3));
    }

    #[test]
    fn int_keys_widen_into_long_steps() {
        let table = grid();
        let mut search = search();

        search.set_key(0, 3i32).unwrap();
        search.set_key(1, "C").unwrap();

        assert_eq!(search.search(&table).unwrap().found(), Some(11));
    }

    #[test]
    fn missing_key_reports_insertion_point() {
        let table = grid();
        let mut search = search();

        search.set_key(0, 2i64).unwrap();
        search.set_key(1, "BB").unwrap();

        assert_eq!(
            search.search(&table).unwrap(),
            SearchOutcome::NotFound { insertion_point: 8 }
        );
    }

    #[test]
    fn range_limits_the_rows_searched() {
        let table = grid();
        let mut search = search();

        search.set_key(0, 0i64).unwrap();
        search.set_key(1, "B").unwrap();

        assert_eq!(
            search.search_range(&table, 3..=11).unwrap(),
            SearchOutcome::NotFound { insertion_point: 3 }
        );
        assert_eq!(
            search.search_range(&table, 0..12).unwrap(),
            SearchOutcome::Found(1)
        );
    }

    #[test]
    fn unset_key_is_invalid_state() {
        let table = grid();
        let mut search = search();

        search.set_key(0, 1i64).unwrap();

        let err = search.search(&table).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(err.detail(), Some("step 1 on column 1 has no key"));
    }

    #[test]
    fn keys_are_kind_checked() {
        let mut search = search();

        let err = search.set_key(0, 1.5f64).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConversionError);

        let err = search.set_key(2, 1i64).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn steps_must_match_column_kinds() {
        let table = grid();
        let mut search = MultikeyBinarySearch::builder().add_int_asc(1).build();
        search.set_key(0, 1i32).unwrap();

        let err = search.search(&table).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ColumnKindMismatch);
    }

    #[test]
    fn bool_and_double_steps() {
        let table = Table::from_columns_owning(vec![
            ColumnData::from(vec![false, false, true, true]),
            ColumnData::from(vec![0.5f32, 1.5, 0.5, 1.5]),
        ])
        .unwrap();
        let mut search = MultikeyBinarySearch::builder()
            .add_bool_asc(0)
            .add_double_asc(1)
            .build();

        search.set_key(0, true).unwrap();
        search.set_key(1, 1.5f64).unwrap();

        assert_eq!(search.search(&table).unwrap().found(), Some(3));
    }
}
