use std::cmp::Ordering;
use std::sync::Arc;

use crate::compare::{
    FloatRowComparator, IntRowComparator, NaturalRowComparator, ObjectRowComparator,
    RowComparator, SortOrder,
};
use crate::error::TableResult;
use crate::table::Table;
use crate::types::ColumnKind;

/// One step of a [`ChainedRowComparator`].
#[derive(Debug, Clone)]
pub enum CompareStep {
    Int(IntRowComparator),
    Float(FloatRowComparator),
    Natural(NaturalRowComparator),
    Object(ObjectRowComparator),
    Custom(Arc<dyn RowComparator>),
}

impl RowComparator for CompareStep {
    fn compare(&self, table: &Table, row_a: usize, row_b: usize) -> Ordering {
        match self {
            CompareStep::Int(step) => step.compare(table, row_a, row_b),
            CompareStep::Float(step) => step.compare(table, row_a, row_b),
            CompareStep::Natural(step) => step.compare(table, row_a, row_b),
            CompareStep::Object(step) => step.compare(table, row_a, row_b),
            CompareStep::Custom(step) => step.compare(table, row_a, row_b),
        }
    }

    fn validate(&self, kinds: &[ColumnKind]) -> TableResult<()> {
        match self {
            CompareStep::Int(step) => step.validate(kinds),
            CompareStep::Float(step) => step.validate(kinds),
            CompareStep::Natural(step) => step.validate(kinds),
            CompareStep::Object(step) => step.validate(kinds),
            CompareStep::Custom(step) => step.validate(kinds),
        }
    }
}

impl From<IntRowComparator> for CompareStep {
    fn from(step: IntRowComparator) -> Self {
        CompareStep::Int(step)
    }
}

impl From<FloatRowComparator> for CompareStep {
    fn from(step: FloatRowComparator) -> Self {
        CompareStep::Float(step)
    }
}

impl From<NaturalRowComparator> for CompareStep {
    fn from(step: NaturalRowComparator) -> Self {
        CompareStep::Natural(step)
    }
}

impl From<ObjectRowComparator> for CompareStep {
    fn from(step: ObjectRowComparator) -> Self {
        CompareStep::Object(step)
    }
}

impl From<Arc<dyn RowComparator>> for CompareStep {
    fn from(step: Arc<dyn RowComparator>) -> Self {
        CompareStep::Custom(step)
    }
}

/// Lexicographic composition of comparators.
///
/// Steps run in order and the first one that does not report [`Ordering::Equal`] decides.
/// A chain without steps considers every pair of rows equal.
#[derive(Debug, Clone, Default)]
pub struct ChainedRowComparator {
    steps: Vec<CompareStep>,
}

impl ChainedRowComparator {
    pub fn new(steps: Vec<CompareStep>) -> Self {
        Self { steps }
    }

    /// Starts a builder that picks a comparator per column from the kinds of `table`.
    pub fn builder(table: &Table) -> ChainedRowComparatorBuilder {
        ChainedRowComparatorBuilder {
            kinds: table.column_kinds(),
            steps: Vec::new(),
        }
    }

    pub fn steps(&self) -> &[CompareStep] {
        &self.steps
    }
}

impl RowComparator for ChainedRowComparator {
    fn compare(&self, table: &Table, row_a: usize, row_b: usize) -> Ordering {
        for step in &self.steps {
            let ordering = step.compare(table, row_a, row_b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }

    fn validate(&self, kinds: &[ColumnKind]) -> TableResult<()> {
        for step in &self.steps {
            step.validate(kinds)?;
        }

        Ok(())
    }
}

/// Builder for [`ChainedRowComparator`].
///
/// Column steps are resolved against the column kinds captured when the builder was
/// created; unknown columns are reported by [`ChainedRowComparatorBuilder::build`].
#[derive(Debug, Clone)]
pub struct ChainedRowComparatorBuilder {
    kinds: Vec<ColumnKind>,
    steps: Vec<CompareStep>,
}

impl ChainedRowComparatorBuilder {
    /// Appends an explicit step.
    pub fn add(mut self, step: impl Into<CompareStep>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Appends an ascending step on `column`.
    pub fn by_column_asc(self, column: usize) -> Self {
        self.by_column(column, SortOrder::Ascending)
    }

    /// Appends a descending step on `column`.
    pub fn by_column_desc(self, column: usize) -> Self {
        self.by_column(column, SortOrder::Descending)
    }

    fn by_column(self, column: usize, order: SortOrder) -> Self {
        let step = match self.kinds.get(column) {
            Some(kind) if kind.is_integer() => {
                CompareStep::Int(IntRowComparator::new(column, order))
            }
            Some(kind) if kind.is_floating() => {
                CompareStep::Float(FloatRowComparator::new(column, order))
            }
            _ => CompareStep::Natural(NaturalRowComparator::new(column, order)),
        };

        self.add(step)
    }

    /// Checks every step against the captured column kinds and builds the comparator.
    pub fn build(self) -> TableResult<ChainedRowComparator> {
        let comparator = ChainedRowComparator::new(self.steps);
        comparator.validate(&self.kinds)?;

        Ok(comparator)
    }
}
