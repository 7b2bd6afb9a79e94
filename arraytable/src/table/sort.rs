use std::cmp::Ordering;
use std::sync::Arc;

use rand::Rng;
use tracing::trace;

use crate::compare::RowComparator;
use crate::error::TableResult;
use crate::table::Table;

impl Table {
    /// Sorts the rows in place with `comparator` and keeps it for [`Table::resort`].
    ///
    /// The sort is a heapsort and is not stable: rows that compare equal may end up in any
    /// relative order. The comparator is validated against the column kinds before any row
    /// moves.
    pub fn sort<C>(&mut self, comparator: C) -> TableResult<()>
    where
        C: RowComparator + 'static,
    {
        self.sort_shared(Arc::new(comparator))
    }

    /// Same as [`Table::sort`] for a comparator that is already shared.
    pub fn sort_shared(&mut self, comparator: Arc<dyn RowComparator>) -> TableResult<()> {
        comparator.validate(&self.column_kinds())?;

        self.comparator = Some(Arc::clone(&comparator));
        self.heap_sort(comparator.as_ref());

        Ok(())
    }

    /// Sorts again with the comparator given to the last [`Table::sort`]. Does nothing if
    /// the table was never sorted.
    pub fn resort(&mut self) {
        if let Some(comparator) = self.comparator.clone() {
            self.heap_sort(comparator.as_ref());
        }
    }

    /// Shuffles the rows with a Fisher-Yates pass driven by `rng`.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        trace!(rows = self.row_count, "shuffling table");

        for i in (1..self.row_count).rev() {
            let j = rng.gen_range(0..=i);
            self.swap_rows(i, j);
        }
    }

    /// Shuffles the rows with the thread local generator.
    pub fn shuffle_random(&mut self) {
        self.shuffle(&mut rand::thread_rng());
    }

    fn heap_sort(&mut self, comparator: &dyn RowComparator) {
        if self.row_count < 2 {
            return;
        }

        trace!(rows = self.row_count, ?comparator, "sorting table");

        let mut last = self.row_count - 1;
        for node in (0..=last / 2).rev() {
            self.sift_down(comparator, node, last);
        }

        for end in (1..self.row_count).rev() {
            self.swap_rows(0, end);
            last -= 1;
            self.sift_down(comparator, 0, last);
        }
    }

    /// Restores the max-heap property below `node` for the heap stored in `[0, last]`.
    ///
    /// Children of node `i` are `2 * i` and `2 * i + 1`, so the root's only real child is
    /// row `1`.
    fn sift_down(&mut self, comparator: &dyn RowComparator, mut node: usize, last: usize) {
        loop {
            let left = 2 * node;
            let right = left + 1;

            let mut largest = node;
            if left <= last && comparator.compare(self, left, node) == Ordering::Greater {
                largest = left;
            }
            if right <= last && comparator.compare(self, right, largest) == Ordering::Greater {
                largest = right;
            }

            if largest == node {
                return;
            }

            self.swap_rows(node, largest);
            node = largest;
        }
    }
}
