use arraytable::Table;
use arraytable::cells;
use arraytable::compare::{
    CellOrdering, ChainedRowComparator, FloatRowComparator, IntRowComparator,
    ObjectRowComparator,
};
use arraytable::error::ErrorKind;
use arraytable::store::ColumnData;
use arraytable::test_utils::init_test_tracing;
use arraytable::test_utils::table::{assert_sorted_by, column_cells, column_i32, letters_table};
use arraytable::types::Cell;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn sort_moves_rows_across_all_columns_test() {
    init_test_tracing();

    let mut table = Table::from_columns_copy(&[
        ColumnData::from(vec![3i32, 1, 5]),
        ColumnData::from(vec![5.3f64, 8.3, 10.3]),
        ColumnData::from(cells!["e", "a", "c"]),
    ])
    .unwrap();

    table.sort(IntRowComparator::asc(0)).unwrap();
    assert_eq!(column_i32(&table, 0), vec![1, 3, 5]);
    assert_eq!(column_cells(&table, 2), cells!["a", "e", "c"]);

    table.sort(ObjectRowComparator::natural(2)).unwrap();
    assert_eq!(column_i32(&table, 0), vec![1, 5, 3]);

    table.sort(FloatRowComparator::desc(1)).unwrap();
    assert_eq!(table.get_f64(0, 1).unwrap(), 10.3);
    assert_eq!(column_cells(&table, 2), cells!["c", "a", "e"]);
}

#[test]
fn resort_is_idempotent_test() {
    let mut table = Table::from_columns_owning(vec![ColumnData::from(vec![
        8i32, 3, 3, 9, -2, 0, 14, 3,
    ])])
    .unwrap();

    table.sort(IntRowComparator::asc(0)).unwrap();
    let sorted = column_i32(&table, 0);
    table.resort();

    assert_eq!(column_i32(&table, 0), sorted);
    assert_eq!(sorted, vec![-2, 0, 3, 3, 3, 8, 9, 14]);
}

#[test]
fn shuffle_with_seed_is_deterministic_test() {
    let base = letters_table(5, &["A", "B", "C", "D"]);
    let mut first = base.clone();
    let mut second = base.clone();

    first.shuffle(&mut StdRng::seed_from_u64(1234));
    second.shuffle(&mut StdRng::seed_from_u64(1234));

    assert_eq!(column_cells(&first, 0), column_cells(&second, 0));
    assert_eq!(column_cells(&first, 1), column_cells(&second, 1));

    let mut rows: Vec<(Cell, Cell)> = first
        .iter_rows(|table, row| (table.get(row, 0).unwrap(), table.get(row, 1).unwrap()))
        .collect();
    rows.sort_by(|a, b| a.0.natural_cmp(&b.0).then_with(|| a.1.natural_cmp(&b.1)));
    let expected: Vec<(Cell, Cell)> = base
        .iter_rows(|table, row| (table.get(row, 0).unwrap(), table.get(row, 1).unwrap()))
        .collect();

    assert_eq!(rows, expected);
}

#[test]
fn sort_shuffle_sort_recovers_order_test() {
    let mut table = letters_table(6, &["C", "A", "B"]);
    let comparator = ChainedRowComparator::builder(&table)
        .by_column_desc(0)
        .by_column_asc(1)
        .build()
        .unwrap();

    table.sort(comparator.clone()).unwrap();
    assert_sorted_by(&table, &comparator);
    let sorted = (column_cells(&table, 0), column_cells(&table, 1));

    table.shuffle_random();
    table.resort();

    assert_sorted_by(&table, &comparator);
    assert_eq!((column_cells(&table, 0), column_cells(&table, 1)), sorted);
    assert_eq!(table.get_i64(0, 0).unwrap(), 5);
    assert_eq!(table.get_object(0, 1).unwrap(), &Cell::from("A"));
}

#[test]
fn object_sort_with_custom_ordering_test() {
    let mut table = Table::from_columns_owning(vec![ColumnData::from(cells![
        "pear",
        None::<String>,
        "fig",
        "banana"
    ])])
    .unwrap();
    let by_length = CellOrdering::from_fn(|a, b| {
        let len = |cell: &Cell| cell.as_str().map_or(0, str::len);
        len(a).cmp(&len(b))
    });

    table.sort(ObjectRowComparator::new(0, by_length)).unwrap();

    assert_eq!(
        column_cells(&table, 0),
        cells![None::<String>, "fig", "pear", "banana"]
    );
}

#[test]
fn sort_validates_comparator_columns_test() {
    let mut table = letters_table(2, &["A"]);

    let err = table.sort(FloatRowComparator::asc(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ColumnKindMismatch);

    let err = table.sort(IntRowComparator::asc(5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ColumnOutOfRange);
}
