use arraytable::Table;
use arraytable::cells;
use arraytable::compare::{CellOrdering, IntRowComparator, ObjectRowComparator};
use arraytable::error::ErrorKind;
use arraytable::search::{MultikeyBinarySearch, SearchOutcome};
use arraytable::store::ColumnData;
use arraytable::test_utils::init_test_tracing;
use arraytable::test_utils::table::{column_cells, int_table, letters_table};
use arraytable::types::Cell;

#[test]
fn floor_and_ceil_on_sorted_column_test() {
    init_test_tracing();

    let mut table = int_table(&[1, 3, 5, 3, 6, 3]);
    table.sort(IntRowComparator::asc(0)).unwrap();

    assert_eq!(table.floor_i32(0, 3, 0..=5).unwrap().encoded(), 1);
    assert_eq!(table.ceil_i32(0, 3, 0..=5).unwrap().encoded(), 3);
    assert_eq!(table.ceil_i32(0, 4, 0..=5).unwrap().encoded(), -4);
}

#[test]
fn floor_and_ceil_bracket_every_run_test() {
    let table = int_table(&[1, 2, 2, 4, 4, 4, 4, 7, 9, 9]);

    for key in [1, 2, 4, 7, 9] {
        let floor = table.floor_i32(0, key, ..).unwrap().found().unwrap();
        let ceil = table.ceil_i32(0, key, ..).unwrap().found().unwrap();
        let exact = table.binary_search_i32(0, key).unwrap().found().unwrap();

        assert!(floor == 0 || table.get_i32(floor - 1, 0).unwrap() < key);
        assert!(ceil == 9 || table.get_i32(ceil + 1, 0).unwrap() > key);
        assert!((floor..=ceil).contains(&exact));
        for row in floor..=ceil {
            assert_eq!(table.get_i32(row, 0).unwrap(), key);
        }
    }

    assert_eq!(table.ceil_i32(0, 4, ..).unwrap(), SearchOutcome::Found(6));
}

#[test]
fn exact_search_reports_insertion_point_test() {
    let table = int_table(&[1, 3, 3, 5, 6]);

    assert_eq!(table.binary_search_i32(0, 3).unwrap(), SearchOutcome::Found(2));
    assert_eq!(table.binary_search_i32(0, 4).unwrap().encoded(), -4);
    assert_eq!(table.binary_search_i32(0, 0).unwrap().encoded(), -1);
}

#[test]
fn multikey_search_over_letter_grid_test() {
    let table = letters_table(4, &["A", "B", "C"]);
    let mut search = MultikeyBinarySearch::builder()
        .add_long_asc(0)
        .add_object(1, CellOrdering::natural())
        .build();

    search.set_key(0, 1i64).unwrap();
    search.set_key(1, "A").unwrap();
    assert_eq!(search.search(&table).unwrap().encoded(), 3);

    search.set_key(0, 4i64).unwrap();
    assert_eq!(
        search.search(&table).unwrap(),
        SearchOutcome::NotFound { insertion_point: 12 }
    );

    for (row, (number, letter)) in (0..4i64)
        .flat_map(|number| ["A", "B", "C"].map(|letter| (number, letter)))
        .enumerate()
    {
        search.set_key(0, number).unwrap();
        search.set_key(1, letter).unwrap();

        assert_eq!(search.search(&table).unwrap().found(), Some(row));
    }
}

#[test]
fn multikey_search_needs_every_key_test() {
    let table = letters_table(2, &["A"]);
    let search = MultikeyBinarySearch::builder().add_long_asc(0).build();

    let err = search.search(&table).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidState);
}

#[test]
fn object_search_matches_sort_order_with_nulls_test() {
    let reversed = CellOrdering::natural().reverse();
    let mut table = Table::from_columns_owning(vec![ColumnData::from(cells![
        "a",
        None::<String>,
        "c",
        "b"
    ])])
    .unwrap();

    table
        .sort(ObjectRowComparator::new(0, reversed.clone()))
        .unwrap();
    assert_eq!(column_cells(&table, 0), cells![None::<String>, "c", "b", "a"]);

    let key = Cell::from("c");
    assert_eq!(table.floor_object(0, &key, .., &reversed).unwrap().found(), Some(1));
    assert_eq!(table.ceil_object(0, &key, .., &reversed).unwrap().found(), Some(1));
    assert_eq!(table.binary_search_object(0, &key, &reversed).unwrap().found(), Some(1));
    assert_eq!(
        table.floor_object(0, &Cell::from("0"), .., &reversed).unwrap(),
        SearchOutcome::NotFound { insertion_point: 3 }
    );

    let mut search = MultikeyBinarySearch::builder()
        .add_object(0, reversed)
        .build();
    for (row, letter) in ["c", "b", "a"].into_iter().enumerate() {
        search.set_key(0, letter).unwrap();
        assert_eq!(search.search(&table).unwrap().found(), Some(row + 1));
    }
    search.set_key(0, Cell::Null).unwrap();
    assert_eq!(search.search(&table).unwrap().found(), Some(0));
}
