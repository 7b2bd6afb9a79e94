use arraytable::Table;
use arraytable::cells;
use arraytable::error::ErrorKind;
use arraytable::store::ColumnData;
use arraytable::test_utils::table::{column_cells, column_i32, int_table};
use arraytable::types::{Cell, ColumnKind};

#[test]
fn delete_preserves_relative_order_test() {
    let mut table = int_table(&[10, 20, 30, 40, 50, 60]);

    table.delete_row(0).unwrap();
    table.delete_row(2).unwrap();
    table.delete_row(3).unwrap();

    assert_eq!(column_i32(&table, 0), vec![20, 30, 50]);
}

#[test]
fn insert_then_delete_restores_the_table_test() {
    let mut table = Table::from_columns_owning(vec![
        ColumnData::from(vec![1i32, 2, 3]),
        ColumnData::from(cells!["a", "b", "c"]),
    ])
    .unwrap();
    let before = table.clone();

    table.insert_at(1, cells![9i32, "z"]).unwrap();
    assert_eq!(column_i32(&table, 0), vec![1, 9, 2, 3]);
    assert_eq!(column_cells(&table, 1), cells!["a", "z", "b", "c"]);

    table.delete_row(1).unwrap();

    assert_eq!(column_i32(&table, 0), column_i32(&before, 0));
    assert_eq!(column_cells(&table, 1), column_cells(&before, 1));
}

#[test]
fn failed_mutations_leave_table_unchanged_test() {
    let mut table = Table::with_kinds(4, &[ColumnKind::Int, ColumnKind::Bool]).unwrap();
    table.add_row(cells![1i32, true]).unwrap();

    let errors = [
        table.add_row(cells![2i32]).unwrap_err(),
        table.add_row(cells![2i64, false]).unwrap_err(),
        table.insert_at(5, cells![2i32, false]).unwrap_err(),
        table.delete_row(1).unwrap_err(),
        table.swap(0, 1).unwrap_err(),
    ];

    let kinds: Vec<ErrorKind> = errors.iter().map(|err| err.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::ArityMismatch,
            ErrorKind::ConversionError,
            ErrorKind::RowOutOfRange,
            ErrorKind::RowOutOfRange,
            ErrorKind::RowOutOfRange,
        ]
    );
    assert_eq!(table.row_count(), 1);
    assert_eq!(column_i32(&table, 0), vec![1]);
    assert!(table.get_bool(0, 1).unwrap());
}

#[test]
fn untyped_access_round_trips_cells_test() {
    let mut table = Table::with_kinds(1, &[ColumnKind::Float, ColumnKind::Object]).unwrap();
    let id = uuid::Uuid::nil();

    table.add_row(cells![0.5f32, id]).unwrap();
    table.set(0, 1, Cell::Bytes(vec![1, 2])).unwrap();

    assert_eq!(table.get(0, 0).unwrap(), Cell::F32(0.5));
    assert_eq!(table.get(0, 1).unwrap(), Cell::Bytes(vec![1, 2]));
    assert_eq!(
        table.set(0, 0, 0.5f64).unwrap_err().kind(),
        ErrorKind::ConversionError
    );
}

#[test]
fn snapshot_is_detached_from_the_table_test() {
    let mut table = int_table(&[3, 1, 2]);

    let snapshot = table.column_snapshot(0).unwrap();
    table.set_i32(0, 0, 100).unwrap();

    assert_eq!(snapshot, ColumnData::from(vec![3i32, 1, 2]));
    assert_eq!(
        table.column_snapshot(1).unwrap_err().kind(),
        ErrorKind::ColumnOutOfRange
    );
}
