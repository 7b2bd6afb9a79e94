use arraytable::Table;
use arraytable::cells;
use arraytable::config::TableConfig;
use arraytable::error::ErrorKind;
use arraytable::test_utils::init_test_tracing;
use arraytable::test_utils::table::column_i32;
use arraytable::types::{Cell, ColumnKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn appends_never_lose_values_test() {
    init_test_tracing();

    let mut rng = StdRng::seed_from_u64(42);
    let mut table = Table::with_kinds(2, &[ColumnKind::Int, ColumnKind::Object]).unwrap();
    let mut capacities = vec![table.capacity()];
    let mut expected = Vec::with_capacity(1000);

    for _ in 0..1000 {
        let value: i32 = rng.gen_range(-10_000..10_000);
        table.add_row(cells![value, format!("row {value}")]).unwrap();
        expected.push(value);
        if capacities.last() != Some(&table.capacity()) {
            capacities.push(table.capacity());
        }
    }

    assert_eq!(table.row_count(), 1000);
    assert_eq!(column_i32(&table, 0), expected);
    for (row, value) in expected.iter().enumerate() {
        assert_eq!(table.get_object(row, 1).unwrap(), &Cell::from(format!("row {value}")));
    }
    assert_eq!(&capacities[..6], &[2, 3, 4, 6, 9, 13]);
    for column in table.columns() {
        assert_eq!(column.data().len(), table.capacity());
    }
}

#[test]
fn growth_stops_at_configured_maximum_test() {
    let config = TableConfig {
        initial_capacity: 2,
        max_capacity: 3,
    };
    let mut table = Table::with_config(config, &[ColumnKind::Int]).unwrap();

    for value in 0..3i32 {
        table.add_row([value]).unwrap();
    }
    assert_eq!(table.capacity(), 3);

    let err = table.add_row([3i32]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CapacityExhausted);
    assert_eq!(table.row_count(), 3);
    assert_eq!(column_i32(&table, 0), vec![0, 1, 2]);
}

#[test]
fn invalid_config_is_rejected_test() {
    let config = TableConfig {
        initial_capacity: 1,
        max_capacity: 0,
    };

    let err = Table::with_config(config, &[ColumnKind::Int]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigError);
}

#[test]
fn clear_keeps_capacity_for_reuse_test() {
    let mut table = Table::with_kinds(1, &[ColumnKind::Double]).unwrap();
    for value in 0..10i32 {
        table.add_row([f64::from(value)]).unwrap();
    }
    let capacity = table.capacity();

    table.clear();
    table.add_row([1.5f64]).unwrap();

    assert_eq!(table.capacity(), capacity);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.get_f64(0, 0).unwrap(), 1.5);
}
