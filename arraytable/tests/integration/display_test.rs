use arraytable::Table;
use arraytable::cells;
use arraytable::store::ColumnData;
use arraytable::test_utils::init_test_tracing;
use arraytable::types::ColumnKind;

#[test]
fn display_renders_first_five_rows_test() {
    init_test_tracing();

    let mut table = Table::from_columns_copy(&[
        ColumnData::from(vec![123456i32, 1, 5]),
        ColumnData::from(vec![5.3f64, 8.3, 10.3]),
        ColumnData::from(cells!["e", "abcdefghijk", "c"]),
    ])
    .unwrap();
    table.add_row(cells![7i32, 0.25f64, None::<String>]).unwrap();
    table.add_row(cells![9i32, -1.5f64, "d"]).unwrap();
    table.add_row(cells![11i32, 2.0f64, "f"]).unwrap();

    insta::assert_snapshot!(table.to_string(), @r"
    [123456 5.3000 e      ]
    [1      8.3000 abcdef ]
    [5      10.300 c      ]
    [7      0.2500 null   ]
    [9      -1.500 d      ]
    ...
    ");
}

#[test]
fn display_of_short_table_has_no_ellipsis_test() {
    let mut table = Table::with_kinds(4, &[ColumnKind::Bool, ColumnKind::Long]).unwrap();
    table.add_row(cells![true, 3i64]).unwrap();

    assert_eq!(table.to_string(), "[true   3      ]\n");
    assert_eq!(
        Table::with_default_capacity(&[ColumnKind::Int]).unwrap().to_string(),
        ""
    );
}
