use tests::{log_table, user_table, MockConnection};

use griddle::driver::{Row, RowSet};
use griddle::stmt::{
    Condition, ConditionTree, Direction, Field, Filter, Limit, OrderBy, Type, Value,
};
use griddle::{ops, RecordKey};

use pretty_assertions::assert_eq;

fn user_row(id: i64, name: &str, email: &str) -> Row {
    Row::from_values(
        "user",
        [
            ("id", Value::Int(id)),
            ("name", Value::from(name)),
            ("email", Value::from(email)),
        ],
    )
}

/// A one-cell row, as an aggregate query produces. Computed columns carry
/// no originating table.
fn scalar_row(value: Value) -> RowSet {
    RowSet::from(vec![Row::from_values("", [("value", value)])])
}

// ---------------------------------------------------------------------------
// Fetching one record by field
// ---------------------------------------------------------------------------

#[test]
fn select_by_field_misses() {
    let mut conn = MockConnection::new();

    let table = user_table();
    let found = ops::select_by_field(&mut conn, &table, "email", "amy@example.com").unwrap();
    assert!(found.is_none());

    let entry = conn.last().unwrap();
    assert_eq!(
        entry.sql,
        "SELECT * FROM user WHERE `email` = ? ORDER BY `id` DESC LIMIT 1"
    );
    assert_eq!(entry.types, "s");
    assert_eq!(entry.params, vec![Value::from("amy@example.com")]);
}

#[test]
fn select_by_field_hits() {
    let mut conn = MockConnection::new();
    conn.push_result(RowSet::from(vec![user_row(3, "amy", "amy@example.com")]));

    let table = user_table();
    let record = ops::select_by_field(&mut conn, &table, "email", "amy@example.com")
        .unwrap()
        .unwrap();

    assert_eq!(record.get("id").unwrap(), &Value::Int(3));
    assert_eq!(record.get("name").unwrap(), &Value::from("amy"));
}

#[test]
fn select_by_field_resolves_alias() {
    let mut conn = MockConnection::new();

    let table = user_table();
    ops::select_by_field(&mut conn, &table, "mail", "amy@example.com").unwrap();

    let entry = conn.last().unwrap();
    assert!(entry.sql.contains("WHERE `email` = ?"));
}

#[test]
fn select_by_field_casts_probe_to_declared_type() {
    let mut conn = MockConnection::new();

    let table = user_table();
    ops::select_by_field(&mut conn, &table, "email", 5).unwrap();

    let entry = conn.last().unwrap();
    assert_eq!(entry.types, "s");
    assert_eq!(entry.params, vec![Value::from("5")]);
}

#[test]
fn select_by_field_unknown_field() {
    let mut conn = MockConnection::new();

    let table = user_table();
    let err = ops::select_by_field(&mut conn, &table, "nickname", "amy").unwrap_err();
    assert!(err.is_unknown_field());
    assert!(conn.log().is_empty());
}

#[test]
fn single_row_fetch_rejects_excess_rows() {
    let mut conn = MockConnection::new();
    conn.push_result(RowSet::from(vec![
        user_row(1, "amy", "amy@example.com"),
        user_row(2, "bob", "amy@example.com"),
    ]));

    let table = user_table();
    let err = ops::select_by_field(&mut conn, &table, "email", "amy@example.com").unwrap_err();
    assert!(err.is_too_many_rows());
}

#[test]
fn fetched_record_with_zero_key_counts_as_missing() {
    let mut conn = MockConnection::new();
    conn.push_result(RowSet::from(vec![user_row(0, "amy", "amy@example.com")]));

    let table = user_table();
    let found = ops::select_by_field(&mut conn, &table, "email", "amy@example.com").unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Fetching one record by primary key
// ---------------------------------------------------------------------------

#[test]
fn select_by_id_binds_int_key() {
    let mut conn = MockConnection::new();
    conn.push_result(RowSet::from(vec![user_row(3, "amy", "amy@example.com")]));

    let table = user_table();
    let record = ops::select_by_id(&mut conn, &table, 3).unwrap().unwrap();
    assert_eq!(record.get("id").unwrap(), &Value::Int(3));

    let entry = conn.last().unwrap();
    assert_eq!(
        entry.sql,
        "SELECT * FROM user WHERE `id` = ? ORDER BY `id` DESC LIMIT 1"
    );
    assert_eq!(entry.types, "i");
    assert_eq!(entry.params, vec![Value::Int(3)]);
}

#[test]
fn select_by_id_casts_integer_like_string_key() {
    let mut conn = MockConnection::new();

    let table = user_table();
    ops::select_by_id(&mut conn, &table, "3").unwrap();

    let entry = conn.last().unwrap();
    assert_eq!(entry.types, "i");
    assert_eq!(entry.params, vec![Value::Int(3)]);
}

#[test]
fn select_by_id_without_primary_key_is_unsupported() {
    let mut conn = MockConnection::new();

    let table = log_table();
    let err = ops::select_by_id(&mut conn, &table, 1).unwrap_err();
    assert!(err.is_unsupported());
}

// ---------------------------------------------------------------------------
// Fetching collections
// ---------------------------------------------------------------------------

#[test]
fn select_all_keys_records_by_primary_key() {
    let mut conn = MockConnection::new();
    conn.push_result(RowSet::from(vec![
        user_row(3, "amy", "amy@example.com"),
        user_row(1, "bob", "bob@example.com"),
    ]));

    let table = user_table();
    let records = ops::select_all(&mut conn, &table).unwrap();

    assert_eq!(conn.last().unwrap().sql, "SELECT * FROM user ORDER BY `id` DESC");

    let keys: Vec<_> = records.keys().cloned().collect();
    assert_eq!(keys, vec![RecordKey::Int(3), RecordKey::Int(1)]);
    assert_eq!(
        records[&RecordKey::Int(1)].get("name").unwrap(),
        &Value::from("bob")
    );
}

#[test]
fn duplicate_keys_keep_the_last_record() {
    let mut conn = MockConnection::new();
    conn.push_result(RowSet::from(vec![
        user_row(3, "amy", "amy@example.com"),
        user_row(3, "bob", "bob@example.com"),
    ]));

    let table = user_table();
    let records = ops::select_all(&mut conn, &table).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[&RecordKey::Int(3)].get("name").unwrap(),
        &Value::from("bob")
    );
}

#[test]
fn keyless_records_key_by_position() {
    let mut conn = MockConnection::new();
    conn.push_result(RowSet::from(vec![
        Row::from_values("log", [("message", Value::from("boot")), ("level", Value::Int(2))]),
        Row::from_values("log", [("message", Value::from("halt")), ("level", Value::Int(3))]),
    ]));

    let table = log_table();
    let records = ops::select_all(&mut conn, &table).unwrap();

    assert_eq!(conn.last().unwrap().sql, "SELECT * FROM log");

    let keys: Vec<_> = records.keys().cloned().collect();
    assert_eq!(keys, vec![RecordKey::Int(0), RecordKey::Int(1)]);
}

#[test]
fn falsy_cell_resets_to_declared_empty_value() {
    let mut conn = MockConnection::new();
    conn.push_result(RowSet::from(vec![Row::from_values(
        "log",
        [("message", Value::from("boot")), ("level", Value::Null)],
    )]));

    let table = log_table();
    let records = ops::select_all(&mut conn, &table).unwrap();

    let record = &records[&RecordKey::Int(0)];
    assert_eq!(record.get("level").unwrap(), &Value::Int(0));
}

#[test]
fn select_where_renders_filter_order_and_window() {
    let mut conn = MockConnection::new();

    let table = user_table();
    let filter = ConditionTree::all(vec![
        Condition::new(
            Field::new("name", Type::String).unwrap(),
            "=",
            "amy",
        )
        .unwrap(),
        Condition::new(
            Field::new("email", Type::String).unwrap(),
            "like",
            "%@example.com",
        )
        .unwrap(),
    ]);

    ops::select_where(
        &mut conn,
        &table,
        filter,
        Some(OrderBy::new("name", Direction::Asc)),
        Some(Limit::with_offset(10, 20)),
    )
    .unwrap();

    let entry = conn.last().unwrap();
    assert_eq!(
        entry.sql,
        "SELECT * FROM user WHERE `name` = ? AND `email` LIKE ? ORDER BY `name` ASC LIMIT 20,10"
    );
    assert_eq!(entry.types, "ss");
    assert_eq!(
        entry.params,
        vec![Value::from("amy"), Value::from("%@example.com")]
    );
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[test]
fn count_reads_the_scalar() {
    let mut conn = MockConnection::new();
    conn.push_result(scalar_row(Value::Int(42)));

    let table = user_table();
    assert_eq!(ops::count(&mut conn, &table, Filter::none()).unwrap(), 42);
    assert_eq!(conn.last().unwrap().sql, "SELECT COUNT(*) FROM user");
}

#[test]
fn count_converts_a_string_scalar() {
    // Drivers may hand numeric scalars back as strings.
    let mut conn = MockConnection::new();
    conn.push_result(scalar_row(Value::from("42")));

    let table = user_table();
    assert_eq!(ops::count(&mut conn, &table, Filter::none()).unwrap(), 42);
}

#[test]
fn count_renders_its_filter() {
    let mut conn = MockConnection::new();
    conn.push_result(scalar_row(Value::Int(1)));

    let table = user_table();
    let condition = Condition::new(
        Field::new("name", Type::String).unwrap(),
        "=",
        "amy",
    )
    .unwrap();
    ops::count(&mut conn, &table, condition).unwrap();

    let entry = conn.last().unwrap();
    assert_eq!(entry.sql, "SELECT COUNT(*) FROM user WHERE `name` = ?");
    assert_eq!(entry.types, "s");
}

#[test]
fn aggregate_requires_exactly_one_row() {
    let mut conn = MockConnection::new();
    conn.push_result(RowSet::new());

    let table = user_table();
    let err = ops::count(&mut conn, &table, Filter::none()).unwrap_err();
    assert!(err.is_ambiguous_result());

    conn.push_result(RowSet::from(vec![
        Row::from_values("", [("value", Value::Int(1))]),
        Row::from_values("", [("value", Value::Int(2))]),
    ]));
    let err = ops::count(&mut conn, &table, Filter::none()).unwrap_err();
    assert!(err.is_ambiguous_result());
}

#[test]
fn aggregate_requires_a_single_column() {
    let mut conn = MockConnection::new();
    conn.push_result(RowSet::from(vec![Row::from_values(
        "",
        [("a", Value::Int(1)), ("b", Value::Int(2))],
    )]));

    let table = user_table();
    let err = ops::count(&mut conn, &table, Filter::none()).unwrap_err();
    assert!(err.is_ambiguous_result());
}

#[test]
fn max_reads_the_scalar() {
    let mut conn = MockConnection::new();
    conn.push_result(scalar_row(Value::from("zoe")));

    let table = user_table();
    let value = ops::max(&mut conn, &table, "name", Filter::none()).unwrap();
    assert_eq!(value, Value::from("zoe"));
    assert_eq!(conn.last().unwrap().sql, "SELECT MAX(`name`) FROM user");
}

#[test]
fn max_resolves_aliases() {
    let mut conn = MockConnection::new();
    conn.push_result(scalar_row(Value::Null));

    let table = user_table();
    ops::max(&mut conn, &table, "mail", Filter::none()).unwrap();
    assert_eq!(conn.last().unwrap().sql, "SELECT MAX(`email`) FROM user");
}

#[test]
fn aggregate_over_no_rows_is_null() {
    // SQL aggregates return a single NULL row when nothing matches.
    let mut conn = MockConnection::new();
    conn.push_result(scalar_row(Value::Null));

    let table = user_table();
    assert_eq!(ops::min(&mut conn, &table, "name", Filter::none()).unwrap(), Value::Null);
    assert_eq!(conn.last().unwrap().sql, "SELECT MIN(`name`) FROM user");
}

#[test]
fn aggregate_on_unknown_field() {
    let mut conn = MockConnection::new();

    let table = user_table();
    let err = ops::min(&mut conn, &table, "nickname", Filter::none()).unwrap_err();
    assert!(err.is_unknown_field());
}
