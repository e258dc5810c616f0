use tests::{log_table, user_table, MockConnection};

use griddle::schema::Table;
use griddle::stmt::Value;
use griddle::{ops, Record};

use pretty_assertions::assert_eq;

use std::sync::Arc;

/// A string-keyed descriptor, as used by session and token tables.
fn token_table() -> Arc<Table> {
    Arc::new(
        Table::builder("token")
            .field("token", "")
            .field("payload", "")
            .primary_key("token")
            .build()
            .unwrap(),
    )
}

// ---------------------------------------------------------------------------
// Saving a new record inserts
// ---------------------------------------------------------------------------

#[test]
fn save_inserts_new_record() {
    let mut conn = MockConnection::new();
    conn.set_insert_id(7);

    let mut record = Record::new(user_table());
    record.set("name", "amy").unwrap();
    record.set("email", "amy@example.com").unwrap();

    let key = ops::save(&mut conn, &mut record).unwrap();

    assert_eq!(key, Value::Int(7));
    assert_eq!(record.get("id").unwrap(), &Value::Int(7));

    let entry = conn.last().unwrap();
    assert_eq!(entry.sql, "INSERT INTO user SET `name` = ?, `email` = ?");
    assert_eq!(entry.types, "ss");
    assert_eq!(
        entry.params,
        vec![Value::from("amy"), Value::from("amy@example.com")]
    );
}

#[test]
fn insert_requires_generated_key() {
    // The scripted connection reports no generated id.
    let mut conn = MockConnection::new();

    let mut record = Record::new(user_table());
    record.set("name", "amy").unwrap();

    let err = ops::save(&mut conn, &mut record).unwrap_err();
    assert!(err.is_persist());
    assert!(err.to_string().contains("user"));
}

#[test]
fn insert_keeps_caller_supplied_key() {
    let mut conn = MockConnection::new();

    let mut record = Record::new(user_table());
    record.set("id", 42).unwrap();
    record.set("name", "amy").unwrap();

    let key = ops::insert(&mut conn, &mut record).unwrap();

    // The key was not generated, so the reported id never consults the
    // connection.
    assert_eq!(key, Value::Int(42));

    let entry = conn.last().unwrap();
    assert_eq!(
        entry.sql,
        "INSERT INTO user SET `id` = ?, `name` = ?, `email` = ?"
    );
    assert_eq!(entry.types, "iss");
    assert_eq!(
        entry.params,
        vec![Value::Int(42), Value::from("amy"), Value::from("")]
    );
}

#[test]
fn insert_ignore_renders_ignore() {
    let mut conn = MockConnection::new();
    conn.set_insert_id(3);

    let mut record = Record::new(user_table());
    record.set("name", "amy").unwrap();

    ops::insert_ignore(&mut conn, &mut record).unwrap();

    let entry = conn.last().unwrap();
    assert_eq!(entry.sql, "INSERT IGNORE INTO user SET `name` = ?, `email` = ?");
}

// ---------------------------------------------------------------------------
// Saving a persisted record updates
// ---------------------------------------------------------------------------

#[test]
fn save_updates_persisted_record() {
    let mut conn = MockConnection::new();

    let mut record = Record::new(user_table());
    record.set("id", 7).unwrap();
    record.set("name", "amy").unwrap();
    record.set("email", "amy@example.com").unwrap();

    let key = ops::save(&mut conn, &mut record).unwrap();
    assert_eq!(key, Value::Int(7));

    let entry = conn.last().unwrap();
    assert_eq!(
        entry.sql,
        "UPDATE user SET `name` = ?, `email` = ? WHERE `id` = ? LIMIT 1"
    );
    assert_eq!(entry.types, "ssi");
    assert_eq!(
        entry.params,
        vec![
            Value::from("amy"),
            Value::from("amy@example.com"),
            Value::Int(7)
        ]
    );
}

#[test]
fn rebuilding_the_same_update_is_deterministic() {
    let mut conn = MockConnection::new();

    let mut record = Record::new(user_table());
    record.set("id", 7).unwrap();
    record.set("name", "amy").unwrap();

    ops::save(&mut conn, &mut record).unwrap();
    ops::save(&mut conn, &mut record).unwrap();

    let log = conn.log();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], log[1]);
}

#[test]
fn update_reports_key_even_when_nothing_changed() {
    let mut conn = MockConnection::new();
    conn.push_affected(0);

    let mut record = Record::new(user_table());
    record.set("id", 7).unwrap();

    let key = ops::update(&mut conn, &record).unwrap();
    assert_eq!(key, Value::Int(7));
}

#[test]
fn update_without_primary_key_is_unsupported() {
    let mut conn = MockConnection::new();

    let record = Record::new(log_table());
    let err = ops::update(&mut conn, &record).unwrap_err();
    assert!(err.is_unsupported());
    assert!(conn.log().is_empty());
}

// ---------------------------------------------------------------------------
// Entities without a primary key
// ---------------------------------------------------------------------------

#[test]
fn save_without_primary_key_always_inserts() {
    let mut conn = MockConnection::new();

    let mut record = Record::new(log_table());
    record.set("message", "boot").unwrap();

    let key = ops::save(&mut conn, &mut record).unwrap();
    assert_eq!(key, Value::Null);

    let entry = conn.last().unwrap();
    assert_eq!(entry.sql, "INSERT INTO log SET `message` = ?, `level` = ?");
    assert_eq!(entry.types, "si");
    assert_eq!(entry.params, vec![Value::from("boot"), Value::Int(0)]);

    // Saving again inserts again; there is no key to update by.
    ops::save(&mut conn, &mut record).unwrap();
    assert_eq!(conn.log().len(), 2);
}

// ---------------------------------------------------------------------------
// String primary keys
// ---------------------------------------------------------------------------

#[test]
fn integer_like_string_key_binds_as_int() {
    let mut conn = MockConnection::new();

    let mut record = Record::new(token_table());
    record.set("token", "99").unwrap();
    record.set("payload", "data").unwrap();

    let key = ops::save(&mut conn, &mut record).unwrap();

    // The record keeps its stored key, while the bound parameter takes the
    // integer shape.
    assert_eq!(key, Value::from("99"));

    let entry = conn.last().unwrap();
    assert_eq!(
        entry.sql,
        "UPDATE token SET `payload` = ? WHERE `token` = ? LIMIT 1"
    );
    assert_eq!(entry.types, "si");
    assert_eq!(entry.params, vec![Value::from("data"), Value::Int(99)]);
}

#[test]
fn other_string_key_binds_as_string() {
    let mut conn = MockConnection::new();

    let mut record = Record::new(token_table());
    record.set("token", "f3a9").unwrap();
    record.set("payload", "data").unwrap();

    ops::save(&mut conn, &mut record).unwrap();

    let entry = conn.last().unwrap();
    assert_eq!(entry.types, "ss");
    assert_eq!(entry.params, vec![Value::from("data"), Value::from("f3a9")]);
}

// ---------------------------------------------------------------------------
// Deleting
// ---------------------------------------------------------------------------

#[test]
fn delete_by_key() {
    let mut conn = MockConnection::new();
    conn.push_affected(1);

    let mut record = Record::new(user_table());
    record.set("id", 7).unwrap();

    let affected = ops::delete(&mut conn, &record).unwrap();
    assert_eq!(affected, 1);

    let entry = conn.last().unwrap();
    assert_eq!(entry.sql, "DELETE FROM user WHERE `id` = ? LIMIT 1");
    assert_eq!(entry.types, "i");
    assert_eq!(entry.params, vec![Value::Int(7)]);
}

#[test]
fn delete_reports_scripted_count() {
    let mut conn = MockConnection::new();
    conn.push_affected(0);

    let mut record = Record::new(user_table());
    record.set("id", 7).unwrap();

    assert_eq!(ops::delete(&mut conn, &record).unwrap(), 0);
}

#[test]
fn delete_without_primary_key_is_unsupported() {
    let mut conn = MockConnection::new();

    let record = Record::new(log_table());
    let err = ops::delete(&mut conn, &record).unwrap_err();
    assert!(err.is_unsupported());
}
