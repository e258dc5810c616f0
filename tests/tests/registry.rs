use tests::{user_table, MockConnection};

use griddle::stmt::Value;
use griddle::{Db, PreparedQuery, Record, Registry};

use std::sync::Arc;

// ---------------------------------------------------------------------------
// Routing through the current selection
// ---------------------------------------------------------------------------

#[test]
fn with_current_routes_to_the_selection() {
    let registry = Registry::new();
    let main = MockConnection::new();
    let audit = MockConnection::new();
    registry.insert("main", Box::new(main.clone())).unwrap();
    registry.insert("audit", Box::new(audit.clone())).unwrap();

    registry.set_current("main").unwrap();
    registry
        .with_current(|conn| conn.query("SELECT 1", &[]))
        .unwrap();
    assert_eq!(main.log().len(), 1);
    assert!(audit.log().is_empty());

    registry.set_current("audit").unwrap();
    registry
        .with_current(|conn| conn.query("SELECT 1", &[]))
        .unwrap();
    assert_eq!(main.log().len(), 1);
    assert_eq!(audit.log().len(), 1);
}

#[test]
fn with_current_requires_a_selection() {
    let registry = Registry::new();
    registry
        .insert("main", Box::new(MockConnection::new()))
        .unwrap();

    let err = registry
        .with_current(|conn| conn.query("SELECT 1", &[]))
        .unwrap_err();
    assert!(err.is_registry());
}

#[test]
fn with_named_ignores_the_selection() {
    let registry = Registry::new();
    let main = MockConnection::new();
    let audit = MockConnection::new();
    registry.insert("main", Box::new(main.clone())).unwrap();
    registry.insert("audit", Box::new(audit.clone())).unwrap();
    registry.set_current("main").unwrap();

    registry
        .with("audit", |conn| conn.query("SELECT 1", &[]))
        .unwrap();
    assert!(main.log().is_empty());
    assert_eq!(audit.log().len(), 1);
}

// ---------------------------------------------------------------------------
// Registration bookkeeping
// ---------------------------------------------------------------------------

#[test]
fn insert_rejects_duplicate_names() {
    let registry = Registry::new();
    let original = MockConnection::new();
    registry.insert("main", Box::new(original.clone())).unwrap();

    let err = registry
        .insert("main", Box::new(MockConnection::new()))
        .unwrap_err();
    assert!(err.is_registry());

    // The original registration stays routable.
    registry.set_current("main").unwrap();
    registry
        .with_current(|conn| conn.query("SELECT 1", &[]))
        .unwrap();
    assert_eq!(original.log().len(), 1);
}

#[test]
fn set_current_requires_a_known_name() {
    let registry = Registry::new();
    let err = registry.set_current("main").unwrap_err();
    assert!(err.is_registry());
}

#[test]
fn remove_clears_a_matching_selection() {
    let registry = Registry::new();
    registry
        .insert("main", Box::new(MockConnection::new()))
        .unwrap();
    registry.set_current("main").unwrap();
    assert_eq!(registry.current_name().unwrap().as_deref(), Some("main"));

    registry.remove("main").unwrap();
    assert_eq!(registry.current_name().unwrap(), None);

    let err = registry
        .with_current(|conn| conn.query("SELECT 1", &[]))
        .unwrap_err();
    assert!(err.is_registry());
}

#[test]
fn remove_requires_a_known_name() {
    let registry = Registry::new();
    assert!(registry.remove("main").unwrap_err().is_registry());
}

#[test]
fn removing_another_name_keeps_the_selection() {
    let registry = Registry::new();
    registry
        .insert("main", Box::new(MockConnection::new()))
        .unwrap();
    registry
        .insert("audit", Box::new(MockConnection::new()))
        .unwrap();
    registry.set_current("main").unwrap();

    registry.remove("audit").unwrap();
    assert_eq!(registry.current_name().unwrap().as_deref(), Some("main"));
}

// ---------------------------------------------------------------------------
// Concurrent use
// ---------------------------------------------------------------------------

#[test]
fn statements_run_from_many_threads() {
    let registry = Arc::new(Registry::new());
    let conn = MockConnection::new();
    registry.insert("main", Box::new(conn.clone())).unwrap();
    registry.set_current("main").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                registry
                    .with_current(|conn| conn.query("SELECT 1", &[]).map(|_| ()))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(conn.log().len(), 4);
}

// ---------------------------------------------------------------------------
// The Db front object
// ---------------------------------------------------------------------------

#[test]
fn db_operations_use_the_current_connection() {
    let db = Db::new();
    let conn = MockConnection::new();
    conn.set_insert_id(9);
    db.registry().insert("main", Box::new(conn.clone())).unwrap();
    db.use_connection("main").unwrap();

    let mut record = Record::new(user_table());
    record.set("name", "amy").unwrap();

    let key = db.save(&mut record).unwrap();
    assert_eq!(key, Value::Int(9));
    assert!(conn
        .last()
        .unwrap()
        .sql
        .starts_with("INSERT INTO user SET "));
}

#[test]
fn db_without_connections_reports_registry_errors() {
    let db = Db::new();
    let mut record = Record::new(user_table());

    let err = db.save(&mut record).unwrap_err();
    assert!(err.is_registry());
}

#[test]
fn db_fetches_through_the_facade() {
    let db = Db::new();
    let conn = MockConnection::new();
    db.registry().insert("main", Box::new(conn.clone())).unwrap();
    db.use_connection("main").unwrap();

    let table = user_table();
    let found = db.select_by_id(&table, 3).unwrap();
    assert!(found.is_none());
    assert_eq!(
        conn.last().unwrap().sql,
        "SELECT * FROM user WHERE `id` = ? ORDER BY `id` DESC LIMIT 1"
    );
}

#[test]
fn db_runs_hand_assembled_queries() {
    let db = Db::new();
    let conn = MockConnection::new();
    db.registry().insert("main", Box::new(conn.clone())).unwrap();
    db.use_connection("main").unwrap();

    let query = PreparedQuery::from_parts(
        "SELECT * FROM user WHERE `id` = ?",
        "i",
        vec![Value::Int(5)],
    );
    db.execute(query).unwrap();

    let entry = conn.last().unwrap();
    assert_eq!(entry.sql, "SELECT * FROM user WHERE `id` = ?");
    assert_eq!(entry.types, "i");
    assert_eq!(entry.params, vec![Value::Int(5)]);
}

#[test]
fn db_execute_validates_before_running() {
    let db = Db::new();
    let conn = MockConnection::new();
    db.registry().insert("main", Box::new(conn.clone())).unwrap();
    db.use_connection("main").unwrap();

    let query = PreparedQuery::from_parts(
        "SELECT * FROM user WHERE `id` = ?",
        "i",
        vec![Value::from("not a number")],
    );
    let err = db.execute(query).unwrap_err();
    assert!(err.is_type_mismatch());
    assert!(conn.log().is_empty());
}

// ---------------------------------------------------------------------------
// Opening connections by URL
// ---------------------------------------------------------------------------

#[test]
fn connect_rejects_unknown_schemes() {
    let db = Db::new();
    let err = db.connect("other", "oracle://db.internal/app").unwrap_err();
    assert!(err.is_registry());

    let message = err.to_string();
    assert!(message.contains("opening `other`"));
    assert!(message.contains("oracle"));
}

#[test]
fn connect_rejects_malformed_urls() {
    let db = Db::new();
    let err = db.connect("main", "not a url").unwrap_err();
    assert!(err.is_registry());
}

#[test]
fn use_connection_requires_a_known_name() {
    let db = Db::new();
    assert!(db.use_connection("main").unwrap_err().is_registry());
}
