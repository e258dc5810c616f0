use crate::{lower, Mapper, Record, Records};

use griddle_core::driver::Connection;
use griddle_core::schema::Table;
use griddle_core::stmt::{Filter, Limit, OrderBy, Statement, Type, Value};
use griddle_core::{Error, Result};
use griddle_sql::PreparedQuery;

use std::sync::Arc;

/// Persists a record: INSERT while it is new, UPDATE once it carries a
/// primary key.
///
/// Returns the primary-key value the record holds afterwards, `Null` for
/// entities without one.
pub fn save(conn: &mut dyn Connection, record: &mut Record) -> Result<Value> {
    if record.is_new() {
        insert(conn, record)
    } else {
        update(conn, record)
    }
}

/// Inserts a record and reads back the generated key.
pub fn insert(conn: &mut dyn Connection, record: &mut Record) -> Result<Value> {
    insert_inner(conn, record, false)
}

/// Inserts a record with `INSERT IGNORE`.
pub fn insert_ignore(conn: &mut dyn Connection, record: &mut Record) -> Result<Value> {
    insert_inner(conn, record, true)
}

fn insert_inner(conn: &mut dyn Connection, record: &mut Record, ignore: bool) -> Result<Value> {
    let auto_key = record.is_new();
    let stmt = lower::build_insert(record, ignore)?;
    PreparedQuery::from_statement(&stmt.into()).execute(conn)?;

    let pk = match record.table().primary_key() {
        Some(pk) => pk.to_string(),
        None => return Ok(Value::Null),
    };
    if !auto_key {
        // The key was supplied by the caller; nothing was generated.
        return Ok(record.get(&pk)?.clone());
    }
    let id = conn.last_insert_id()?;
    if id == 0 {
        return Err(Error::persist(format!(
            "INSERT into `{}` produced no generated key",
            record.table().name()
        )));
    }
    record.set(&pk, id as i64)?;
    Ok(Value::Int(id as i64))
}

/// Updates a record keyed by its primary key.
///
/// Reports the current key regardless of the affected-row count; touching
/// zero rows is not an error at this layer.
pub fn update(conn: &mut dyn Connection, record: &Record) -> Result<Value> {
    let stmt = lower::build_update(record)?;
    PreparedQuery::from_statement(&stmt.into()).execute(conn)?;
    Ok(record.primary_key_value().cloned().unwrap_or(Value::Null))
}

/// Deletes a record keyed by its primary key, returning the affected count.
pub fn delete(conn: &mut dyn Connection, record: &Record) -> Result<u64> {
    let stmt = lower::build_delete(record)?;
    let response = PreparedQuery::from_statement(&stmt.into()).execute(conn)?;
    Ok(response.rows.into_count())
}

/// Fetches one record by primary key.
pub fn select_by_id(
    conn: &mut dyn Connection,
    table: &Arc<Table>,
    key: impl Into<Value>,
) -> Result<Option<Record>> {
    let condition = lower::key_condition(table, &key.into())?;
    select_one_where(conn, table, condition)
}

/// Fetches the newest record whose field equals the probe value.
pub fn select_by_field(
    conn: &mut dyn Connection,
    table: &Arc<Table>,
    field: &str,
    probe: impl Into<Value>,
) -> Result<Option<Record>> {
    let condition = lower::field_condition(table, field, probe.into())?;
    select_one_where(conn, table, condition)
}

/// Fetches at most one record matching the filter, newest first.
pub fn select_one_where(
    conn: &mut dyn Connection,
    table: &Arc<Table>,
    filter: impl Into<Filter>,
) -> Result<Option<Record>> {
    let stmt = lower::build_select(table, filter.into(), None, Some(Limit::new(1)));
    let rows = PreparedQuery::from_statement(&stmt.into())
        .execute(conn)?
        .rows
        .into_values();
    Mapper::new(table.clone()).one(rows)
}

/// Fetches every record of the table.
pub fn select_all(conn: &mut dyn Connection, table: &Arc<Table>) -> Result<Records> {
    select_where(conn, table, Filter::none(), None, None)
}

/// Fetches the records matching the filter.
pub fn select_where(
    conn: &mut dyn Connection,
    table: &Arc<Table>,
    filter: impl Into<Filter>,
    order_by: Option<OrderBy>,
    limit: Option<Limit>,
) -> Result<Records> {
    let stmt = lower::build_select(table, filter.into(), order_by, limit);
    let rows = PreparedQuery::from_statement(&stmt.into())
        .execute(conn)?
        .rows
        .into_values();
    Mapper::new(table.clone()).many(rows)
}

/// Counts the rows matching the filter.
pub fn count(conn: &mut dyn Connection, table: &Table, filter: impl Into<Filter>) -> Result<i64> {
    let stmt = lower::build_count(table, filter.into());
    let value = aggregate(conn, stmt.into())?;
    match Type::Int.cast(value)? {
        Value::Int(n) => Ok(n),
        value => Err(Error::ambiguous_result(format!("COUNT returned {value:?}"))),
    }
}

/// Returns the largest value of a field among the rows matching the filter.
///
/// `Null` when no row matches, per SQL aggregate semantics.
pub fn max(
    conn: &mut dyn Connection,
    table: &Table,
    field: &str,
    filter: impl Into<Filter>,
) -> Result<Value> {
    let stmt = lower::build_max(table, field, filter.into())?;
    aggregate(conn, stmt.into())
}

/// Returns the smallest value of a field among the rows matching the filter.
pub fn min(
    conn: &mut dyn Connection,
    table: &Table,
    field: &str,
    filter: impl Into<Filter>,
) -> Result<Value> {
    let stmt = lower::build_min(table, field, filter.into())?;
    aggregate(conn, stmt.into())
}

/// Runs an aggregate SELECT that is contractually a single scalar row.
fn aggregate(conn: &mut dyn Connection, stmt: Statement) -> Result<Value> {
    let rows = PreparedQuery::from_statement(&stmt)
        .execute(conn)?
        .rows
        .into_values();
    let row = match rows.first() {
        Some(row) if rows.len() == 1 => row,
        _ => {
            return Err(Error::ambiguous_result(format!(
                "aggregate produced {} rows",
                rows.len()
            )))
        }
    };
    row.single_value()
        .cloned()
        .ok_or_else(|| Error::ambiguous_result(format!("aggregate row has {} columns", row.len())))
}
