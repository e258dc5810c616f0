use crate::Record;

use griddle_core::schema::Table;
use griddle_core::stmt::{
    Condition, ConditionOp, Delete, Direction, Field, Filter, Insert, Limit, OrderBy, Select,
    Type, Update, Value,
};
use griddle_core::{Error, Result};

/// Builds the INSERT for a record.
///
/// Fields keep declaration order. A falsy primary key is left out entirely
/// so the database can generate one; a non-falsy key is included after the
/// key cast.
pub(crate) fn build_insert(record: &Record, ignore: bool) -> Result<Insert> {
    let table = record.table();
    let mut stmt = Insert::new(table.name());
    stmt.ignore = ignore;
    for (name, value) in record.values() {
        if table.primary_key() == Some(name) {
            if value.is_falsy() {
                continue;
            }
            stmt.set(name, key_cast(value));
        } else {
            stmt.set(name, value.clone());
        }
    }
    if stmt.assignments.is_empty() {
        return Err(Error::invalid_statement(format!(
            "INSERT into `{}` has no assignable fields",
            table.name()
        )));
    }
    Ok(stmt)
}

/// Builds the UPDATE for a record, keyed by its primary key.
pub(crate) fn build_update(record: &Record) -> Result<Update> {
    let table = record.table();
    let pk = require_primary_key(table, "UPDATE")?;
    let mut stmt = Update::new(table.name());
    for (name, value) in record.values() {
        if name != pk {
            stmt.set(name, value.clone());
        }
    }
    stmt.filter = key_filter(record)?;
    stmt.limit = Some(1);
    Ok(stmt)
}

/// Builds the DELETE for a record, keyed by its primary key.
pub(crate) fn build_delete(record: &Record) -> Result<Delete> {
    let table = record.table();
    require_primary_key(table, "DELETE")?;
    let mut stmt = Delete::new(table.name());
    stmt.filter = key_filter(record)?;
    stmt.limit = Some(1);
    Ok(stmt)
}

/// Builds a `SELECT *` with the default primary-key-descending order when
/// the caller gives none.
pub(crate) fn build_select(
    table: &Table,
    filter: Filter,
    order_by: Option<OrderBy>,
    limit: Option<Limit>,
) -> Select {
    let order_by = order_by.or_else(|| {
        table
            .primary_key()
            .map(|pk| OrderBy::new(pk, Direction::Desc))
    });
    Select {
        filter,
        order_by,
        limit,
        ..Select::new(table.name())
    }
}

pub(crate) fn build_count(table: &Table, filter: Filter) -> Select {
    Select {
        filter,
        ..Select::count(table.name())
    }
}

pub(crate) fn build_max(table: &Table, field: &str, filter: Filter) -> Result<Select> {
    let canonical = resolve_field(table, field)?;
    Ok(Select {
        filter,
        ..Select::max(table.name(), canonical)
    })
}

pub(crate) fn build_min(table: &Table, field: &str, filter: Filter) -> Result<Select> {
    let canonical = resolve_field(table, field)?;
    Ok(Select {
        filter,
        ..Select::min(table.name(), canonical)
    })
}

/// Builds the `field = probe` condition for a field lookup, typing the
/// field from its declared default and falling back to the probe value's
/// own type.
pub(crate) fn field_condition(table: &Table, field: &str, probe: Value) -> Result<Condition> {
    let canonical = resolve_field(table, field)?;
    let ty = match table.field_type(canonical) {
        Some(ty) => ty,
        None => Type::infer(&probe).unwrap_or(Type::String),
    };
    Condition::with_op(Field::new(canonical, ty)?, ConditionOp::Eq, probe)
}

/// Builds the `pk = key` condition for a primary-key lookup.
///
/// Unlike [`field_condition`], the parameter is typed by the key's own
/// shape after the key cast: an integer-like key binds as an int, anything
/// else as itself.
pub(crate) fn key_condition(table: &Table, key: &Value) -> Result<Condition> {
    let pk = require_primary_key(table, "keyed lookup")?;
    let key = key_cast(key);
    let ty = Type::infer(&key).unwrap_or(Type::String);
    Condition::with_op(Field::new(pk, ty)?, ConditionOp::Eq, key)
}

/// Converts a key value for binding: a string spelling an integer
/// canonically binds as an int, anything else keeps its own type.
pub(crate) fn key_cast(value: &Value) -> Value {
    match value {
        Value::String(text) => match Type::parse_canonical_int(text) {
            Some(n) => Value::Int(n),
            None => value.clone(),
        },
        other => other.clone(),
    }
}

fn key_filter(record: &Record) -> Result<Filter> {
    let key = record.primary_key_value().cloned().unwrap_or(Value::Null);
    let condition = key_condition(record.table(), &key)?;
    Ok(Filter::from(condition))
}

fn require_primary_key<'a>(table: &'a Table, verb: &str) -> Result<&'a str> {
    table
        .primary_key()
        .ok_or_else(|| Error::unsupported(format!("{verb} on `{}` without a primary key", table.name())))
}

fn resolve_field<'a>(table: &'a Table, field: &str) -> Result<&'a str> {
    table
        .resolve(field)
        .ok_or_else(|| Error::unknown_field(table.name(), field))
}
