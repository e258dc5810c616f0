use crate::Record;

use griddle_core::driver::{Row, RowSet};
use griddle_core::schema::Table;
use griddle_core::stmt::Value;
use griddle_core::{Error, Result};

use indexmap::IndexMap;

use std::sync::Arc;

/// Key of a record in a keyed result collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Int(i64),
    Str(String),
}

impl RecordKey {
    fn from_value(value: &Value) -> RecordKey {
        match value {
            Value::Int(v) => RecordKey::Int(*v),
            Value::String(v) => RecordKey::Str(v.clone()),
            Value::Bool(v) => RecordKey::Str(v.to_string()),
            Value::Double(v) => RecordKey::Str(v.to_string()),
            Value::Null => RecordKey::Str(String::new()),
        }
    }
}

/// An ordered result collection, keyed by primary key when the entity
/// declares one, else by position.
pub type Records = IndexMap<RecordKey, Record>;

/// Maps driver rows back into records of one entity.
#[derive(Debug, Clone)]
pub struct Mapper {
    table: Arc<Table>,
}

impl Mapper {
    pub fn new(table: Arc<Table>) -> Mapper {
        Mapper { table }
    }

    /// Builds a record from one row.
    ///
    /// Only cells of the record's own table are considered. A falsy cell
    /// resets the field to its declared empty representative instead of
    /// clobbering a typed default with whatever the driver sent; anything
    /// else goes through the regular setter.
    pub fn from_row(&self, row: &Row) -> Result<Record> {
        let mut record = Record::new(self.table.clone());
        for (name, value) in row.columns_for(self.table.name()) {
            let canonical = self
                .table
                .resolve(name)
                .ok_or_else(|| Error::unknown_field(self.table.name(), name))?;
            let value = if value.is_falsy() {
                match self.table.field_type(canonical) {
                    Some(ty) => ty.empty_value(),
                    None => Value::Null,
                }
            } else {
                value.clone()
            };
            record.set(canonical, value)?;
        }
        Ok(record)
    }

    /// Maps a result expected to hold at most one row.
    ///
    /// Zero rows is `None`. One row maps normally, except that a record
    /// whose primary key comes back falsy also counts as not found. More
    /// than one row is an error.
    pub fn one(&self, rows: RowSet) -> Result<Option<Record>> {
        if rows.len() > 1 {
            return Err(Error::too_many_rows(self.table.name()));
        }
        let row = match rows.first() {
            Some(row) => row,
            None => return Ok(None),
        };
        let record = self.from_row(row)?;
        if let Some(pk) = record.primary_key_value() {
            if pk.is_falsy() {
                return Ok(None);
            }
        }
        Ok(Some(record))
    }

    /// Maps every row of a result.
    ///
    /// With a primary key, records are keyed by it and a duplicate key
    /// overwrites the earlier record. Without one, records are keyed by
    /// position.
    pub fn many(&self, rows: RowSet) -> Result<Records> {
        let mut records = Records::new();
        for (position, row) in rows.iter().enumerate() {
            let record = self.from_row(row)?;
            let key = match record.primary_key_value() {
                Some(pk) => RecordKey::from_value(pk),
                None => RecordKey::Int(position as i64),
            };
            records.insert(key, record);
        }
        Ok(records)
    }
}
