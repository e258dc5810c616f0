use griddle_core::schema::Table;
use griddle_core::stmt::Value;
use griddle_core::{Error, Result};

use indexmap::IndexMap;

use std::sync::Arc;

/// An entity instance: a shared descriptor plus one value per field.
///
/// Fields start at their declared defaults and keep declaration order.
/// Setting a field converts the value to the field's declared type; a field
/// whose default is `Null` is untyped and accepts any value as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    table: Arc<Table>,
    values: IndexMap<String, Value>,
}

impl Record {
    /// Creates a record with every field at its default value.
    pub fn new(table: Arc<Table>) -> Record {
        let values = table
            .fields()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        Record { table, values }
    }

    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    /// Reads a field by name or alias.
    pub fn get(&self, name: &str) -> Result<&Value> {
        let canonical = self.resolve(name)?;
        Ok(&self.values[canonical])
    }

    /// Sets a field by name or alias, converting the value to the field's
    /// declared type.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let canonical = self.resolve(name)?.to_string();
        let value = match self.table.field_type(&canonical) {
            Some(ty) => ty.cast(value.into())?,
            None => value.into(),
        };
        self.values[&canonical] = value;
        Ok(())
    }

    /// Returns the primary-key value, if the entity declares one.
    pub fn primary_key_value(&self) -> Option<&Value> {
        let pk = self.table.primary_key()?;
        Some(&self.values[pk])
    }

    /// A record is new until it carries a usable primary-key value.
    ///
    /// Entities without a primary-key field are always new.
    pub fn is_new(&self) -> bool {
        match self.primary_key_value() {
            Some(value) => value.is_falsy(),
            None => true,
        }
    }

    /// Iterates field values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn resolve(&self, name: &str) -> Result<&str> {
        self.table
            .resolve(name)
            .ok_or_else(|| Error::unknown_field(self.table.name(), name))
    }
}
