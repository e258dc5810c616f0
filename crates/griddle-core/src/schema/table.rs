use indexmap::IndexMap;

use crate::stmt::{is_valid_identifier, Type, Value};
use crate::{Error, Result};

/// An entity descriptor: table name, optional primary-key field, ordered
/// fields with their default values, and an alias map.
///
/// Descriptors are immutable once built and are shared by every record of
/// the entity. Field order is the order fields were declared in and is
/// preserved through statement serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    primary_key: Option<String>,
    fields: IndexMap<String, Value>,
    aliases: IndexMap<String, String>,
}

impl Table {
    /// Starts building a descriptor for the named table.
    pub fn builder(name: impl Into<String>) -> TableBuilder {
        TableBuilder {
            name: name.into(),
            primary_key: None,
            fields: IndexMap::new(),
            aliases: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_key(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Resolves a field or alias name to the canonical field name.
    ///
    /// Canonical names win over aliases of the same spelling.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        if let Some((canonical, _)) = self.fields.get_key_value(name) {
            return Some(canonical.as_str());
        }
        self.aliases.get(name).map(|canonical| canonical.as_str())
    }

    /// Returns the default value of a canonical field name.
    pub fn default_value(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the declared type of a field, derived from its default
    /// value. A `Null` default leaves the field untyped.
    pub fn field_type(&self, field: &str) -> Option<Type> {
        Type::infer(self.fields.get(field)?).ok()
    }

    /// Iterates fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`Table`].
///
/// Declaring a field twice overwrites its default in place. All identifier
/// and membership validation happens in [`TableBuilder::build`].
#[derive(Debug)]
pub struct TableBuilder {
    name: String,
    primary_key: Option<String>,
    fields: IndexMap<String, Value>,
    aliases: IndexMap<String, String>,
}

impl TableBuilder {
    /// Declares a field with its default value.
    ///
    /// The default value doubles as the field's declared type; a `Null`
    /// default leaves the field untyped.
    pub fn field(mut self, name: impl Into<String>, default: impl Into<Value>) -> TableBuilder {
        self.fields.insert(name.into(), default.into());
        self
    }

    /// Declares the primary-key field. Must also be declared via `field`.
    pub fn primary_key(mut self, name: impl Into<String>) -> TableBuilder {
        self.primary_key = Some(name.into());
        self
    }

    /// Declares an alias for a canonical field name.
    pub fn alias(mut self, alias: impl Into<String>, field: impl Into<String>) -> TableBuilder {
        self.aliases.insert(alias.into(), field.into());
        self
    }

    pub fn build(self) -> Result<Table> {
        if !is_valid_identifier(&self.name) {
            return Err(Error::invalid_identifier(self.name));
        }
        for field in self.fields.keys() {
            if !is_valid_identifier(field) {
                return Err(Error::invalid_identifier(field.clone()));
            }
        }
        if let Some(ref pk) = self.primary_key {
            if !self.fields.contains_key(pk) {
                return Err(Error::unknown_field(self.name.clone(), pk.clone()));
            }
        }
        for (alias, field) in &self.aliases {
            if !is_valid_identifier(alias) {
                return Err(Error::invalid_identifier(alias.clone()));
            }
            if !self.fields.contains_key(field) {
                return Err(Error::unknown_field(self.name.clone(), field.clone()));
            }
        }
        Ok(Table {
            name: self.name,
            primary_key: self.primary_key,
            fields: self.fields,
            aliases: self.aliases,
        })
    }
}
