use crate::{Error, Result};

use super::{Type, Value};

/// A named, typed entity field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: Type,
    pub value: Option<Value>,
}

impl Field {
    /// Creates a field, validating the name.
    pub fn new(name: impl Into<String>, ty: Type) -> Result<Field> {
        let name = name.into();
        if !is_valid_identifier(&name) {
            return Err(Error::invalid_identifier(name));
        }
        Ok(Field {
            name,
            ty,
            value: None,
        })
    }

    /// Creates a field carrying a value, converted to the field type.
    pub fn with_value(name: impl Into<String>, ty: Type, value: impl Into<Value>) -> Result<Field> {
        let mut field = Field::new(name, ty)?;
        field.value = Some(ty.cast(value.into())?);
        Ok(field)
    }
}

/// Returns `true` when `name` is a legal field or table identifier:
/// an ASCII letter followed by letters, digits, or underscores.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
