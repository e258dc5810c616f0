use crate::{Error, Result};

use super::Value;

/// The declared type of an entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Bool,
    Double,
    Int,
    String,
}

impl Type {
    /// Parses a type name.
    ///
    /// Names are case-insensitive and each type accepts its legacy synonyms
    /// (`integer`, `int`, `i`, and so on).
    pub fn parse(name: &str) -> Result<Type> {
        match name.to_lowercase().as_str() {
            "integer" | "int" | "i" => Ok(Type::Int),
            "real" | "float" | "double" | "d" => Ok(Type::Double),
            "string" | "str" | "s" => Ok(Type::String),
            "boolean" | "bool" | "b" => Ok(Type::Bool),
            _ => Err(Error::invalid_type_name(name)),
        }
    }

    /// Returns the prepared-statement parameter code for the type.
    pub fn code(self) -> char {
        match self {
            Type::Bool => 'b',
            Type::Double => 'd',
            Type::Int => 'i',
            Type::String => 's',
        }
    }

    /// Parses a prepared-statement parameter code.
    pub fn from_code(code: char) -> Result<Type> {
        match code {
            'b' => Ok(Type::Bool),
            'd' => Ok(Type::Double),
            'i' => Ok(Type::Int),
            's' => Ok(Type::String),
            _ => Err(Error::unknown_param_type(code)),
        }
    }

    /// Infers the type of a value.
    ///
    /// `Null` carries no type and fails inference.
    pub fn infer(value: &Value) -> Result<Type> {
        match value {
            Value::Bool(_) => Ok(Type::Bool),
            Value::Double(_) => Ok(Type::Double),
            Value::Int(_) => Ok(Type::Int),
            Value::String(_) => Ok(Type::String),
            Value::Null => Err(Error::type_inference(value.clone())),
        }
    }

    /// Returns the empty representative of the type.
    pub fn empty_value(self) -> Value {
        match self {
            Type::Bool => Value::Bool(false),
            Type::Double => Value::Double(0.0),
            Type::Int => Value::Int(0),
            Type::String => Value::String(String::new()),
        }
    }

    /// Converts a value to this type.
    ///
    /// `Null` passes through untouched. Numeric conversions widen int to
    /// double and truncate double to int. Strings convert under the legacy
    /// conventions: full decimal parse for ints (with a double-string
    /// fallback that truncates), comma-or-dot parse for doubles, and the
    /// case-insensitive literals `true`/`false` for bools. Bools convert to
    /// the strings `true`/`false` and the numbers 1/0.
    pub fn cast(self, value: Value) -> Result<Value> {
        match (self, value) {
            (_, Value::Null) => Ok(Value::Null),

            (Type::Int, Value::Int(v)) => Ok(Value::Int(v)),
            (Type::Int, Value::Double(v)) => Ok(Value::Int(v as i64)),
            (Type::Int, Value::Bool(v)) => Ok(Value::Int(v as i64)),
            (Type::Int, Value::String(v)) => match v.parse::<i64>() {
                Ok(n) => Ok(Value::Int(n)),
                Err(_) => match Type::parse_lenient_double(&v) {
                    Some(d) => Ok(Value::Int(d as i64)),
                    None => Err(Error::type_conversion(Value::String(v), Type::Int)),
                },
            },

            (Type::Double, Value::Double(v)) => Ok(Value::Double(v)),
            (Type::Double, Value::Int(v)) => Ok(Value::Double(v as f64)),
            (Type::Double, Value::Bool(v)) => Ok(Value::Double(if v { 1.0 } else { 0.0 })),
            (Type::Double, Value::String(v)) => match Type::parse_lenient_double(&v) {
                Some(d) => Ok(Value::Double(d)),
                None => Err(Error::type_conversion(Value::String(v), Type::Double)),
            },

            (Type::String, Value::String(v)) => Ok(Value::String(v)),
            (Type::String, Value::Int(v)) => Ok(Value::String(v.to_string())),
            (Type::String, Value::Double(v)) => Ok(Value::String(v.to_string())),
            (Type::String, Value::Bool(v)) => {
                Ok(Value::String(if v { "true" } else { "false" }.to_string()))
            }

            (Type::Bool, Value::Bool(v)) => Ok(Value::Bool(v)),
            (Type::Bool, Value::Int(v)) => Ok(Value::Bool(v != 0)),
            (Type::Bool, Value::Double(v)) => Ok(Value::Bool(v != 0.0)),
            (Type::Bool, Value::String(v)) => match v.to_lowercase().as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(Error::type_conversion(Value::String(v), Type::Bool)),
            },
        }
    }

    /// Parses a string that spells an integer canonically: the parsed
    /// value's decimal rendering must equal the input.
    pub fn parse_canonical_int(src: &str) -> Option<i64> {
        let parsed = src.parse::<i64>().ok()?;
        if parsed.to_string() == src {
            Some(parsed)
        } else {
            None
        }
    }

    /// Parses a double from a string, accepting a comma as the decimal
    /// separator. Non-finite results are rejected.
    pub fn parse_lenient_double(src: &str) -> Option<f64> {
        let parsed = src.replace(',', ".").trim().parse::<f64>().ok()?;
        if parsed.is_finite() {
            Some(parsed)
        } else {
            None
        }
    }
}
