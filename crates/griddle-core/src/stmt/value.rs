/// A scalar database value.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Double-precision float value
    Double(f64),

    /// Signed 64-bit integer
    Int(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    /// Returns a value representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for the empty representatives: null, zero of either
    /// numeric type, the empty string, and `false`.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Bool(v) => !v,
            Self::Double(v) => *v == 0.0,
            Self::Int(v) => *v == 0,
            Self::Null => true,
            Self::String(v) => v.is_empty(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Renders the value as a SQL literal for the debug interface.
    ///
    /// Strings are single-quoted without any escaping, except the exact
    /// literal `NOW()` which passes through bare. This rendering exists for
    /// diagnostics and must never be executed.
    pub fn sql_literal(&self) -> String {
        match self {
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
            Self::Double(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::Null => "NULL".to_string(),
            Self::String(v) if v == "NOW()" => v.clone(),
            Self::String(v) => format!("'{v}'"),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Value {
        Value::Bool(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Value {
        Value::Double(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Value {
        Value::Int(src as i64)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Value {
        Value::Int(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Value {
        Value::String(src)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(src: Option<T>) -> Value {
        match src {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
