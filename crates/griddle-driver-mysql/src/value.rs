use griddle_core::stmt::Value as CoreValue;
use griddle_core::{Error, Result};

use mysql::prelude::ToValue;

#[derive(Debug)]
pub struct Value(CoreValue);

impl Value {
    pub(crate) fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a driver cell into a core value.
    ///
    /// Text and binary columns both arrive as bytes and must be valid
    /// UTF-8. Temporal and other exotic column types are not modeled.
    pub(crate) fn from_sql(value: mysql::Value) -> Result<Value> {
        Ok(Value(match value {
            mysql::Value::NULL => CoreValue::Null,
            mysql::Value::Bytes(bytes) => {
                CoreValue::String(String::from_utf8(bytes).map_err(Error::database)?)
            }
            mysql::Value::Int(v) => CoreValue::Int(v),
            mysql::Value::UInt(v) => CoreValue::Int(v as i64),
            mysql::Value::Float(v) => CoreValue::Double(v as f64),
            mysql::Value::Double(v) => CoreValue::Double(v),
            value => return Err(Error::unsupported(format!("column value {value:?}"))),
        }))
    }
}

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Value {
        Value(value)
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql::Value {
        match &self.0 {
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::Double(value) => value.to_value(),
            CoreValue::Int(value) => value.to_value(),
            CoreValue::Null => mysql::Value::NULL,
            CoreValue::String(value) => value.to_value(),
        }
    }
}
