use crate::{Error, Result};

use super::{ConditionOp, Field, Type, Value};

/// The right-hand side of a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A single comparison value
    Value(Value),

    /// An ordered list of comparison values (`IN`, `BETWEEN`)
    List(Vec<Value>),

    /// Another field of the same entity
    Field(Field),
}

/// A single field comparison.
///
/// Conditions validate their shape and convert their operands at
/// construction, so rendering one later cannot fail. `IN` lists are
/// de-duplicated after conversion, first occurrence winning.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: Field,
    pub op: ConditionOp,
    pub operand: Operand,
}

impl Condition {
    /// Builds a condition from an operator token.
    pub fn new(field: Field, op: &str, operand: impl Into<Operand>) -> Result<Condition> {
        let op = ConditionOp::parse(op)?;
        Condition::with_op(field, op, operand)
    }

    /// Builds a condition from an already-parsed operator.
    pub fn with_op(field: Field, op: ConditionOp, operand: impl Into<Operand>) -> Result<Condition> {
        let operand = check_operand(&field, op, operand.into())?;
        Ok(Condition { field, op, operand })
    }
}

fn check_operand(field: &Field, op: ConditionOp, operand: Operand) -> Result<Operand> {
    use ConditionOp::*;

    match operand {
        Operand::Value(value) => match op {
            Eq | Ne | Lt | Gt => Ok(Operand::Value(field.ty.cast(value)?)),
            Like | NotLike => {
                check_string_field(field)?;
                Ok(Operand::Value(field.ty.cast(value)?))
            }
            In | NotIn => Err(Error::invalid_condition_data(format!(
                "{op} requires a list operand"
            ))),
            Between => Err(Error::invalid_condition_data(
                "BETWEEN requires a two-value list",
            )),
        },
        Operand::List(values) => match op {
            In | NotIn => {
                let mut converted: Vec<Value> = Vec::with_capacity(values.len());
                for value in values {
                    let value = field.ty.cast(value)?;
                    if !converted.contains(&value) {
                        converted.push(value);
                    }
                }
                Ok(Operand::List(converted))
            }
            Between => {
                if values.len() != 2 {
                    return Err(Error::invalid_condition_data(format!(
                        "BETWEEN requires exactly two values, got {}",
                        values.len()
                    )));
                }
                let mut converted = Vec::with_capacity(2);
                for value in values {
                    converted.push(field.ty.cast(value)?);
                }
                Ok(Operand::List(converted))
            }
            _ => Err(Error::invalid_condition_data(format!(
                "{op} requires a single value"
            ))),
        },
        Operand::Field(other) => match op {
            Eq | Ne | Lt | Gt => Ok(Operand::Field(other)),
            Like | NotLike => {
                check_string_field(field)?;
                check_string_field(&other)?;
                Ok(Operand::Field(other))
            }
            In | NotIn | Between => {
                Err(Error::unsupported(format!("{op} against another field")))
            }
        },
    }
}

fn check_string_field(field: &Field) -> Result<()> {
    if field.ty != Type::String {
        return Err(Error::field_type_mismatch(
            &field.name,
            Type::String,
            field.ty,
        ));
    }
    Ok(())
}

impl From<Value> for Operand {
    fn from(src: Value) -> Operand {
        Operand::Value(src)
    }
}

impl From<Vec<Value>> for Operand {
    fn from(src: Vec<Value>) -> Operand {
        Operand::List(src)
    }
}

impl From<Field> for Operand {
    fn from(src: Field) -> Operand {
        Operand::Field(src)
    }
}

impl From<bool> for Operand {
    fn from(src: bool) -> Operand {
        Operand::Value(src.into())
    }
}

impl From<f64> for Operand {
    fn from(src: f64) -> Operand {
        Operand::Value(src.into())
    }
}

impl From<i64> for Operand {
    fn from(src: i64) -> Operand {
        Operand::Value(src.into())
    }
}

impl From<&str> for Operand {
    fn from(src: &str) -> Operand {
        Operand::Value(src.into())
    }
}

impl From<String> for Operand {
    fn from(src: String) -> Operand {
        Operand::Value(src.into())
    }
}
