use super::{Type, Value};

/// A value paired with its prepared-statement parameter type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub ty: Type,
    pub value: Value,
}

impl TypedValue {
    pub fn new(ty: Type, value: impl Into<Value>) -> TypedValue {
        TypedValue {
            ty,
            value: value.into(),
        }
    }

    /// Types a value by inference, with `Null` landing in a string slot.
    pub fn infer(value: impl Into<Value>) -> TypedValue {
        let value = value.into();
        let ty = Type::infer(&value).unwrap_or(Type::String);
        TypedValue { ty, value }
    }
}
