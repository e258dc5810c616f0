use crate::stmt::Value;

use super::Error;

/// Error when no field type can be inferred for a value.
///
/// `Null` carries no type of its own, so inference over it fails.
#[derive(Debug)]
pub(super) struct TypeInferenceError {
    value: Value,
}

impl std::error::Error for TypeInferenceError {}

impl core::fmt::Display for TypeInferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot infer field type for {:?}", self.value)
    }
}

impl Error {
    /// Creates a type inference error for the value.
    pub fn type_inference(value: impl Into<Value>) -> Error {
        Error::from(super::ErrorKind::TypeInference(TypeInferenceError {
            value: value.into(),
        }))
    }

    /// Returns `true` if this error is a type inference error.
    pub fn is_type_inference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeInference(_))
    }
}
