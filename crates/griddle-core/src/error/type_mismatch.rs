use super::Error;

/// Error when prepared-statement parameters do not satisfy the declared
/// type string.
///
/// Raised for a length mismatch between the type string and the value list,
/// and for any positional value that fails its declared slot.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    context: Box<str>,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "parameter type mismatch: {}", self.context)
    }
}

impl Error {
    /// Creates a parameter type mismatch error.
    pub fn type_mismatch(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatchError {
            context: context.into().into(),
        }))
    }

    /// Returns `true` if this error is a parameter type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
