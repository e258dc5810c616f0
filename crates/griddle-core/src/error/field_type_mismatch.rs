use crate::stmt::Type;

use super::Error;

/// Error when an operator requires a field type the field does not have.
///
/// `LIKE` and `NOT LIKE` only apply to string fields, for example.
#[derive(Debug)]
pub(super) struct FieldTypeMismatchError {
    field: Box<str>,
    expected: Type,
    actual: Type,
}

impl std::error::Error for FieldTypeMismatchError {}

impl core::fmt::Display for FieldTypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` expects {:?}, got {:?}",
            self.field, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a field type mismatch error.
    pub fn field_type_mismatch(field: impl Into<String>, expected: Type, actual: Type) -> Error {
        Error::from(super::ErrorKind::FieldTypeMismatch(FieldTypeMismatchError {
            field: field.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a field type mismatch error.
    pub fn is_field_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldTypeMismatch(_))
    }
}
