use super::Error;

/// Error when a field type name is not in the synonym table.
#[derive(Debug)]
pub(super) struct InvalidTypeNameError {
    name: Box<str>,
}

impl std::error::Error for InvalidTypeNameError {}

impl core::fmt::Display for InvalidTypeNameError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid field type name: {}", self.name)
    }
}

impl Error {
    /// Creates an invalid type name error for the rejected name.
    pub fn invalid_type_name(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidTypeName(InvalidTypeNameError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid type name error.
    pub fn is_invalid_type_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidTypeName(_))
    }
}
