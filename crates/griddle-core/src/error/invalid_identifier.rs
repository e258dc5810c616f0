use super::Error;

/// Error when a field or table name fails identifier validation.
///
/// Identifiers must start with an ASCII letter and continue with letters,
/// digits, or underscores. Everything fed to the SQL serializer as a name
/// passes this check first.
#[derive(Debug)]
pub(super) struct InvalidIdentifierError {
    name: Box<str>,
}

impl std::error::Error for InvalidIdentifierError {}

impl core::fmt::Display for InvalidIdentifierError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid identifier: `{}`", self.name)
    }
}

impl Error {
    /// Creates an invalid identifier error for the rejected name.
    pub fn invalid_identifier(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidIdentifier(InvalidIdentifierError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid identifier error.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidIdentifier(_))
    }
}
