use super::Error;

/// Error when a statement cannot be built from its inputs.
///
/// An INSERT with no assignable fields hits this, for example.
#[derive(Debug)]
pub(super) struct InvalidStatementError {
    context: Box<str>,
}

impl std::error::Error for InvalidStatementError {}

impl core::fmt::Display for InvalidStatementError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.context)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatementError {
            context: context.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidStatement(_))
    }
}
