use super::Error;

/// Error when an aggregate query does not produce exactly one row.
#[derive(Debug)]
pub(super) struct AmbiguousResultError {
    context: Box<str>,
}

impl std::error::Error for AmbiguousResultError {}

impl core::fmt::Display for AmbiguousResultError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "ambiguous result: {}", self.context)
    }
}

impl Error {
    /// Creates an ambiguous result error.
    pub fn ambiguous_result(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AmbiguousResult(AmbiguousResultError {
            context: context.into().into(),
        }))
    }

    /// Returns `true` if this error is an ambiguous result error.
    pub fn is_ambiguous_result(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AmbiguousResult(_))
    }
}
