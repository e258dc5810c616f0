use super::Error;

/// Error when a condition operand has the wrong shape for its operator.
///
/// `IN` needs a list, `BETWEEN` needs exactly two values.
#[derive(Debug)]
pub(super) struct InvalidConditionDataError {
    context: Box<str>,
}

impl std::error::Error for InvalidConditionDataError {}

impl core::fmt::Display for InvalidConditionDataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid condition data: {}", self.context)
    }
}

impl Error {
    /// Creates an invalid condition data error.
    pub fn invalid_condition_data(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConditionData(
            InvalidConditionDataError {
                context: context.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid condition data error.
    pub fn is_invalid_condition_data(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConditionData(_))
    }
}
