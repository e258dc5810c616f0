use super::Error;

/// Error when a condition operator token is not recognized.
#[derive(Debug)]
pub(super) struct InvalidConditionTypeError {
    operator: Box<str>,
}

impl std::error::Error for InvalidConditionTypeError {}

impl core::fmt::Display for InvalidConditionTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown condition operator: {}", self.operator)
    }
}

impl Error {
    /// Creates an invalid condition type error naming the rejected token.
    pub fn invalid_condition_type(operator: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConditionType(
            InvalidConditionTypeError {
                operator: operator.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid condition type error.
    pub fn is_invalid_condition_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConditionType(_))
    }
}
