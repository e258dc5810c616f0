use super::Error;

/// Error when a prepared-statement type string holds a code outside `idsb`.
#[derive(Debug)]
pub(super) struct UnknownParamTypeError {
    code: char,
}

impl std::error::Error for UnknownParamTypeError {}

impl core::fmt::Display for UnknownParamTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown parameter type: {}", self.code)
    }
}

impl Error {
    /// Creates an unknown parameter type error for the code.
    pub fn unknown_param_type(code: char) -> Error {
        Error::from(super::ErrorKind::UnknownParamType(UnknownParamTypeError {
            code,
        }))
    }

    /// Returns `true` if this error is an unknown parameter type error.
    pub fn is_unknown_param_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownParamType(_))
    }
}
