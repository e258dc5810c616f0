use super::Error;

/// Error when a SQL template starts with an unrecognized keyword.
#[derive(Debug)]
pub(super) struct UnknownQueryTypeError {
    keyword: Box<str>,
}

impl std::error::Error for UnknownQueryTypeError {}

impl core::fmt::Display for UnknownQueryTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown query type: {}", self.keyword)
    }
}

impl Error {
    /// Creates an unknown query type error for the leading keyword.
    pub fn unknown_query_type(keyword: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownQueryType(UnknownQueryTypeError {
            keyword: keyword.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown query type error.
    pub fn is_unknown_query_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownQueryType(_))
    }
}
