use super::Error;

/// Error when a statement combination is deliberately not supported.
///
/// Field-to-field `IN` and `BETWEEN` comparisons land here.
#[derive(Debug)]
pub(super) struct UnsupportedError {
    feature: Box<str>,
}

impl std::error::Error for UnsupportedError {}

impl core::fmt::Display for UnsupportedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported: {}", self.feature)
    }
}

impl Error {
    /// Creates an unsupported feature error.
    pub fn unsupported(feature: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Unsupported(UnsupportedError {
            feature: feature.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported feature error.
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Unsupported(_))
    }
}
