use super::Error;

/// Error when saving a record fails at the persistence layer.
///
/// The canonical case is an INSERT whose last-insert-id comes back as
/// something other than a positive integer.
#[derive(Debug)]
pub(super) struct PersistError {
    context: Box<str>,
}

impl std::error::Error for PersistError {}

impl core::fmt::Display for PersistError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "persist failed: {}", self.context)
    }
}

impl Error {
    /// Creates a persist error.
    pub fn persist(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Persist(PersistError {
            context: context.into().into(),
        }))
    }

    /// Returns `true` if this error is a persist error.
    pub fn is_persist(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Persist(_))
    }
}
