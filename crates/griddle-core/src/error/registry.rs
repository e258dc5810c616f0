use super::Error;

/// Error from the connection registry.
///
/// Raised for unknown or duplicate connection names, a missing current
/// selection, or a poisoned registry lock.
#[derive(Debug)]
pub(super) struct RegistryError {
    context: Box<str>,
}

impl std::error::Error for RegistryError {}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "connection registry: {}", self.context)
    }
}

impl Error {
    /// Creates a connection registry error.
    pub fn registry(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Registry(RegistryError {
            context: context.into().into(),
        }))
    }

    /// Returns `true` if this error is a connection registry error.
    pub fn is_registry(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Registry(_))
    }
}
