use super::Error;

/// Error when a single-row fetch finds more than one row.
///
/// Hitting this means the database returned multiple rows for a query that
/// carries a `LIMIT 1` contract, which points at a broken driver or a
/// hand-written template that dropped the limit.
#[derive(Debug)]
pub(super) struct TooManyRowsError {
    context: Option<Box<str>>,
}

impl std::error::Error for TooManyRowsError {}

impl core::fmt::Display for TooManyRowsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("too many rows")?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a too many rows error.
    ///
    /// The context parameter names the entity or query that hit the problem.
    pub fn too_many_rows(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TooManyRows(TooManyRowsError {
            context: Some(context.into().into()),
        }))
    }

    /// Returns `true` if this error is a too many rows error.
    pub fn is_too_many_rows(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TooManyRows(_))
    }
}
