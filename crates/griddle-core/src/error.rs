mod ambiguous_result;
mod database;
mod field_type_mismatch;
mod invalid_condition_data;
mod invalid_condition_type;
mod invalid_identifier;
mod invalid_statement;
mod invalid_type_name;
mod persist;
mod registry;
mod too_many_rows;
mod type_conversion;
mod type_inference;
mod type_mismatch;
mod unknown_field;
mod unknown_param_type;
mod unknown_query_type;
mod unsupported;

use ambiguous_result::AmbiguousResultError;
use database::DatabaseError;
use field_type_mismatch::FieldTypeMismatchError;
use invalid_condition_data::InvalidConditionDataError;
use invalid_condition_type::InvalidConditionTypeError;
use invalid_identifier::InvalidIdentifierError;
use invalid_statement::InvalidStatementError;
use invalid_type_name::InvalidTypeNameError;
use persist::PersistError;
use registry::RegistryError;
use std::sync::Arc;
use too_many_rows::TooManyRowsError;
use type_conversion::TypeConversionError;
use type_inference::TypeInferenceError;
use type_mismatch::TypeMismatchError;
use unknown_field::UnknownFieldError;
use unknown_param_type::UnknownParamTypeError;
use unknown_query_type::UnknownQueryTypeError;
use unsupported::UnsupportedError;

/// An error that can occur in Griddle.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Database(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    AmbiguousResult(AmbiguousResultError),
    Database(DatabaseError),
    FieldTypeMismatch(FieldTypeMismatchError),
    InvalidConditionData(InvalidConditionDataError),
    InvalidConditionType(InvalidConditionTypeError),
    InvalidIdentifier(InvalidIdentifierError),
    InvalidStatement(InvalidStatementError),
    InvalidTypeName(InvalidTypeNameError),
    Persist(PersistError),
    Registry(RegistryError),
    TooManyRows(TooManyRowsError),
    TypeConversion(TypeConversionError),
    TypeInference(TypeInferenceError),
    TypeMismatch(TypeMismatchError),
    UnknownField(UnknownFieldError),
    UnknownParamType(UnknownParamTypeError),
    UnknownQueryType(UnknownQueryTypeError),
    Unsupported(UnsupportedError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            AmbiguousResult(err) => core::fmt::Display::fmt(err, f),
            Database(err) => core::fmt::Display::fmt(err, f),
            FieldTypeMismatch(err) => core::fmt::Display::fmt(err, f),
            InvalidConditionData(err) => core::fmt::Display::fmt(err, f),
            InvalidConditionType(err) => core::fmt::Display::fmt(err, f),
            InvalidIdentifier(err) => core::fmt::Display::fmt(err, f),
            InvalidStatement(err) => core::fmt::Display::fmt(err, f),
            InvalidTypeName(err) => core::fmt::Display::fmt(err, f),
            Persist(err) => core::fmt::Display::fmt(err, f),
            Registry(err) => core::fmt::Display::fmt(err, f),
            TooManyRows(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            TypeInference(err) => core::fmt::Display::fmt(err, f),
            TypeMismatch(err) => core::fmt::Display::fmt(err, f),
            UnknownField(err) => core::fmt::Display::fmt(err, f),
            UnknownParamType(err) => core::fmt::Display::fmt(err, f),
            UnknownQueryType(err) => core::fmt::Display::fmt(err, f),
            Unsupported(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown griddle error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
