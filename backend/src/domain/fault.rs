//! Normalisation of arbitrary failures into structured errors.
//!
//! A [`Fault`] is whatever went wrong before anyone classified it: an already
//! structured [`Error`], some other `std::error::Error`, or a value that is
//! not an error at all (in practice a panic payload). [`normalize`] turns each
//! of them into an [`Error`] and never fails itself.

use std::any::Any;
use std::error::Error as StdError;

use tracing::error;

use super::Error;

/// A failure value caught at a boundary, before normalisation.
#[derive(Debug)]
pub enum Fault {
    /// Already part of the taxonomy.
    Structured(Error),
    /// An error value from code that does not speak the taxonomy.
    Unstructured(Box<dyn StdError + Send + Sync>),
    /// Something that is not an error value, such as a panic payload.
    Opaque(Box<dyn Any + Send>),
}

impl Fault {
    /// Classify a boxed error, recognising structured errors by downcasting.
    #[must_use]
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync>) -> Self {
        match error.downcast::<Error>() {
            Ok(structured) => Self::Structured(*structured),
            Err(other) => Self::Unstructured(other),
        }
    }

    /// Wrap a payload recovered from `catch_unwind`.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self::Opaque(payload)
    }

    /// Wrap any non-error value.
    pub fn opaque<T: Any + Send>(value: T) -> Self {
        Self::Opaque(Box::new(value))
    }
}

impl<E> From<E> for Fault
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::from_boxed(Box::new(error))
    }
}

/// Convert any failure into a structured [`Error`].
///
/// - Structured errors pass through unchanged.
/// - Other errors are logged and become `INTERNAL_ERROR` (500) keeping their
///   message.
/// - Non-error values are logged and become `UNKNOWN_ERROR` (500) with a
///   fixed message; the original value is dropped.
///
/// # Examples
/// ```
/// use roster::domain::{normalize, ErrorCode, Fault};
///
/// let err = normalize(std::io::Error::other("disk on fire"));
/// assert_eq!(err.code(), &ErrorCode::INTERNAL_ERROR);
/// assert_eq!(err.message(), "disk on fire");
///
/// let err = normalize(Fault::opaque(42_u8));
/// assert_eq!(err.code(), &ErrorCode::UNKNOWN_ERROR);
/// ```
pub fn normalize(fault: impl Into<Fault>) -> Error {
    match fault.into() {
        Fault::Structured(error) => error,
        Fault::Unstructured(source) => {
            error!(error = %source, "unhandled error normalised to internal error");
            Error::internal(source.to_string())
        }
        Fault::Opaque(payload) => {
            let detail = payload_text(payload.as_ref()).unwrap_or("<non-string value>");
            error!(payload = detail, "non-error failure normalised to unknown error");
            Error::unknown()
        }
    }
}

fn payload_text(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}
