//! Structured error taxonomy shared by every layer.
//!
//! Failures are values with a stable shape rather than an open set of types:
//! a machine-readable [`ErrorCode`], a human message, an HTTP-like status and
//! optional metadata. The type is transport agnostic; inbound adapters decide
//! how much of it crosses their boundary.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::TraceId;

/// Status used when a caller does not pick one.
pub const DEFAULT_STATUS: u16 = 400;

/// Message carried by [`ErrorCode::UNKNOWN_ERROR`] failures.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unexpected error";

/// Stable machine-readable error category.
///
/// The set is open: components may mint their own codes with
/// [`ErrorCode::custom`] as long as they also pick a status and message.
///
/// # Examples
/// ```
/// use roster::domain::ErrorCode;
///
/// assert_eq!(ErrorCode::NOT_FOUND.as_str(), "NOT_FOUND");
/// assert_eq!(ErrorCode::custom("RATE_LIMITED").as_str(), "RATE_LIMITED");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(Cow<'static, str>);

impl ErrorCode {
    /// The request is malformed or fails validation.
    pub const INVALID_INPUT: Self = Self(Cow::Borrowed("INVALID_INPUT"));
    /// Another employee already uses the external employee code.
    pub const DUPLICATE_EMPLOYEE_ID: Self = Self(Cow::Borrowed("DUPLICATE_EMPLOYEE_ID"));
    /// The requested record does not exist.
    pub const NOT_FOUND: Self = Self(Cow::Borrowed("NOT_FOUND"));
    /// A generic failure escaped from internal code.
    pub const INTERNAL_ERROR: Self = Self(Cow::Borrowed("INTERNAL_ERROR"));
    /// Something that was not an error value at all went wrong.
    pub const UNKNOWN_ERROR: Self = Self(Cow::Borrowed("UNKNOWN_ERROR"));

    /// Mint a code outside the built-in set.
    pub fn custom(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    /// The wire representation of the code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code denotes a server-side fault whose message should not
    /// reach clients verbatim.
    #[must_use]
    pub fn is_server_fault(&self) -> bool {
        *self == Self::INTERNAL_ERROR || *self == Self::UNKNOWN_ERROR
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured failure raised by any fallible operation.
///
/// Builder methods consume the value, so an error never changes once it has
/// been handed to someone else.
///
/// # Examples
/// ```
/// use roster::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Employee not found");
/// assert_eq!(err.code(), &ErrorCode::NOT_FOUND);
/// assert_eq!(err.status(), 404);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl Error {
    /// Create an error with the default status.
    ///
    /// The message is kept verbatim, empty or not. The trace identifier in
    /// scope, if any, is captured.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: DEFAULT_STATUS,
            meta: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Create an error without a message; the code stands in for it.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::{Error, ErrorCode};
    ///
    /// assert_eq!(Error::from_code(ErrorCode::NOT_FOUND).message(), "NOT_FOUND");
    /// ```
    pub fn from_code(code: ErrorCode) -> Self {
        let message = code.as_str().to_owned();
        Self::new(code, message)
    }

    /// Replace the status.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Attach free-form metadata.
    ///
    /// # Examples
    /// ```
    /// use roster::domain::Error;
    /// use serde_json::{json, Map};
    ///
    /// let mut meta = Map::new();
    /// meta.insert("field".to_owned(), json!("name"));
    /// let err = Error::invalid_input("Employee name required").with_meta(meta);
    /// assert!(err.meta().is_some());
    /// ```
    #[must_use]
    pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Attach an explicit trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::INVALID_INPUT`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_INPUT, message)
    }

    /// Convenience constructor for [`ErrorCode::DUPLICATE_EMPLOYEE_ID`].
    pub fn duplicate_employee_id(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DUPLICATE_EMPLOYEE_ID, message)
    }

    /// Convenience constructor for [`ErrorCode::NOT_FOUND`] with status 404.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NOT_FOUND, message).with_status(404)
    }

    /// Convenience constructor for [`ErrorCode::INTERNAL_ERROR`] with status 500.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INTERNAL_ERROR, message).with_status(500)
    }

    /// The [`ErrorCode::UNKNOWN_ERROR`] failure with its fixed message.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(ErrorCode::UNKNOWN_ERROR, UNKNOWN_ERROR_MESSAGE).with_status(500)
    }

    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP-like status.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Optional metadata.
    #[must_use]
    pub fn meta(&self) -> Option<&Map<String, Value>> {
        self.meta.as_ref()
    }

    /// Trace identifier of the request that produced the error.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
