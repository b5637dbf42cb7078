//! Discriminated responses for operations that must never fail outwards.
//!
//! Anything crossing a process or trust edge is answered with an
//! [`ActionResponse`]: the value on success, or a reduced error projection on
//! failure. Status, metadata and trace identifiers stay behind.
//!
//! Wire shape:
//!
//! ```text
//! { "ok": true,  "data": <T> }
//! { "ok": false, "error": { "code": "...", "message": "..." } }
//! ```

use std::future::Future;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use serde::de::{self, IntoDeserializer};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Error, ErrorCode, Fault, guard};

/// The part of an [`Error`] that crosses the action boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionError {
    /// Machine-readable error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl From<Error> for ActionError {
    fn from(error: Error) -> Self {
        Self {
            code: error.code().clone(),
            message: error.message().to_owned(),
        }
    }
}

impl From<ActionError> for Error {
    /// Rebuild a structured error on the receiving side. The status did not
    /// travel, so the code's conventional status is used.
    fn from(error: ActionError) -> Self {
        let status = conventional_status(&error.code);
        Error::new(error.code, error.message).with_status(status)
    }
}

fn conventional_status(code: &ErrorCode) -> u16 {
    if *code == ErrorCode::NOT_FOUND {
        404
    } else if code.is_server_fault() {
        500
    } else {
        super::error::DEFAULT_STATUS
    }
}

/// Success or failure of a boundary operation.
///
/// # Examples
/// ```
/// use roster::domain::{ActionResponse, Error};
///
/// let ok: ActionResponse<u8> = ActionResponse::Success(1);
/// assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"ok":true,"data":1}"#);
///
/// let failed: ActionResponse<u8> = Err(Error::not_found("Employee not found")).into();
/// assert!(!failed.is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResponse<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed; only code and message are kept.
    Failure(ActionError),
}

impl<T> ActionResponse<T> {
    /// Whether this is the success variant.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrow the success value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure projection, if any.
    pub fn error(&self) -> Option<&ActionError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Map the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionResponse<U> {
        match self {
            Self::Success(data) => ActionResponse::Success(f(data)),
            Self::Failure(error) => ActionResponse::Failure(error),
        }
    }

    /// Turn the response back into a `Result` on the receiving side.
    ///
    /// # Errors
    /// Returns the rebuilt [`Error`] for the failure variant.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error.into()),
        }
    }
}

impl<T> From<Result<T, Error>> for ActionResponse<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

/// Await `operation` and fold the outcome into an [`ActionResponse`].
///
/// Failures and panics are normalised first, so the response is always
/// produced.
///
/// # Examples
/// ```
/// use roster::domain::{respond, ErrorCode, Fault};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let response = respond(async { Err::<(), _>(Fault::opaque(42)) }).await;
/// assert_eq!(response.error().unwrap().code, ErrorCode::UNKNOWN_ERROR);
/// # });
/// ```
pub async fn respond<Fut, T, E>(operation: Fut) -> ActionResponse<T>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Fault>,
{
    guard(operation).await.into()
}

/// Decorate `operation` so every call resolves to an [`ActionResponse`].
pub fn with_action_handler<F, A, Fut, T, E>(
    operation: F,
) -> impl Fn(A) -> BoxFuture<'static, ActionResponse<T>> + Send + Sync
where
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Into<Fault> + Send + 'static,
{
    move |input| respond(operation(input)).boxed()
}

impl<T: Serialize> Serialize for ActionResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ActionResponse", 2)?;
        match self {
            Self::Success(data) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure(error) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope<T> {
    ok: bool,
    data: Option<T>,
    error: Option<ActionError>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ActionResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Envelope { ok, data, error } = Envelope::<T>::deserialize(deserializer)?;
        match (ok, data, error) {
            (true, Some(data), None) => Ok(Self::Success(data)),
            // `null` or missing data is how unit results travel.
            (true, None, None) => {
                T::deserialize(IntoDeserializer::<'de, D::Error>::into_deserializer(()))
                    .map(Self::Success)
            }
            (false, None, Some(error)) => Ok(Self::Failure(error)),
            (true, _, Some(_)) => Err(de::Error::custom(
                "successful action response must not carry an error",
            )),
            (false, _, _) => Err(de::Error::custom(
                "failed action response must carry an error and no data",
            )),
        }
    }
}
