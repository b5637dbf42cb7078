//! Normalisation of failures on the calling side.

use std::future::Future;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::warn;

use crate::domain::{Error, Fault, guard};

/// Await a client call so that caller code only ever observes [`Error`].
///
/// Transport failures, decode failures and panics are normalised and
/// returned; nothing is swallowed.
///
/// # Examples
/// ```
/// use roster::client::invoke;
/// use roster::domain::ErrorCode;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let result: Result<(), _> =
///     invoke(async { Err(std::io::Error::other("connection refused")) }).await;
/// assert_eq!(result.unwrap_err().code(), &ErrorCode::INTERNAL_ERROR);
/// # });
/// ```
pub async fn invoke<Fut, T, E>(call: Fut) -> Result<T, Error>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Fault>,
{
    guard(call).await.inspect_err(|error| {
        warn!(code = %error.code(), status = error.status(), "client call failed");
    })
}

/// Decorate `call` so every invocation runs under [`invoke`].
pub fn with_invocation<F, A, Fut, T, E>(
    call: F,
) -> impl Fn(A) -> BoxFuture<'static, Result<T, Error>> + Send + Sync
where
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Into<Fault> + Send + 'static,
{
    move |input| invoke(call(input)).boxed()
}
