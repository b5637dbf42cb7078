//! Wrapping fallible operations so only structured errors escape.
//!
//! [`guard`] awaits an operation and normalises whatever comes out of it,
//! including panics, then hands the failure back to the caller. It propagates;
//! it never swallows. Side effects the operation performed before failing are
//! left as they are.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use super::{Error, Fault, normalize};

/// Await `operation`, normalising its failure or panic into an [`Error`].
///
/// # Examples
/// ```
/// use roster::domain::{guard, ErrorCode};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let result: Result<(), _> =
///     guard(async { Err(std::io::Error::other("socket closed")) }).await;
/// let err = result.unwrap_err();
/// assert_eq!(err.code(), &ErrorCode::INTERNAL_ERROR);
/// # });
/// ```
pub async fn guard<Fut, T, E>(operation: Fut) -> Result<T, Error>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Fault>,
{
    match AssertUnwindSafe(operation).catch_unwind().await {
        Ok(result) => result.map_err(normalize),
        Err(payload) => Err(normalize(Fault::from_panic(payload))),
    }
}

/// Decorate `operation` so every call runs under [`guard`].
///
/// The returned closure has the same input as `operation`; its output keeps
/// the success type and swaps the failure type for [`Error`].
///
/// # Examples
/// ```
/// use roster::domain::{with_error_handling, Error};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let halve = with_error_handling(|n: u32| async move {
///     if n % 2 == 0 { Ok(n / 2) } else { Err(Error::invalid_input("odd")) }
/// });
/// assert_eq!(halve(4).await.unwrap(), 2);
/// assert_eq!(halve(3).await.unwrap_err().message(), "odd");
/// # });
/// ```
pub fn with_error_handling<F, A, Fut, T, E>(
    operation: F,
) -> impl Fn(A) -> BoxFuture<'static, Result<T, Error>> + Send + Sync
where
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Into<Fault> + Send + 'static,
{
    move |input| guard(operation(input)).boxed()
}
