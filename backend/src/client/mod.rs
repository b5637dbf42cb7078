//! Calling side of the employee boundary.
//!
//! [`EmployeeClient`] talks to a running server over HTTP, [`invoke`] keeps
//! whatever goes wrong on the way inside the structured taxonomy, and
//! [`EmployeeStore`] is the caller's local copy of what the server returned.

mod http;
mod invoke;
mod store;

pub use http::{EmployeeClient, EmployeeClientError};
pub use invoke::{invoke, with_invocation};
pub use store::EmployeeStore;
