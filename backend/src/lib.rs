//! Employee records behind a structured error pipeline.
//!
//! Failures are normalised into [`domain::Error`] at every layer and folded
//! into [`domain::ActionResponse`] envelopes at the boundary, so callers
//! always receive a value they can branch on.

pub mod client;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
