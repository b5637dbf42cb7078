//! Inbound adapters that turn external calls into domain service calls.
//!
//! [`actions`] is the boundary every remote caller goes through; [`http`]
//! carries it over Actix Web.

pub mod actions;
pub mod http;
