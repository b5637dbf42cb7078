//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local storage for the employee collection.
//!
//! Adapters translate between the port contract and their backing store. The
//! rules they enforce are the port's rules, nothing more.

pub mod memory;
