//! Domain types, services and ports.
//!
//! Purpose: hold the employee model, the structured error taxonomy and the
//! wrappers that keep failures inside that taxonomy. Nothing here knows about
//! HTTP; inbound adapters translate at their own edge.
//!
//! Public surface:
//! - `Error`, `ErrorCode`: structured failures.
//! - `Fault`, `normalize`: classification of arbitrary failures.
//! - `guard`, `with_error_handling`: fallible-operation wrapper.
//! - `ActionResponse`, `respond`, `with_action_handler`: boundary envelope.
//! - `Employee` and its request types; `EmployeeService`.

pub mod action;
pub mod employee;
pub mod employee_service;
pub mod error;
pub mod fault;
pub mod guard;
pub mod ports;
pub mod trace_id;

pub use self::action::{ActionError, ActionResponse, respond, with_action_handler};
pub use self::employee::{
    CreateEmployeeRequest, DEFAULT_DEPARTMENT, Employee, EmployeeLookup, NewEmployee,
};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode};
pub use self::fault::{Fault, normalize};
pub use self::guard::{guard, with_error_handling};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
