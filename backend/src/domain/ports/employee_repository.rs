//! Port for the canonical employee collection.
//!
//! The repository owns every employee record and enforces the uniqueness and
//! existence rules. Adapters report rule violations as structured
//! [`Error`]s; faults inside the adapter itself use
//! [`EmployeeRepositoryError`] and are normalised on the way out.

use async_trait::async_trait;

use crate::domain::{CreateEmployeeRequest, Employee, EmployeeLookup, Error};

use super::define_port_error;

define_port_error! {
    /// Faults raised inside repository adapters.
    pub enum EmployeeRepositoryError {
        /// The backing store can no longer be used.
        Unavailable { message: String } =>
            "employee repository unavailable: {message}",
    }
}

/// Storage and lookup of employee records.
///
/// # Contract
///
/// - `create` rejects blank names with `INVALID_INPUT` and reused external
///   codes with `DUPLICATE_EMPLOYEE_ID`; otherwise it assigns a fresh
///   identifier and returns the stored record.
/// - `list_all` returns every record in insertion order.
/// - `get_by_id` and `delete_by_id` fail with `NOT_FOUND` for unknown
///   identifiers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Validate and store a new employee.
    async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee, Error>;

    /// Every stored employee, oldest first.
    async fn list_all(&self) -> Result<Vec<Employee>, Error>;

    /// The employee with the given identifier.
    async fn get_by_id(&self, lookup: EmployeeLookup) -> Result<Employee, Error>;

    /// Remove the employee with the given identifier.
    async fn delete_by_id(&self, lookup: EmployeeLookup) -> Result<(), Error>;
}
