//! Employee service layer.
//!
//! Every repository call runs under [`guard`], so callers of this service only
//! ever see structured [`Error`]s, whatever the adapter underneath does. Calls
//! are made inside the guarded future so a panic while building the adapter's
//! future is caught as well.

use std::sync::Arc;

use crate::domain::ports::EmployeeRepository;
use crate::domain::{CreateEmployeeRequest, Employee, EmployeeLookup, Error, guard};

/// Service operations over the employee repository.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Build the service around an injected repository.
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Create an employee.
    ///
    /// # Errors
    /// `INVALID_INPUT` for a blank name, `DUPLICATE_EMPLOYEE_ID` for a reused
    /// external code, or a normalised adapter fault.
    pub async fn create_employee(&self, request: CreateEmployeeRequest) -> Result<Employee, Error> {
        guard(async { self.repository.create(request).await }).await
    }

    /// List every employee in insertion order.
    ///
    /// # Errors
    /// Only normalised adapter faults.
    pub async fn get_employees(&self) -> Result<Vec<Employee>, Error> {
        guard(async { self.repository.list_all().await }).await
    }

    /// Fetch one employee.
    ///
    /// # Errors
    /// `NOT_FOUND` for an unknown identifier.
    pub async fn get_employee_by_id(&self, lookup: EmployeeLookup) -> Result<Employee, Error> {
        guard(async { self.repository.get_by_id(lookup).await }).await
    }

    /// Delete one employee.
    ///
    /// # Errors
    /// `NOT_FOUND` for an unknown identifier.
    pub async fn delete_employee(&self, lookup: EmployeeLookup) -> Result<(), Error> {
        guard(async { self.repository.delete_by_id(lookup).await }).await
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
