//! Boundary operations exposed to remote callers.
//!
//! Each operation resolves to an [`ActionResponse`] and never fails outwards.
//! Failures from the service layer are already structured; [`respond`]
//! normalises them again, which is a no-op for them and a safety net for
//! anything else.

use std::sync::Arc;

use crate::domain::ports::EmployeeRepository;
use crate::domain::{
    ActionResponse, CreateEmployeeRequest, Employee, EmployeeLookup, EmployeeService, respond,
};

/// The employee boundary: create, list, get and delete.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use roster::domain::CreateEmployeeRequest;
/// use roster::inbound::actions::EmployeeActions;
/// use roster::outbound::memory::InMemoryEmployeeRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let actions = EmployeeActions::from_repository(Arc::new(InMemoryEmployeeRepository::new()));
/// let response = actions
///     .create_employee(CreateEmployeeRequest {
///         employee_id: "E1".to_owned(),
///         name: String::new(),
///         department: None,
///     })
///     .await;
/// assert_eq!(response.error().unwrap().code.as_str(), "INVALID_INPUT");
/// # });
/// ```
#[derive(Clone)]
pub struct EmployeeActions {
    service: EmployeeService,
}

impl EmployeeActions {
    /// Expose an existing service.
    pub fn new(service: EmployeeService) -> Self {
        Self { service }
    }

    /// Build the service and boundary around a repository.
    pub fn from_repository(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self::new(EmployeeService::new(repository))
    }

    /// Create an employee.
    pub async fn create_employee(&self, request: CreateEmployeeRequest) -> ActionResponse<Employee> {
        respond(self.service.create_employee(request)).await
    }

    /// List all employees.
    pub async fn get_employees(&self) -> ActionResponse<Vec<Employee>> {
        respond(self.service.get_employees()).await
    }

    /// Fetch one employee.
    pub async fn get_employee_by_id(&self, lookup: EmployeeLookup) -> ActionResponse<Employee> {
        respond(self.service.get_employee_by_id(lookup)).await
    }

    /// Delete one employee.
    pub async fn delete_employee(&self, lookup: EmployeeLookup) -> ActionResponse<()> {
        respond(self.service.delete_employee(lookup)).await
    }
}
