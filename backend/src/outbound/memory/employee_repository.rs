//! In-memory implementation of [`EmployeeRepository`].
//!
//! One mutex guards the whole collection and is held for the full duration of
//! each operation, so the duplicate check and the append in `create` cannot
//! interleave with another writer. Identifiers come from a counter that only
//! moves forward; deleting a record never frees its identifier.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{
    CreateEmployeeRequest, Employee, EmployeeLookup, Error, NewEmployee, normalize,
};

#[derive(Debug, Default)]
struct Records {
    employees: Vec<Employee>,
    last_id: u64,
}

impl Records {
    fn position(&self, id: u64) -> Result<usize, Error> {
        self.employees
            .iter()
            .position(|employee| employee.id == id)
            .ok_or_else(not_found)
    }
}

/// Employee repository backed by a process-local vector.
///
/// Construct one per process (or per test) and inject it; nothing about it is
/// global.
///
/// # Examples
/// ```
/// use roster::domain::ports::EmployeeRepository;
/// use roster::domain::CreateEmployeeRequest;
/// use roster::outbound::memory::InMemoryEmployeeRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryEmployeeRepository::new();
/// let ann = repo
///     .create(CreateEmployeeRequest {
///         employee_id: "E1".to_owned(),
///         name: "Ann".to_owned(),
///         department: None,
///     })
///     .await
///     .unwrap();
/// assert_eq!(ann.id, 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: Mutex<Records>,
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<MutexGuard<'_, Records>, Error> {
        self.records.lock().map_err(|_| {
            normalize(EmployeeRepositoryError::unavailable(
                "employee store lock poisoned",
            ))
        })
    }
}

fn not_found() -> Error {
    Error::not_found("Employee not found")
}

fn duplicate_employee_id(employee_id: &str) -> Error {
    let mut meta = Map::new();
    meta.insert("employeeId".to_owned(), Value::String(employee_id.to_owned()));
    Error::duplicate_employee_id("Employee ID already exists").with_meta(meta)
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee, Error> {
        let draft = NewEmployee::try_from(request)?;
        let mut records = self.records()?;

        if records
            .employees
            .iter()
            .any(|employee| employee.employee_id == draft.employee_id())
        {
            return Err(duplicate_employee_id(draft.employee_id()));
        }

        records.last_id += 1;
        let employee = Employee::from_draft(records.last_id, draft);
        records.employees.push(employee.clone());
        info!(
            id = employee.id,
            employee_id = %employee.employee_id,
            "employee created"
        );
        Ok(employee)
    }

    async fn list_all(&self) -> Result<Vec<Employee>, Error> {
        let records = self.records()?;
        debug!(count = records.employees.len(), "listing employees");
        Ok(records.employees.clone())
    }

    async fn get_by_id(&self, lookup: EmployeeLookup) -> Result<Employee, Error> {
        let records = self.records()?;
        records
            .employees
            .iter()
            .find(|employee| employee.id == lookup.id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn delete_by_id(&self, lookup: EmployeeLookup) -> Result<(), Error> {
        let mut records = self.records()?;
        let index = records.position(lookup.id)?;
        let removed = records.employees.remove(index);
        info!(id = removed.id, employee_id = %removed.employee_id, "employee deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "employee_repository_tests.rs"]
mod tests;
