//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only ever talk to the action
//! boundary, so they stay testable with any repository behind it.

use std::sync::Arc;

use crate::domain::ports::EmployeeRepository;
use crate::inbound::actions::EmployeeActions;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The employee action boundary.
    pub employees: EmployeeActions,
}

impl HttpState {
    /// Wrap an existing boundary.
    pub fn new(employees: EmployeeActions) -> Self {
        Self { employees }
    }

    /// Build the full stack on top of a repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use roster::inbound::http::state::HttpState;
    /// use roster::outbound::memory::InMemoryEmployeeRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::new()));
    /// let _employees = state.employees.clone();
    /// ```
    pub fn from_repository(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self::new(EmployeeActions::from_repository(repository))
    }
}
