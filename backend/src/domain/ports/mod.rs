//! Domain ports: the traits adapters implement to plug into the domain.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_repository;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
