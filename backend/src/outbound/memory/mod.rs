//! In-memory adapters. State lives as long as the adapter value does.

mod employee_repository;

pub use employee_repository::InMemoryEmployeeRepository;
