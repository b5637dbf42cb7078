//! Caller-side copy of the employee list.

use crate::domain::Employee;

/// Local cache of employees the caller has seen.
///
/// The server stays the owner of the canonical collection; this only mirrors
/// it for display.
///
/// # Examples
/// ```
/// use roster::client::EmployeeStore;
/// use roster::domain::Employee;
///
/// let ann = Employee {
///     id: 1,
///     employee_id: "E1".to_owned(),
///     name: "Ann".to_owned(),
///     department: "general".to_owned(),
/// };
/// let mut store = EmployeeStore::default();
/// store.add_employee(ann.clone());
/// store.add_employee(ann);
/// assert_eq!(store.employees().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
}

impl EmployeeStore {
    /// Replace the cached list.
    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }

    /// Append an employee unless one with the same `id` is cached.
    pub fn add_employee(&mut self, employee: Employee) {
        if self.employees.iter().any(|known| known.id == employee.id) {
            return;
        }
        self.employees.push(employee);
    }

    /// Drop the employee with `id`, if cached.
    pub fn remove_employee(&mut self, id: u64) {
        self.employees.retain(|employee| employee.id != id);
    }

    /// Cached employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn employee(id: u64, employee_id: &str) -> Employee {
        Employee {
            id,
            employee_id: employee_id.to_owned(),
            name: format!("Employee {id}"),
            department: "general".to_owned(),
        }
    }

    #[fixture]
    fn store() -> EmployeeStore {
        let mut store = EmployeeStore::default();
        store.set_employees(vec![employee(1, "E1"), employee(2, "E2")]);
        store
    }

    #[rstest]
    fn add_ignores_known_ids(mut store: EmployeeStore) {
        store.add_employee(Employee {
            name: "Renamed".to_owned(),
            ..employee(1, "E1")
        });
        assert_eq!(store.employees(), [employee(1, "E1"), employee(2, "E2")]);
    }

    #[rstest]
    fn add_appends_new_ids(mut store: EmployeeStore) {
        store.add_employee(employee(3, "E3"));
        let ids: Vec<u64> = store.employees().iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[rstest]
    #[case::known(1, &[2])]
    #[case::unknown(9, &[1, 2])]
    fn remove_drops_only_the_matching_id(
        mut store: EmployeeStore,
        #[case] id: u64,
        #[case] remaining: &[u64],
    ) {
        store.remove_employee(id);
        let ids: Vec<u64> = store.employees().iter().map(|e| e.id).collect();
        assert_eq!(ids, remaining);
    }

    #[rstest]
    fn set_replaces_everything(mut store: EmployeeStore) {
        store.set_employees(vec![employee(7, "E7")]);
        assert_eq!(store.employees(), [employee(7, "E7")]);
    }
}
