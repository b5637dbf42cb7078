//! Employee records and the requests that act on them.
//!
//! ## Invariants
//! - `id` is assigned by the repository and never reused.
//! - `employee_id` is unique across live records.
//! - `name` is non-empty once trimmed of whitespace.
//! - `department` falls back to [`DEFAULT_DEPARTMENT`] when omitted or blank.

use serde::{Deserialize, Serialize};

use super::Error;

/// Department assigned when a request does not name one.
pub const DEFAULT_DEPARTMENT: &str = "general";

/// A stored employee record.
///
/// # Examples
/// ```
/// use roster::domain::{CreateEmployeeRequest, Employee, NewEmployee};
///
/// let draft = NewEmployee::try_from(CreateEmployeeRequest {
///     employee_id: "E1".to_owned(),
///     name: "Ann".to_owned(),
///     department: None,
/// })
/// .unwrap();
/// let employee = Employee::from_draft(1, draft);
/// assert_eq!(employee.department, "general");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Repository-assigned identifier.
    pub id: u64,
    /// External employee code.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Department name.
    pub department: String,
}

impl Employee {
    /// Materialise a validated draft under the given identifier.
    #[must_use]
    pub fn from_draft(id: u64, draft: NewEmployee) -> Self {
        let NewEmployee {
            employee_id,
            name,
            department,
        } = draft;
        Self {
            id,
            employee_id,
            name,
            department,
        }
    }
}

/// Input for creating an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// External employee code.
    #[serde(default)]
    pub employee_id: String,
    /// Display name; must not be blank.
    #[serde(default)]
    pub name: String,
    /// Optional department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Input addressing one employee by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLookup {
    /// Repository-assigned identifier.
    pub id: u64,
}

/// A create request that passed validation and had defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    employee_id: String,
    name: String,
    department: String,
}

impl NewEmployee {
    /// External employee code of the draft.
    #[must_use]
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }
}

impl TryFrom<CreateEmployeeRequest> for NewEmployee {
    type Error = Error;

    /// Validate a create request and apply defaults.
    ///
    /// Blankness is judged after trimming: a whitespace-only name is rejected
    /// with `INVALID_INPUT` just like an empty one, and a whitespace-only
    /// department is replaced by [`DEFAULT_DEPARTMENT`]. Values that are not
    /// blank are stored untrimmed.
    fn try_from(request: CreateEmployeeRequest) -> Result<Self, Self::Error> {
        let CreateEmployeeRequest {
            employee_id,
            name,
            department,
        } = request;

        if name.trim().is_empty() {
            return Err(Error::invalid_input("Employee name required"));
        }

        let department = department
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_owned());

        Ok(Self {
            employee_id,
            name,
            department,
        })
    }
}
