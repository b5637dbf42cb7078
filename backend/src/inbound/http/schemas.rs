//! OpenAPI schema definitions for wire types.
//!
//! Domain types stay free of utoipa derives. These mirrors describe the JSON
//! the HTTP adapter actually sends and receives.

#![expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]

use utoipa::ToSchema;

/// Structured error body returned when a request is rejected before it
/// reaches the action boundary.
#[derive(ToSchema)]
#[schema(as = Error)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "INVALID_INPUT")]
    code: String,
    /// Human-readable message.
    #[schema(example = "Invalid request body")]
    message: String,
    /// HTTP-like status.
    #[schema(example = 400)]
    status: u16,
    /// Free-form metadata.
    meta: Option<serde_json::Value>,
    /// Correlation identifier of the failed request.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// Failure projection carried by action responses.
#[derive(ToSchema)]
#[schema(as = ActionError)]
pub struct ActionErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "DUPLICATE_EMPLOYEE_ID")]
    code: String,
    /// Human-readable message.
    #[schema(example = "Employee ID already exists")]
    message: String,
}

/// Employee record.
#[derive(ToSchema)]
#[schema(as = Employee)]
pub struct EmployeeSchema {
    /// Repository-assigned identifier.
    #[schema(example = 1)]
    id: u64,
    /// External employee code.
    #[schema(rename = "employeeId", example = "E1")]
    employee_id: String,
    /// Display name.
    #[schema(example = "Ann")]
    name: String,
    /// Department; `general` when none was given.
    #[schema(example = "general")]
    department: String,
}

/// Body of `POST /api/v1/employees`.
#[derive(ToSchema)]
#[schema(as = CreateEmployeeRequest)]
pub struct CreateEmployeeRequestSchema {
    /// External employee code.
    #[schema(rename = "employeeId", example = "E1")]
    employee_id: String,
    /// Display name; must not be blank.
    #[schema(example = "Ann")]
    name: String,
    /// Optional department.
    #[schema(example = "HR")]
    department: Option<String>,
}

/// Action response carrying one employee.
#[derive(ToSchema)]
#[schema(as = EmployeeResponse)]
pub struct EmployeeResponseSchema {
    /// Discriminant.
    ok: bool,
    /// Present when `ok` is true.
    data: Option<EmployeeSchema>,
    /// Present when `ok` is false.
    error: Option<ActionErrorSchema>,
}

/// Action response carrying the employee list.
#[derive(ToSchema)]
#[schema(as = EmployeeListResponse)]
pub struct EmployeeListResponseSchema {
    /// Discriminant.
    ok: bool,
    /// Present when `ok` is true.
    data: Option<Vec<EmployeeSchema>>,
    /// Present when `ok` is false.
    error: Option<ActionErrorSchema>,
}

/// Action response with no payload.
#[derive(ToSchema)]
#[schema(as = EmptyResponse)]
pub struct EmptyResponseSchema {
    /// Discriminant.
    ok: bool,
    /// Present when `ok` is false.
    error: Option<ActionErrorSchema>,
}
