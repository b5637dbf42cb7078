//! Employee HTTP handlers.
//!
//! ```text
//! POST   /api/v1/employees
//! GET    /api/v1/employees
//! GET    /api/v1/employees/{id}
//! DELETE /api/v1/employees/{id}
//! ```
//!
//! Every handler answers `200 OK` with an action response envelope; callers
//! branch on its `ok` field rather than on the HTTP status.

use actix_web::{delete, get, post, web};

use crate::domain::{ActionResponse, CreateEmployeeRequest, Employee, EmployeeLookup};
use crate::inbound::http::schemas::{
    CreateEmployeeRequestSchema, EmployeeListResponseSchema, EmployeeResponseSchema,
    EmptyResponseSchema, ErrorSchema,
};
use crate::inbound::http::state::HttpState;

/// Register the employee handlers on a scope or app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_employee)
        .service(list_employees)
        .service(get_employee)
        .service(delete_employee);
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = CreateEmployeeRequestSchema,
    responses(
        (status = 200, description = "Action response with the created employee", body = EmployeeResponseSchema),
        (status = 400, description = "Unparseable request body", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEmployeeRequest>,
) -> web::Json<ActionResponse<Employee>> {
    web::Json(state.employees.create_employee(payload.into_inner()).await)
}

/// List every employee in insertion order.
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "Action response with all employees", body = EmployeeListResponseSchema)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> web::Json<ActionResponse<Vec<Employee>>> {
    web::Json(state.employees.get_employees().await)
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    params(("id" = u64, Path, description = "Repository-assigned identifier")),
    responses(
        (status = 200, description = "Action response with the employee", body = EmployeeResponseSchema),
        (status = 400, description = "Identifier is not a number", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> web::Json<ActionResponse<Employee>> {
    let id = path.into_inner();
    web::Json(state.employees.get_employee_by_id(EmployeeLookup { id }).await)
}

/// Delete one employee.
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    params(("id" = u64, Path, description = "Repository-assigned identifier")),
    responses(
        (status = 200, description = "Action response without payload", body = EmptyResponseSchema),
        (status = 400, description = "Identifier is not a number", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> web::Json<ActionResponse<()>> {
    let id = path.into_inner();
    web::Json(state.employees.delete_employee(EmployeeLookup { id }).await)
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
