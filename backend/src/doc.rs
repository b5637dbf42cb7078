//! OpenAPI document for the HTTP surface.
//!
//! Served through Swagger UI in debug builds and printed by the
//! `openapi-dump` binary for external tooling. Schemas come from the mirror
//! types in [`crate::inbound::http::schemas`] so domain types stay free of
//! utoipa derives.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ActionErrorSchema, CreateEmployeeRequestSchema, EmployeeListResponseSchema,
    EmployeeResponseSchema, EmployeeSchema, EmptyResponseSchema, ErrorSchema,
};

/// OpenAPI document for the roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "Employee records behind an action-response boundary, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ActionErrorSchema,
        EmployeeSchema,
        CreateEmployeeRequestSchema,
        EmployeeResponseSchema,
        EmployeeListResponseSchema,
        EmptyResponseSchema,
    )),
    tags(
        (name = "employees", description = "Employee record operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
