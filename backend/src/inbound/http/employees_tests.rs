//! Tests for the employee HTTP handlers.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::Trace;
use crate::domain::TRACE_ID_HEADER;
use crate::inbound::http::error::{json_config, path_config};
use crate::outbound::memory::InMemoryEmployeeRepository;

fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::from_repository(Arc::new(InMemoryEmployeeRepository::new()));
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure))
}

fn create_request(body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/api/v1/employees")
        .set_json(body)
}

#[rstest]
#[actix_web::test]
async fn create_returns_the_employee_with_default_department() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        create_request(json!({"employeeId": "E1", "name": "Ann"})).to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "ok": true,
            "data": {"id": 1, "employeeId": "E1", "name": "Ann", "department": "general"}
        })
    );
}

#[rstest]
#[actix_web::test]
async fn duplicate_create_is_a_failure_envelope_not_an_http_error() {
    let app = actix_test::init_service(test_app()).await;
    let payload = json!({"employeeId": "E1", "name": "Ann"});
    actix_test::call_service(&app, create_request(payload.clone()).to_request()).await;

    let response = actix_test::call_service(&app, create_request(payload).to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "ok": false,
            "error": {"code": "DUPLICATE_EMPLOYEE_ID", "message": "Employee ID already exists"}
        })
    );
}

#[rstest]
#[actix_web::test]
async fn missing_name_is_invalid_input() {
    let app = actix_test::init_service(test_app()).await;

    let response =
        actix_test::call_service(&app, create_request(json!({"employeeId": "E1"})).to_request()).await;

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["error"]["code"], json!("INVALID_INPUT"));
    assert_eq!(body["error"]["message"], json!("Employee name required"));
}

#[rstest]
#[actix_web::test]
async fn created_employee_can_be_fetched_listed_and_deleted() {
    let app = actix_test::init_service(test_app()).await;
    let created = actix_test::call_service(
        &app,
        create_request(json!({"employeeId": "E1", "name": "Ann", "department": "HR"})).to_request(),
    )
    .await;
    let created: Value = actix_test::read_body_json(created).await;
    let employee = created["data"].clone();

    let fetched = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/employees/1")
            .to_request(),
    )
    .await;
    let fetched: Value = actix_test::read_body_json(fetched).await;
    assert_eq!(fetched, json!({"ok": true, "data": employee.clone()}));

    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/employees")
            .to_request(),
    )
    .await;
    let listed: Value = actix_test::read_body_json(listed).await;
    assert_eq!(listed, json!({"ok": true, "data": [employee]}));

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/v1/employees/1")
            .to_request(),
    )
    .await;
    let deleted: Value = actix_test::read_body_json(deleted).await;
    assert_eq!(deleted, json!({"ok": true, "data": null}));
}

#[rstest]
#[case::get(actix_test::TestRequest::get())]
#[case::delete(actix_test::TestRequest::delete())]
#[actix_web::test]
async fn unknown_ids_are_not_found(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app()).await;

    let response =
        actix_test::call_service(&app, request.uri("/api/v1/employees/999").to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({"ok": false, "error": {"code": "NOT_FOUND", "message": "Employee not found"}})
    );
}

#[rstest]
#[actix_web::test]
async fn non_numeric_ids_are_rejected_with_a_structured_error() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/employees/abc")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], json!("INVALID_INPUT"));
    assert_eq!(body["status"], json!(400));
    assert_eq!(body["traceId"].as_str().map(str::to_owned), trace_id);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_rejected_with_a_structured_error() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/employees")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], json!("INVALID_INPUT"));
}
