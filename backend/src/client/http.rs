//! Reqwest client for the employee endpoints.
//!
//! Two flavours per operation: `*_action` methods hand back the
//! [`ActionResponse`] exactly as the boundary would, with transport failures
//! folded into its failure variant; the plain methods return
//! `Result<T, Error>` through [`invoke`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::invoke;
use crate::domain::ports::define_port_error;
use crate::domain::{ActionResponse, CreateEmployeeRequest, Employee, Error, Fault, respond};

const API_PREFIX: &str = "/api/v1/employees";

define_port_error! {
    /// Failures between the client and the server that carry no structured
    /// error of their own.
    pub enum EmployeeClientError {
        /// The server answered with a status and a body the client cannot read.
        UnexpectedStatus { status: u16, body: String } =>
            "unexpected status {status}: {body}",
    }
}

/// HTTP client for a roster server.
///
/// # Examples
/// ```no_run
/// use std::time::Duration;
///
/// use roster::client::EmployeeClient;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let client = EmployeeClient::new("http://127.0.0.1:8080", Duration::from_secs(5))?;
/// let employees = client.get_employees().await?;
/// println!("{} employees", employees.len());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    client: Client,
    base_url: String,
}

impl EmployeeClient {
    /// Build a client for the server at `base_url`.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}{API_PREFIX}", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}{API_PREFIX}/{id}", self.base_url)
    }

    /// `POST /api/v1/employees` as an action response.
    pub async fn create_employee_action(
        &self,
        request: &CreateEmployeeRequest,
    ) -> ActionResponse<Employee> {
        respond(send(self.client.post(self.collection_url()).json(request))).await
    }

    /// `GET /api/v1/employees` as an action response.
    pub async fn get_employees_action(&self) -> ActionResponse<Vec<Employee>> {
        respond(send(self.client.get(self.collection_url()))).await
    }

    /// `GET /api/v1/employees/{id}` as an action response.
    pub async fn get_employee_by_id_action(&self, id: u64) -> ActionResponse<Employee> {
        respond(send(self.client.get(self.item_url(id)))).await
    }

    /// `DELETE /api/v1/employees/{id}` as an action response.
    pub async fn delete_employee_action(&self, id: u64) -> ActionResponse<()> {
        respond(send(self.client.delete(self.item_url(id)))).await
    }

    /// Create an employee.
    ///
    /// # Errors
    /// Returns the structured error reported by the server, or a normalised
    /// transport failure.
    pub async fn create_employee(&self, request: &CreateEmployeeRequest) -> Result<Employee, Error> {
        invoke(send(self.client.post(self.collection_url()).json(request))).await
    }

    /// List all employees.
    ///
    /// # Errors
    /// See [`Self::create_employee`].
    pub async fn get_employees(&self) -> Result<Vec<Employee>, Error> {
        invoke(send(self.client.get(self.collection_url()))).await
    }

    /// Fetch one employee.
    ///
    /// # Errors
    /// See [`Self::create_employee`].
    pub async fn get_employee_by_id(&self, id: u64) -> Result<Employee, Error> {
        invoke(send(self.client.get(self.item_url(id)))).await
    }

    /// Delete one employee.
    ///
    /// # Errors
    /// See [`Self::create_employee`].
    pub async fn delete_employee(&self, id: u64) -> Result<(), Error> {
        invoke(send(self.client.delete(self.item_url(id)))).await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, Fault> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;
    decode(status, &body)
}

/// Read a server answer: an action envelope on success, a structured error
/// body for requests rejected before the boundary.
fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, Fault> {
    if status.is_success() {
        let envelope: ActionResponse<T> = serde_json::from_slice(body)?;
        return envelope.into_result().map_err(Fault::Structured);
    }
    match serde_json::from_slice::<Error>(body) {
        Ok(error) => Err(Fault::Structured(error)),
        Err(_) => Err(EmployeeClientError::unexpected_status(
            status.as_u16(),
            String::from_utf8_lossy(body),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, normalize};
    use rstest::rstest;
    use serde_json::json;

    fn bytes(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).expect("fixture serialises")
    }

    #[rstest]
    fn success_envelopes_yield_their_data() {
        let body = bytes(json!({
            "ok": true,
            "data": {"id": 4, "employeeId": "E4", "name": "Dee", "department": "general"}
        }));
        let employee: Employee = decode(StatusCode::OK, &body).expect("decodes");
        assert_eq!(employee.id, 4);
    }

    #[rstest]
    fn failure_envelopes_yield_structured_errors() {
        let body = bytes(json!({
            "ok": false,
            "error": {"code": "NOT_FOUND", "message": "Employee not found"}
        }));
        let error = normalize(decode::<Employee>(StatusCode::OK, &body).expect_err("failure"));
        assert_eq!(error.code(), &ErrorCode::NOT_FOUND);
        assert_eq!(error.status(), 404);
    }

    #[rstest]
    fn rejected_requests_keep_the_server_error() {
        let body = bytes(json!({
            "code": "INVALID_INPUT",
            "message": "Invalid path parameter",
            "status": 400
        }));
        let error =
            normalize(decode::<Employee>(StatusCode::BAD_REQUEST, &body).expect_err("rejected"));
        assert_eq!(error.code(), &ErrorCode::INVALID_INPUT);
    }

    #[rstest]
    fn unreadable_error_bodies_become_internal_errors() {
        let fault = decode::<Employee>(StatusCode::BAD_GATEWAY, b"upstream down").expect_err("fails");
        let error = normalize(fault);
        assert_eq!(error.code(), &ErrorCode::INTERNAL_ERROR);
        assert_eq!(error.message(), "unexpected status 502: upstream down");
    }

    #[rstest]
    fn garbage_success_bodies_become_internal_errors() {
        let error = normalize(decode::<Employee>(StatusCode::OK, b"<html>").expect_err("fails"));
        assert_eq!(error.code(), &ErrorCode::INTERNAL_ERROR);
    }

    #[rstest]
    #[case("http://localhost:8080", "http://localhost:8080/api/v1/employees/3")]
    #[case("http://localhost:8080/", "http://localhost:8080/api/v1/employees/3")]
    fn urls_are_joined_without_double_slashes(#[case] base: &str, #[case] expected: &str) {
        let client = EmployeeClient::with_client(Client::new(), base);
        assert_eq!(client.item_url(3), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_servers_fold_into_failure_responses() {
        let client = EmployeeClient::new("http://127.0.0.1:9", Duration::from_millis(500))
            .expect("client builds");

        let response = client.get_employees_action().await;

        assert_eq!(
            response.error().map(|error| error.code.clone()),
            Some(ErrorCode::INTERNAL_ERROR)
        );
    }
}
