//! Shared fixtures for roster integration tests.

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::{ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use roster::inbound::http::health::HealthState;
use roster::inbound::http::state::HttpState;
use roster::outbound::memory::InMemoryEmployeeRepository;
use roster::server::{build_app, serve};

/// The application exactly as the server binary wires it, already ready.
pub fn roster_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    build_app(health, state)
}

/// Fresh state over an empty in-memory repository.
pub fn empty_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::from_repository(Arc::new(
        InMemoryEmployeeRepository::new(),
    )))
}

/// A server listening on an ephemeral local port.
#[allow(dead_code, reason = "only the client round-trip suite starts a server")]
pub struct RunningServer {
    pub base_url: String,
    pub handle: ServerHandle,
}

/// Bind to `127.0.0.1:0` and drive the server on the current runtime.
#[allow(dead_code, reason = "only the client round-trip suite starts a server")]
pub fn spawn_server() -> std::io::Result<RunningServer> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let server = serve(web::Data::new(HealthState::new()), empty_state(), listener)?;
    let handle = server.handle();
    actix_web::rt::spawn(server);
    Ok(RunningServer {
        base_url: format!("http://{addr}"),
        handle,
    })
}
