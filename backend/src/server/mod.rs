//! Server construction, middleware wiring and shutdown.

mod config;

pub use config::ServerSettings;

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::employees;
use crate::inbound::http::error::{json_config, path_config};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryEmployeeRepository;

/// Assemble the application: extractor configs, trace middleware, the
/// employee API under `/api/v1`, probes and, in debug builds, Swagger UI.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1").configure(employees::configure);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Serve `http_state` on an already bound listener.
///
/// Readiness flips once the server is constructed. Signal handling is left
/// to [`run_until_shutdown`] so liveness can drop before connections drain.
///
/// # Errors
/// Propagates [`std::io::Error`] when the listener cannot be used.
pub fn serve(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    listener: TcpListener,
) -> std::io::Result<Server> {
    let local_addr = listener.local_addr()?;
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .disable_signals()
        .listen(listener)?
        .run();

    info!(%local_addr, "roster listening");
    health_state.mark_ready();
    Ok(server)
}

/// Construct the HTTP server over a fresh in-memory repository.
///
/// # Errors
/// Propagates [`std::io::Error`] when the settings are invalid or binding
/// fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let listener = TcpListener::bind(settings.bind_addr()?)?;
    let http_state = web::Data::new(HttpState::from_repository(Arc::new(
        InMemoryEmployeeRepository::new(),
    )));
    serve(health_state, http_state, listener)
}

/// Report not live, then stop accepting and let in-flight requests finish.
pub async fn drain(health_state: &HealthState, handle: &ServerHandle) {
    info!("shutdown requested; draining");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

/// Drive `server` until it stops, draining on SIGINT or SIGTERM.
///
/// # Errors
/// Propagates [`std::io::Error`] from the server.
pub async fn run_until_shutdown(
    server: Server,
    health_state: web::Data<HealthState>,
) -> std::io::Result<()> {
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if shutdown_signal().await {
            drain(&health_state, &handle).await;
        }
    });
    server.await
}

async fn shutdown_signal() -> bool {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(error) => {
                warn!(%error, "SIGTERM handler unavailable");
                return interrupted().await;
            }
        };
        tokio::select! {
            received = interrupted() => received,
            _ = terminate.recv() => true,
        }
    }
    #[cfg(not(unix))]
    {
        interrupted().await
    }
}

async fn interrupted() -> bool {
    match tokio::signal::ctrl_c().await {
        Ok(()) => true,
        Err(error) => {
            warn!(%error, "SIGINT handler unavailable");
            false
        }
    }
}
