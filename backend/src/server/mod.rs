//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::body::{BoxBody, EitherBody};
use actix_web::http::KeepAlive;
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use dealership::doc::ApiDoc;
use dealership::inbound::http::configure;
use dealership::inbound::http::health::{HealthState, live, ready};
use dealership::inbound::http::state::HttpState;
use dealership::middleware::{ErrorHandler, RequestIdMiddleware};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(ready)
        .service(live)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.wrap(ErrorHandler::new()).wrap(RequestIdMiddleware)
}

/// Construct an Actix HTTP server for the given health state and configuration.
///
/// Signal handling is left to the caller, which flips liveness before
/// stopping the server through its handle.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config.db_pool));
    let ServerConfig {
        bind_addr,
        db_pool: _,
        read_timeout,
        write_timeout,
        idle_timeout,
        shutdown_timeout,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .client_request_timeout(read_timeout)
    .client_disconnect_timeout(write_timeout)
    .keep_alive(KeepAlive::Timeout(idle_timeout))
    .shutdown_timeout(shutdown_timeout.as_secs())
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
