//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module builds the full application over in-memory repositories so HTTP
//! behaviour can be exercised without PostgreSQL.

use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use mockable::DefaultClock;
use serde_json::Value;

use dealership::domain::{Car, Customer, CustomerCar, REQUEST_ID_HEADER, Supplier};
use dealership::inbound::http::configure;
use dealership::inbound::http::health::{HealthState, live, ready};
use dealership::inbound::http::state::{HttpState, HttpStateRepositories};
use dealership::middleware::{ErrorHandler, RequestIdMiddleware};
use dealership::outbound::memory::InMemoryRepository;

/// Repositories backed by process memory.
pub fn in_memory_repositories() -> HttpStateRepositories {
    let links = Arc::new(InMemoryRepository::<CustomerCar>::new());
    HttpStateRepositories {
        customers: Arc::new(InMemoryRepository::<Customer>::new()),
        suppliers: Arc::new(InMemoryRepository::<Supplier>::new()),
        cars: Arc::new(InMemoryRepository::<Car>::new()),
        customer_cars: links.clone(),
        ownership: links,
    }
}

/// HTTP state over [`in_memory_repositories`].
pub fn in_memory_state() -> HttpState {
    HttpState::from_repositories(in_memory_repositories(), Arc::new(DefaultClock))
}

/// The production middleware stack and routes around `state`.
pub fn build_app(
    state: HttpState,
    error_handler: ErrorHandler,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    App::new()
        .app_data(health)
        .app_data(web::Data::new(state))
        .service(ready)
        .service(live)
        .configure(configure)
        .wrap(error_handler)
        .wrap(RequestIdMiddleware)
}

/// Status, request id header and JSON body of one exchange.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub body: Value,
}

/// Send `req` to `app` and decode the JSON body (`Null` when empty).
pub async fn send<S, B>(app: &S, req: test::TestRequest) -> Reply
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let request_id = res
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    Reply {
        status,
        request_id,
        body,
    }
}
