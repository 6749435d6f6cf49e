//! Builder wiring the Diesel repositories into HTTP state.

use std::sync::Arc;

use mockable::DefaultClock;

use dealership::inbound::http::state::{HttpState, HttpStateRepositories};
use dealership::outbound::persistence::{
    DbPool, DieselCarRepository, DieselCustomerCarRepository, DieselCustomerRepository,
    DieselSupplierRepository,
};

/// Build HTTP state backed by PostgreSQL through `pool`.
pub(super) fn build_http_state(pool: &DbPool) -> HttpState {
    let links = Arc::new(DieselCustomerCarRepository::new(pool.clone()));
    HttpState::from_repositories(
        HttpStateRepositories {
            customers: Arc::new(DieselCustomerRepository::new(pool.clone())),
            suppliers: Arc::new(DieselSupplierRepository::new(pool.clone())),
            cars: Arc::new(DieselCarRepository::new(pool.clone())),
            customer_cars: links.clone(),
            ownership: links,
        },
        Arc::new(DefaultClock),
    )
}
