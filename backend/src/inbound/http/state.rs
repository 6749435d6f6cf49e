//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (usecases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    OwnershipQuery, OwnershipRepository, ResourceRepository, ResourceUseCase,
};
use crate::domain::{Car, Customer, CustomerCar, OwnershipService, ResourceService, Supplier};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub customers: Arc<dyn ResourceUseCase<Customer>>,
    pub suppliers: Arc<dyn ResourceUseCase<Supplier>>,
    pub cars: Arc<dyn ResourceUseCase<Car>>,
    pub customer_cars: Arc<dyn ResourceUseCase<CustomerCar>>,
    pub ownership: Arc<dyn OwnershipQuery>,
}

/// Parameter object bundling the repository adapters behind [`HttpState`].
#[derive(Clone)]
pub struct HttpStateRepositories {
    pub customers: Arc<dyn ResourceRepository<Customer>>,
    pub suppliers: Arc<dyn ResourceRepository<Supplier>>,
    pub cars: Arc<dyn ResourceRepository<Car>>,
    pub customer_cars: Arc<dyn ResourceRepository<CustomerCar>>,
    /// Usually the same adapter as `customer_cars`.
    pub ownership: Arc<dyn OwnershipRepository>,
}

impl HttpState {
    /// Wrap each repository in its usecase, sharing one clock.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use dealership::domain::{Car, Customer, CustomerCar, Supplier};
    /// use dealership::inbound::http::state::{HttpState, HttpStateRepositories};
    /// use dealership::outbound::memory::InMemoryRepository;
    /// use mockable::DefaultClock;
    ///
    /// let links = Arc::new(InMemoryRepository::<CustomerCar>::new());
    /// let state = HttpState::from_repositories(
    ///     HttpStateRepositories {
    ///         customers: Arc::new(InMemoryRepository::<Customer>::new()),
    ///         suppliers: Arc::new(InMemoryRepository::<Supplier>::new()),
    ///         cars: Arc::new(InMemoryRepository::<Car>::new()),
    ///         customer_cars: links.clone(),
    ///         ownership: links,
    ///     },
    ///     Arc::new(DefaultClock),
    /// );
    /// let _cars = state.cars.clone();
    /// ```
    pub fn from_repositories(repositories: HttpStateRepositories, clock: Arc<dyn Clock>) -> Self {
        let HttpStateRepositories {
            customers,
            suppliers,
            cars,
            customer_cars,
            ownership,
        } = repositories;
        Self {
            customers: Arc::new(ResourceService::new(customers, Arc::clone(&clock))),
            suppliers: Arc::new(ResourceService::new(suppliers, Arc::clone(&clock))),
            cars: Arc::new(ResourceService::new(cars, Arc::clone(&clock))),
            customer_cars: Arc::new(ResourceService::new(customer_cars, clock)),
            ownership: Arc::new(OwnershipService::new(ownership)),
        }
    }
}
