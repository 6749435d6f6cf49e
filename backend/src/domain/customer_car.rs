//! Ownership relationship between a customer and a car.

use super::resource::ResourceFields;
use super::validation::{FieldError, require_text};

/// Links a customer to a car they own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerCar {
    pub car_id: String,
    pub customer_id: String,
}

impl ResourceFields for CustomerCar {
    const NAME: &'static str = "Customer car relationship";

    fn validate(&self) -> Result<(), FieldError> {
        require_text("car_id", &self.car_id)?;
        require_text("customer_id", &self.customer_id)
    }
}
