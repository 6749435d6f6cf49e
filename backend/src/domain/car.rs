//! Car entity.

use super::resource::ResourceFields;
use super::validation::{FieldError, require_positive, require_text};

/// A car offered by a supplier.
///
/// `price` is expressed in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub name: String,
    pub supplier_id: String,
    pub price: i64,
}

impl ResourceFields for Car {
    const NAME: &'static str = "Car";

    fn validate(&self) -> Result<(), FieldError> {
        require_text("name", &self.name)?;
        require_text("supplier_id", &self.supplier_id)?;
        require_positive("price", self.price)
    }
}
