//! Supplier entity.

use super::resource::ResourceFields;
use super::validation::{FieldError, require_email, require_text};

/// A supplier that provides cars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: String,
}

impl ResourceFields for Supplier {
    const NAME: &'static str = "Supplier";

    fn validate(&self) -> Result<(), FieldError> {
        require_text("name", &self.name)?;
        require_text("address", &self.address)?;
        require_email("email", &self.email)
    }
}
