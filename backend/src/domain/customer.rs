//! Customer entity.

use super::resource::ResourceFields;
use super::validation::{FieldError, require_email, require_text};

/// A customer buying cars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: String,
}

impl ResourceFields for Customer {
    const NAME: &'static str = "Customer";

    fn validate(&self) -> Result<(), FieldError> {
        require_text("name", &self.name)?;
        require_text("address", &self.address)?;
        require_email("email", &self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn customer(name: &str, address: &str, email: &str) -> Customer {
        Customer {
            name: name.to_owned(),
            address: address.to_owned(),
            phone: None,
            email: email.to_owned(),
        }
    }

    #[rstest]
    fn complete_customer_is_valid() {
        assert_eq!(customer("John", "1 Main St", "john@x.com").validate(), Ok(()));
    }

    #[rstest]
    #[case(customer("", "1 Main St", "john@x.com"), FieldError::Missing { field: "name" })]
    #[case(customer("John", " ", "john@x.com"), FieldError::Missing { field: "address" })]
    #[case(customer("John", "1 Main St", ""), FieldError::Missing { field: "email" })]
    #[case(customer("John", "1 Main St", "john"), FieldError::InvalidEmail { field: "email" })]
    fn reports_first_invalid_field(#[case] value: Customer, #[case] expected: FieldError) {
        assert_eq!(value.validate(), Err(expected));
    }
}
