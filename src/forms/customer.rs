use serde::Deserialize;

use crate::domain::customer::NewCustomer;
use crate::forms::{FormError, parse_int};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewCustomerForm {
    pub name: String,
    pub email: String,
}

impl NewCustomerForm {
    /// E-mail format is the server's concern.
    pub fn payload(&self) -> NewCustomer {
        NewCustomer {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomerPurchasesForm {
    pub customer_id: String,
}

impl CustomerPurchasesForm {
    pub fn validate(&self) -> Result<i64, FormError> {
        parse_int("customer_id", &self.customer_id).map_err(|e| FormError::InvalidFields(vec![e]))
    }
}
