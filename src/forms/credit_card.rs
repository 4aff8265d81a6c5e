use serde::Deserialize;

use crate::domain::credit_card::NewCreditCard;
use crate::forms::{FormError, parse_int};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewCreditCardForm {
    pub customer_id: String,
    pub brand: String,
    pub last4: String,
    pub exp_month: String,
    pub exp_year: String,
    pub token: String,
}

impl NewCreditCardForm {
    /// Brand, digits and expiry ranges are validated by the server.
    pub fn validate(&self) -> Result<NewCreditCard, FormError> {
        let customer_id = parse_int("customer_id", &self.customer_id);
        let exp_month = parse_int("exp_month", &self.exp_month);
        let exp_year = parse_int("exp_year", &self.exp_year);
        match (customer_id, exp_month, exp_year) {
            (Ok(customer_id), Ok(exp_month), Ok(exp_year)) => Ok(NewCreditCard {
                customer_id,
                brand: self.brand.clone(),
                last4: self.last4.clone(),
                exp_month,
                exp_year,
                token: self.token.clone(),
            }),
            (customer_id, exp_month, exp_year) => Err(FormError::fields([
                customer_id.err(),
                exp_month.err(),
                exp_year.err(),
            ])),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreditCardsForm {
    pub customer_id: String,
}

impl CreditCardsForm {
    pub fn validate(&self) -> Result<i64, FormError> {
        parse_int("customer_id", &self.customer_id).map_err(|e| FormError::InvalidFields(vec![e]))
    }
}
