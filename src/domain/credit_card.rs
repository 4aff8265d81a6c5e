use serde::{Deserialize, Serialize};

use crate::domain::types::Timestamp;

/// A stored card. The API never returns the payment token.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditCard {
    pub id: i64,
    pub customer_id: i64,
    pub brand: String,
    pub last4: String,
    pub exp_month: i64,
    pub exp_year: i64,
    pub created_at: Timestamp,
}

/// Body of `POST /credit_cards`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCreditCard {
    pub customer_id: i64,
    pub brand: String,
    pub last4: String,
    pub exp_month: i64,
    pub exp_year: i64,
    pub token: String,
}
