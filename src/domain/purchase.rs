use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{Amount, Timestamp};

/// A purchase header, optionally with its line items.
///
/// `POST /purchases` answers without items while `GET /purchases/{id}`
/// includes them.
#[derive(Debug, Clone, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub customer_id: i64,
    pub purchased_at: Timestamp,
    pub total_amount: Amount,
    pub status: String,
    #[serde(default)]
    pub items: Vec<PurchaseItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseItem {
    #[serde(default)]
    pub product_id: Option<i64>,
    pub product_name: String,
    pub qty: i64,
    pub unit_price: Amount,
}

/// Entry of a customer's purchase history.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerPurchase {
    pub id: i64,
    pub purchased_at: Timestamp,
    pub total_amount: Amount,
    pub status: String,
}

/// Body of `POST /purchases`.
///
/// `items` is whatever JSON the user typed; its shape is checked by the
/// server, which reports problems through `detail`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPurchase {
    pub customer_id: i64,
    pub items: Value,
}
