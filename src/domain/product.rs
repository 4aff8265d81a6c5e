use serde::{Deserialize, Serialize};

use crate::domain::types::Amount;

/// A product as returned by the inventory API.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Amount,
    pub stock_qty: i64,
    pub active: bool,
}

/// Row of the low-stock report, which omits price and description.
#[derive(Debug, Clone, Deserialize)]
pub struct LowStockProduct {
    pub id: i64,
    pub name: String,
    pub stock_qty: i64,
}

/// Body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_qty: i64,
}

/// Partial update body of `PUT /products/{id}`.
///
/// Unset fields are omitted from the JSON so the server keeps their current
/// values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_qty: Option<i64>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock_qty.is_none()
    }
}

/// Body of `PATCH /products/{id}/active`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActiveUpdate {
    pub active: bool,
}

/// Query filters of `GET /products`. Values are forwarded as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl ProductFilter {
    /// Query pairs for the supplied filters only, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", &self.search),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
        .collect()
    }
}

/// Query filter of `GET /products/low_stock`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LowStockFilter {
    pub threshold: Option<String>,
}

impl LowStockFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        self.threshold
            .as_deref()
            .map(|threshold| vec![("threshold", threshold)])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_omits_unset_fields() {
        let update = ProductUpdate {
            price: Some(9.5),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "price": 9.5 }));
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(ProductUpdate::default().is_empty());
        let update = ProductUpdate {
            stock_qty: Some(0),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn product_without_description_decodes() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "name": "Oolong", "description": null, "price": "4.00", "stock_qty": 3, "active": true}"#,
        )
        .unwrap();
        assert_eq!(product.description, None);
        assert_eq!(product.price.as_str(), "4.00");
    }
}
