use serde::Deserialize;

use serde_json::Value;

use crate::domain::purchase::NewPurchase;
use crate::forms::{FormError, parse_int};

/// Purchase creation: a customer id plus line items typed as JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PurchaseForm {
    pub customer_id: String,
    pub items_json: String,
}

impl PurchaseForm {
    /// Only JSON syntax is checked here. Items are checked first, so
    /// malformed JSON is reported even when the customer id is also wrong.
    pub fn validate(&self) -> Result<NewPurchase, FormError> {
        let items: Value =
            serde_json::from_str(&self.items_json).map_err(|_| FormError::InvalidJson)?;
        let customer_id = parse_int("customer_id", &self.customer_id)
            .map_err(|e| FormError::InvalidFields(vec![e]))?;
        Ok(NewPurchase { customer_id, items })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PurchaseDetailForm {
    pub id: String,
}

impl PurchaseDetailForm {
    pub fn validate(&self) -> Result<i64, FormError> {
        parse_int("id", &self.id).map_err(|e| FormError::InvalidFields(vec![e]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_items_are_invalid_json() {
        let form = PurchaseForm {
            customer_id: "1".into(),
            items_json: "[{product_id: 1}".into(),
        };
        assert_eq!(form.validate(), Err(FormError::InvalidJson));
        assert_eq!(FormError::InvalidJson.to_string(), "Invalid JSON");
    }

    #[test]
    fn invalid_json_wins_over_bad_customer_id() {
        let form = PurchaseForm {
            customer_id: "abc".into(),
            items_json: "nope".into(),
        };
        assert_eq!(form.validate(), Err(FormError::InvalidJson));
    }

    #[test]
    fn well_formed_json_of_any_shape_is_forwarded() {
        for items_json in [
            r#"[{"product_id": "1", "qty": "2"}]"#,
            r#"[{"product_id": 1}]"#,
            r#"{"product_id": 1, "qty": 1}"#,
        ] {
            let form = PurchaseForm {
                customer_id: "1".into(),
                items_json: items_json.into(),
            };
            let purchase = form.validate().unwrap();
            assert_eq!(
                purchase.items,
                serde_json::from_str::<Value>(items_json).unwrap()
            );
        }
    }

    #[test]
    fn extra_item_keys_are_forwarded() {
        let form = PurchaseForm {
            customer_id: "4".into(),
            items_json: r#"[{"product_id": 2, "qty": 3, "note": "gift"}]"#.into(),
        };
        let purchase = form.validate().unwrap();
        assert_eq!(purchase.customer_id, 4);
        let body = serde_json::to_value(&purchase).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "customer_id": 4,
                "items": [{ "product_id": 2, "qty": 3, "note": "gift" }]
            })
        );
    }
}
