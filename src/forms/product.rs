use serde::Deserialize;

use crate::domain::product::{LowStockFilter, NewProduct, ProductFilter, ProductUpdate};
use crate::forms::{
    FormError, non_empty, parse_decimal, parse_int, parse_optional_decimal, parse_optional_int,
    query_value,
};

/// Product search filters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductSearchForm {
    pub search: String,
    pub min_price: String,
    pub max_price: String,
}

impl ProductSearchForm {
    /// Non-empty fields become filters; prices are left for the server to
    /// validate.
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            search: query_value(&self.search),
            min_price: query_value(&self.min_price),
            max_price: query_value(&self.max_price),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_qty: String,
}

impl NewProductForm {
    pub fn validate(&self) -> Result<NewProduct, FormError> {
        let price = parse_decimal("price", &self.price);
        let stock_qty = parse_int("stock_qty", &self.stock_qty);
        match (price, stock_qty) {
            (Ok(price), Ok(stock_qty)) => Ok(NewProduct {
                name: self.name.clone(),
                description: self.description.clone(),
                price,
                stock_qty,
            }),
            (price, stock_qty) => Err(FormError::fields([price.err(), stock_qty.err()])),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LowStockForm {
    pub threshold: String,
}

impl LowStockForm {
    pub fn filter(&self) -> LowStockFilter {
        LowStockFilter {
            threshold: query_value(&self.threshold),
        }
    }
}

/// Partial product update. Blank fields are left out of the payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductUpdateForm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_qty: String,
}

impl ProductUpdateForm {
    /// Returns the product id and the fields the user actually supplied.
    ///
    /// Unparseable numbers are reported rather than dropped, and take
    /// precedence over the "nothing supplied" check.
    pub fn validate(&self) -> Result<(i64, ProductUpdate), FormError> {
        let id = parse_int("id", &self.id);
        let price = parse_optional_decimal("price", &self.price);
        let stock_qty = parse_optional_int("stock_qty", &self.stock_qty);

        let (id, price, stock_qty) = match (id, price, stock_qty) {
            (Ok(id), Ok(price), Ok(stock_qty)) => (id, price, stock_qty),
            (id, price, stock_qty) => {
                return Err(FormError::fields([id.err(), price.err(), stock_qty.err()]));
            }
        };

        let update = ProductUpdate {
            name: non_empty(&self.name).map(str::to_string),
            description: non_empty(&self.description).map(str::to_string),
            price,
            stock_qty,
        };
        if update.is_empty() {
            return Err(FormError::NoUpdateFields);
        }
        Ok((id, update))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToggleActiveForm {
    pub id: String,
    pub active: bool,
}

impl ToggleActiveForm {
    pub fn validate(&self) -> Result<(i64, bool), FormError> {
        parse_int("id", &self.id)
            .map(|id| (id, self.active))
            .map_err(|e| FormError::InvalidFields(vec![e]))
    }
}
