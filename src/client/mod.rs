use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::credit_card::{CreditCard, NewCreditCard};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::product::{
    LowStockFilter, LowStockProduct, NewProduct, Product, ProductFilter, ProductUpdate,
};
use crate::domain::purchase::{CustomerPurchase, NewPurchase, Purchase};
use crate::domain::{CreatedId, Health};
use crate::models::config::ClientConfig;

pub mod http;

pub use http::HttpInventoryApi;

/// Failure of a single API round trip.
///
/// `Remote` displays the server-supplied detail verbatim, so that
/// `format!("Error: {err}")` reproduces the message the API intended.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{detail}")]
    Remote { status: StatusCode, detail: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to encode request body: {0}")]
    Encode(serde_json::Error),
    #[error("unexpected response: {0}")]
    Decode(serde_json::Error),
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Builds the shared [`reqwest::Client`] honouring the configured timeout.
pub fn build_reqwest_client(config: &ClientConfig) -> ApiResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().map_err(|e| ApiError::Build(e.to_string()))
}

/// Endpoints of the inventory/sales API consumed by the forms.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// `GET /`.
    async fn health(&self) -> ApiResult<Health>;

    /// `GET /products` with only the supplied filters in the query string.
    async fn list_products(&self, filter: &ProductFilter) -> ApiResult<Vec<Product>>;

    async fn create_product(&self, product: &NewProduct) -> ApiResult<Product>;

    /// `PUT /products/{id}` with a partial body.
    async fn update_product(&self, id: i64, update: &ProductUpdate) -> ApiResult<Product>;

    async fn set_product_active(&self, id: i64, active: bool) -> ApiResult<Product>;

    async fn list_low_stock(&self, filter: &LowStockFilter) -> ApiResult<Vec<LowStockProduct>>;

    async fn create_customer(&self, customer: &NewCustomer) -> ApiResult<Customer>;

    async fn list_customer_purchases(&self, customer_id: i64)
    -> ApiResult<Vec<CustomerPurchase>>;

    async fn list_credit_cards(&self, customer_id: i64) -> ApiResult<Vec<CreditCard>>;

    async fn create_credit_card(&self, card: &NewCreditCard) -> ApiResult<CreatedId>;

    async fn create_purchase(&self, purchase: &NewPurchase) -> ApiResult<Purchase>;

    /// `GET /purchases/{id}`, including line items.
    async fn get_purchase(&self, id: i64) -> ApiResult<Purchase>;
}
