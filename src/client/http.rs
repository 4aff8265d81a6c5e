use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::client::{ApiError, ApiResult, InventoryApi, build_reqwest_client};
use crate::domain::credit_card::{CreditCard, NewCreditCard};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::product::{
    ActiveUpdate, LowStockFilter, LowStockProduct, NewProduct, Product, ProductFilter,
    ProductUpdate,
};
use crate::domain::purchase::{CustomerPurchase, NewPurchase, Purchase};
use crate::domain::{CreatedId, Health};
use crate::models::config::ClientConfig;

/// Body shape of every non-2xx response.
#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

/// Extracts the message to show for a failed response.
///
/// A string `detail` is used as is. Structured details (validation error
/// lists) are shown as compact JSON. Without a usable body the HTTP reason
/// phrase is used.
pub(crate) fn remote_detail(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(Value::String(detail)),
        }) => detail,
        Ok(ErrorBody {
            detail: Some(detail),
        }) => detail.to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    }
}

/// [`InventoryApi`] over HTTP with `reqwest`.
pub struct HttpInventoryApi {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpInventoryApi {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.api_base)?;
        Self::with_client(base_url, build_reqwest_client(config)?)
    }

    pub fn with_client(base_url: Url, client: reqwest::Client) -> ApiResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Build(format!(
                "{base_url} cannot be used as an API base"
            )));
        }
        Ok(Self { base_url, client })
    }

    /// Appends `segments` to the base path and the given pairs to the query.
    ///
    /// No `?` is emitted when there are no pairs.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        log::debug!("{method} {url}");
        self.client.request(method, url)
    }

    fn request_json<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> ApiResult<RequestBuilder> {
        let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        Ok(self
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .body(body))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Failed to reach inventory API: {e}");
                return Err(e.into());
            }
        };
        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = remote_detail(status, &body);
            log::warn!("{url} answered {status}: {detail}");
            return Err(ApiError::Remote { status, detail });
        }

        serde_json::from_slice(&body).map_err(|e| {
            log::error!("Failed to decode response of {url}: {e}");
            ApiError::Decode(e)
        })
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn health(&self) -> ApiResult<Health> {
        let url = self.endpoint(&[], &[]);
        self.send(self.request(Method::GET, url)).await
    }

    async fn list_products(&self, filter: &ProductFilter) -> ApiResult<Vec<Product>> {
        let url = self.endpoint(&["products"], &filter.query_pairs());
        self.send(self.request(Method::GET, url)).await
    }

    async fn create_product(&self, product: &NewProduct) -> ApiResult<Product> {
        let url = self.endpoint(&["products"], &[]);
        self.send(self.request_json(Method::POST, url, product)?)
            .await
    }

    async fn update_product(&self, id: i64, update: &ProductUpdate) -> ApiResult<Product> {
        let id = id.to_string();
        let url = self.endpoint(&["products", &id], &[]);
        self.send(self.request_json(Method::PUT, url, update)?)
            .await
    }

    async fn set_product_active(&self, id: i64, active: bool) -> ApiResult<Product> {
        let id = id.to_string();
        let url = self.endpoint(&["products", &id, "active"], &[]);
        self.send(self.request_json(Method::PATCH, url, &ActiveUpdate { active })?)
            .await
    }

    async fn list_low_stock(&self, filter: &LowStockFilter) -> ApiResult<Vec<LowStockProduct>> {
        let url = self.endpoint(&["products", "low_stock"], &filter.query_pairs());
        self.send(self.request(Method::GET, url)).await
    }

    async fn create_customer(&self, customer: &NewCustomer) -> ApiResult<Customer> {
        let url = self.endpoint(&["customers"], &[]);
        self.send(self.request_json(Method::POST, url, customer)?)
            .await
    }

    async fn list_customer_purchases(
        &self,
        customer_id: i64,
    ) -> ApiResult<Vec<CustomerPurchase>> {
        let customer_id = customer_id.to_string();
        let url = self.endpoint(&["customers", &customer_id, "purchases"], &[]);
        self.send(self.request(Method::GET, url)).await
    }

    async fn list_credit_cards(&self, customer_id: i64) -> ApiResult<Vec<CreditCard>> {
        let customer_id = customer_id.to_string();
        let url = self.endpoint(&["customers", &customer_id, "credit_cards"], &[]);
        self.send(self.request(Method::GET, url)).await
    }

    async fn create_credit_card(&self, card: &NewCreditCard) -> ApiResult<CreatedId> {
        let url = self.endpoint(&["credit_cards"], &[]);
        self.send(self.request_json(Method::POST, url, card)?).await
    }

    async fn create_purchase(&self, purchase: &NewPurchase) -> ApiResult<Purchase> {
        let url = self.endpoint(&["purchases"], &[]);
        self.send(self.request_json(Method::POST, url, purchase)?)
            .await
    }

    async fn get_purchase(&self, id: i64) -> ApiResult<Purchase> {
        let id = id.to_string();
        let url = self.endpoint(&["purchases", &id], &[]);
        self.send(self.request(Method::GET, url)).await
    }
}
