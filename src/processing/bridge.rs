use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::client::{ApiError, InventoryApi};
use crate::domain::product::ProductFilter;
use crate::forms::{
    CreditCardsForm, CustomerPurchasesForm, FormError, LowStockForm, NewCreditCardForm,
    NewCustomerForm, NewProductForm, ProductSearchForm, ProductUpdateForm, PurchaseDetailForm,
    PurchaseForm, ToggleActiveForm,
};
use crate::models::config::ClientConfig;
use crate::processing::Submission;
use crate::view::{Content, Target, View, render};

/// Claim on a display target taken when a submission starts.
#[derive(Debug, Clone, Copy)]
struct Ticket {
    target: Target,
    serial: u64,
}

/// Binds form submissions to API calls and their results to display targets.
///
/// The bridge may be shared between concurrently running submissions. A
/// completion is only rendered if no later submission for the same target has
/// started in the meantime, so a slow response never overwrites a newer one.
pub struct FormBridge<A, V> {
    api: A,
    view: V,
    timestamp_format: String,
    latest: Mutex<HashMap<Target, u64>>,
    filter: Mutex<ProductFilter>,
}

impl<A, V> FormBridge<A, V>
where
    A: InventoryApi,
    V: View,
{
    pub fn new(api: A, view: V, config: &ClientConfig) -> Self {
        Self {
            api,
            view,
            timestamp_format: config.timestamp_format.clone(),
            latest: Mutex::new(HashMap::new()),
            filter: Mutex::new(ProductFilter::default()),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn latest(&self) -> MutexGuard<'_, HashMap<Target, u64>> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ticket(&self, target: Target) -> Ticket {
        let mut latest = self.latest();
        let serial = latest.entry(target).or_default();
        *serial += 1;
        Ticket {
            target,
            serial: *serial,
        }
    }

    fn render(&self, ticket: Ticket, content: Content) {
        let latest = self.latest();
        if latest.get(&ticket.target) != Some(&ticket.serial) {
            log::debug!("Dropping superseded result for {}", ticket.target);
            return;
        }
        self.view.show(ticket.target, &content);
    }

    fn render_text(&self, ticket: Ticket, text: impl Into<String>) {
        self.render(ticket, Content::Text(text.into()));
    }

    fn render_api_error(&self, ticket: Ticket, error: &ApiError) {
        self.render_text(ticket, render::error_text(error));
    }

    fn render_form_error(&self, ticket: Ticket, error: &FormError) {
        log::info!("Rejected {} submission: {error}", ticket.target);
        self.render_text(ticket, error.to_string());
    }

    fn current_filter(&self) -> ProductFilter {
        self.filter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Dispatches a submission to the matching operation.
    pub async fn submit(&self, submission: Submission) {
        match submission {
            Submission::Load => self.load().await,
            Submission::Health => self.health().await,
            Submission::SearchProducts(form) => self.list_products(&form).await,
            Submission::AddProduct(form) => self.create_product(&form).await,
            Submission::AddCustomer(form) => self.create_customer(&form).await,
            Submission::CreatePurchase(form) => self.create_purchase(&form).await,
            Submission::LowStock(form) => self.list_low_stock(&form).await,
            Submission::UpdateProduct(form) => self.update_product(&form).await,
            Submission::ToggleActive(form) => self.toggle_active(&form).await,
            Submission::PurchaseDetail(form) => self.purchase_detail(&form).await,
            Submission::CustomerPurchases(form) => self.customer_purchases(&form).await,
            Submission::CreditCards(form) => self.credit_cards(&form).await,
            Submission::AddCreditCard(form) => self.create_credit_card(&form).await,
        }
    }

    /// Initial product list, fetched without filters.
    pub async fn load(&self) {
        self.refresh_products().await;
    }

    pub async fn health(&self) {
        let ticket = self.ticket(Target::Status);
        match self.api.health().await {
            Ok(health) => self.render_text(ticket, health.message),
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    /// Searches products; the filters are remembered for later refreshes.
    pub async fn list_products(&self, form: &ProductSearchForm) {
        let filter = form.filter();
        *self.filter.lock().unwrap_or_else(PoisonError::into_inner) = filter.clone();
        self.fetch_products(&filter).await;
    }

    /// Re-runs the last product search.
    pub async fn refresh_products(&self) {
        let filter = self.current_filter();
        self.fetch_products(&filter).await;
    }

    async fn fetch_products(&self, filter: &ProductFilter) {
        let ticket = self.ticket(Target::Products);
        match self.api.list_products(filter).await {
            Ok(products) => self.render(ticket, Content::Html(render::product_list(&products))),
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    pub async fn create_product(&self, form: &NewProductForm) {
        let ticket = self.ticket(Target::AddProductMessage);
        let product = match form.validate() {
            Ok(product) => product,
            Err(e) => return self.render_form_error(ticket, &e),
        };
        match self.api.create_product(&product).await {
            Ok(created) => {
                log::info!("Created product #{}", created.id);
                self.render_text(ticket, "Product added ✔");
                self.refresh_products().await;
            }
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    pub async fn create_customer(&self, form: &NewCustomerForm) {
        let ticket = self.ticket(Target::AddCustomerMessage);
        match self.api.create_customer(&form.payload()).await {
            Ok(customer) => {
                self.render_text(ticket, format!("Customer #{} created ✔", customer.id))
            }
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    /// Items JSON is validated locally; nothing is sent when it is malformed.
    pub async fn create_purchase(&self, form: &PurchaseForm) {
        let ticket = self.ticket(Target::PurchaseMessage);
        let purchase = match form.validate() {
            Ok(purchase) => purchase,
            Err(e) => return self.render_form_error(ticket, &e),
        };
        match self.api.create_purchase(&purchase).await {
            Ok(created) => {
                self.render_text(
                    ticket,
                    format!(
                        "Purchase #{} created: ${}",
                        created.id, created.total_amount
                    ),
                );
                self.refresh_products().await;
            }
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    pub async fn list_low_stock(&self, form: &LowStockForm) {
        let ticket = self.ticket(Target::LowStock);
        match self.api.list_low_stock(&form.filter()).await {
            Ok(products) => self.render(ticket, render::low_stock(&products)),
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    /// Sends only the supplied fields; a blank form is rejected locally.
    pub async fn update_product(&self, form: &ProductUpdateForm) {
        let ticket = self.ticket(Target::UpdateProductMessage);
        let (id, update) = match form.validate() {
            Ok(validated) => validated,
            Err(e) => return self.render_form_error(ticket, &e),
        };
        match self.api.update_product(id, &update).await {
            Ok(_) => {
                self.render_text(ticket, format!("Product #{id} updated ✔"));
                self.refresh_products().await;
            }
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    pub async fn toggle_active(&self, form: &ToggleActiveForm) {
        let ticket = self.ticket(Target::ToggleActiveMessage);
        let (id, active) = match form.validate() {
            Ok(validated) => validated,
            Err(e) => return self.render_form_error(ticket, &e),
        };
        match self.api.set_product_active(id, active).await {
            Ok(_) => {
                self.render_text(ticket, format!("Product #{id} active={active} ✔"));
                self.refresh_products().await;
            }
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    pub async fn purchase_detail(&self, form: &PurchaseDetailForm) {
        let ticket = self.ticket(Target::PurchaseDetail);
        let id = match form.validate() {
            Ok(id) => id,
            Err(e) => return self.render_form_error(ticket, &e),
        };
        match self.api.get_purchase(id).await {
            Ok(purchase) => self.render(
                ticket,
                Content::Html(render::purchase_detail(&purchase, &self.timestamp_format)),
            ),
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    pub async fn customer_purchases(&self, form: &CustomerPurchasesForm) {
        let ticket = self.ticket(Target::CustomerPurchases);
        let customer_id = match form.validate() {
            Ok(id) => id,
            Err(e) => return self.render_form_error(ticket, &e),
        };
        match self.api.list_customer_purchases(customer_id).await {
            Ok(purchases) => self.render(
                ticket,
                render::customer_purchases(&purchases, &self.timestamp_format),
            ),
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    pub async fn credit_cards(&self, form: &CreditCardsForm) {
        let ticket = self.ticket(Target::CreditCards);
        let customer_id = match form.validate() {
            Ok(id) => id,
            Err(e) => return self.render_form_error(ticket, &e),
        };
        match self.api.list_credit_cards(customer_id).await {
            Ok(cards) => self.render(ticket, render::credit_cards(&cards)),
            Err(e) => self.render_api_error(ticket, &e),
        }
    }

    pub async fn create_credit_card(&self, form: &NewCreditCardForm) {
        let ticket = self.ticket(Target::AddCreditCardMessage);
        let card = match form.validate() {
            Ok(card) => card,
            Err(e) => return self.render_form_error(ticket, &e),
        };
        match self.api.create_credit_card(&card).await {
            Ok(created) => {
                self.render_text(ticket, format!("Credit card #{} added ✔", created.id))
            }
            Err(e) => self.render_api_error(ticket, &e),
        }
    }
}
