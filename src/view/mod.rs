//! Display targets and the rendering seam between the bridge and whatever
//! shows the results.

use std::fmt::{self, Display};

pub mod console;
pub mod memory;
pub mod render;

pub use console::ConsoleView;
pub use memory::MemoryView;

/// Named output containers written by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Products,
    AddProductMessage,
    AddCustomerMessage,
    PurchaseMessage,
    LowStock,
    UpdateProductMessage,
    ToggleActiveMessage,
    PurchaseDetail,
    CustomerPurchases,
    CreditCards,
    AddCreditCardMessage,
    Status,
}

impl Target {
    /// Element id the target is known by in the page markup.
    pub fn id(self) -> &'static str {
        match self {
            Target::Products => "products",
            Target::AddProductMessage => "addProductMsg",
            Target::AddCustomerMessage => "addCustomerMsg",
            Target::PurchaseMessage => "purchaseMsg",
            Target::LowStock => "lowStock",
            Target::UpdateProductMessage => "updateProductMsg",
            Target::ToggleActiveMessage => "toggleActiveMsg",
            Target::PurchaseDetail => "purchaseDetail",
            Target::CustomerPurchases => "customerPurchases",
            Target::CreditCards => "creditCards",
            Target::AddCreditCardMessage => "addCreditCardMsg",
            Target::Status => "status",
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What a target ends up showing: plain text or an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Html(String),
}

impl Content {
    pub fn as_str(&self) -> &str {
        match self {
            Content::Text(text) | Content::Html(text) => text,
        }
    }
}

/// Sink for rendered output. Each call replaces the target's content.
pub trait View: Send + Sync {
    fn set_text(&self, target: Target, text: &str);

    fn set_html(&self, target: Target, html: &str);

    fn show(&self, target: Target, content: &Content) {
        match content {
            Content::Text(text) => self.set_text(target, text),
            Content::Html(html) => self.set_html(target, html),
        }
    }
}
