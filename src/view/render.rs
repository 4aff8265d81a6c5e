//! HTML fragments for API responses.
//!
//! Server values are written as received; only HTML metacharacters are
//! escaped so that names and statuses display literally.

use std::fmt::Display;

use html_escape::encode_text;

use crate::domain::credit_card::CreditCard;
use crate::domain::product::{LowStockProduct, Product};
use crate::domain::purchase::{CustomerPurchase, Purchase, PurchaseItem};
use crate::view::Content;

pub const NO_LOW_STOCK: &str = "No low-stock products";
pub const NO_PURCHASES: &str = "No purchases";
pub const NO_CREDIT_CARDS: &str = "No credit cards";

/// Text shown for any failed round trip.
pub fn error_text(error: &impl Display) -> String {
    format!("Error: {error}")
}

fn list<T>(items: &[T], item: impl Fn(&T) -> String) -> String {
    let mut html = String::from("<ul>");
    for entry in items {
        html.push_str("<li>");
        html.push_str(&item(entry));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

/// `#id name — $price (stock N)` per product. No products gives `<ul></ul>`.
pub fn product_list(products: &[Product]) -> String {
    list(products, |p| {
        format!(
            "#{} {} — ${} (stock {})",
            p.id,
            encode_text(&p.name),
            encode_text(p.price.as_str()),
            p.stock_qty
        )
    })
}

pub fn low_stock(products: &[LowStockProduct]) -> Content {
    if products.is_empty() {
        return Content::Text(NO_LOW_STOCK.to_string());
    }
    Content::Html(list(products, |p| {
        format!("#{} {} — stock {}", p.id, encode_text(&p.name), p.stock_qty)
    }))
}

fn purchase_item(item: &PurchaseItem) -> String {
    format!(
        "{}: {} × ${}",
        encode_text(&item.product_name),
        item.qty,
        encode_text(item.unit_price.as_str())
    )
}

pub fn purchase_detail(purchase: &Purchase, timestamp_format: &str) -> String {
    let items = if purchase.items.is_empty() {
        "<em>No items</em>".to_string()
    } else {
        list(&purchase.items, purchase_item)
    };
    format!(
        "<p>#{} — customer {} — {}</p><p>Total: ${} — Status: {}</p><h4>Items</h4>{}",
        purchase.id,
        purchase.customer_id,
        encode_text(&purchase.purchased_at.localized(timestamp_format)),
        encode_text(purchase.total_amount.as_str()),
        encode_text(&purchase.status),
        items
    )
}

pub fn customer_purchases(purchases: &[CustomerPurchase], timestamp_format: &str) -> Content {
    if purchases.is_empty() {
        return Content::Text(NO_PURCHASES.to_string());
    }
    Content::Html(list(purchases, |p| {
        format!(
            "#{} — {} — ${} — {}",
            p.id,
            encode_text(&p.purchased_at.localized(timestamp_format)),
            encode_text(p.total_amount.as_str()),
            encode_text(&p.status)
        )
    }))
}

pub fn credit_cards(cards: &[CreditCard]) -> Content {
    if cards.is_empty() {
        return Content::Text(NO_CREDIT_CARDS.to_string());
    }
    Content::Html(list(cards, |c| {
        format!(
            "#{} {} •••• {} (exp {:02}/{})",
            c.id,
            encode_text(&c.brand),
            encode_text(&c.last4),
            c.exp_month,
            c.exp_year
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Amount, Timestamp};

    fn product(id: i64, name: &str, price: &str, stock_qty: i64) -> Product {
        Product {
            id,
            name: name.into(),
            description: None,
            price: Amount::new(price),
            stock_qty,
            active: true,
        }
    }

    fn purchase(items: Vec<PurchaseItem>) -> Purchase {
        Purchase {
            id: 12,
            customer_id: 3,
            purchased_at: Timestamp::new("2024-05-01T09:30:00"),
            total_amount: Amount::new("25.50"),
            status: "PAID".into(),
            items,
        }
    }

    #[test]
    fn renders_product_list() {
        let html = product_list(&[product(1, "Sencha", "4.00", 12), product(2, "Puer", "9.90", 0)]);
        assert_eq!(
            html,
            "<ul><li>#1 Sencha — $4.00 (stock 12)</li><li>#2 Puer — $9.90 (stock 0)</li></ul>"
        );
    }

    #[test]
    fn empty_product_list_is_an_empty_ul() {
        assert_eq!(product_list(&[]), "<ul></ul>");
    }

    #[test]
    fn escapes_markup_in_names() {
        let html = product_list(&[product(5, "<b>Tea</b> & co", "1", 1)]);
        assert!(html.contains("&lt;b&gt;Tea&lt;/b&gt; &amp; co"));
    }

    #[test]
    fn empty_low_stock_is_plain_text() {
        assert_eq!(low_stock(&[]), Content::Text("No low-stock products".into()));
    }

    #[test]
    fn renders_low_stock_rows() {
        let rows = [LowStockProduct {
            id: 4,
            name: "Matcha".into(),
            stock_qty: 2,
        }];
        assert_eq!(
            low_stock(&rows),
            Content::Html("<ul><li>#4 Matcha — stock 2</li></ul>".into())
        );
    }

    #[test]
    fn purchase_detail_without_items() {
        let html = purchase_detail(&purchase(vec![]), "%Y-%m-%d %H:%M");
        assert_eq!(
            html,
            "<p>#12 — customer 3 — 2024-05-01 09:30</p><p>Total: $25.50 — Status: PAID</p><h4>Items</h4><em>No items</em>"
        );
    }

    #[test]
    fn purchase_detail_lists_items() {
        let items = vec![PurchaseItem {
            product_id: Some(1),
            product_name: "Sencha".into(),
            qty: 2,
            unit_price: Amount::new("4.00"),
        }];
        let html = purchase_detail(&purchase(items), "%Y");
        assert!(html.ends_with("<h4>Items</h4><ul><li>Sencha: 2 × $4.00</li></ul>"));
    }

    #[test]
    fn renders_credit_cards() {
        let cards = [CreditCard {
            id: 8,
            customer_id: 3,
            brand: "Visa".into(),
            last4: "4242".into(),
            exp_month: 3,
            exp_year: 2030,
            created_at: Timestamp::new("2024-05-01T09:30:00"),
        }];
        assert_eq!(
            credit_cards(&cards),
            Content::Html("<ul><li>#8 Visa •••• 4242 (exp 03/2030)</li></ul>".into())
        );
        assert_eq!(credit_cards(&[]), Content::Text("No credit cards".into()));
    }
}
