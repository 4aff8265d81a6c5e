use serde::Deserialize;

use crate::forms::{
    CreditCardsForm, CustomerPurchasesForm, LowStockForm, NewCreditCardForm, NewCustomerForm,
    NewProductForm, ProductSearchForm, ProductUpdateForm, PurchaseDetailForm, PurchaseForm,
    ToggleActiveForm,
};

pub mod bridge;

/// A form submission, as read by the binary from its input.
#[derive(Deserialize, Debug)]
pub enum Submission {
    Load,
    Health,
    SearchProducts(ProductSearchForm),
    AddProduct(NewProductForm),
    AddCustomer(NewCustomerForm),
    CreatePurchase(PurchaseForm),
    LowStock(LowStockForm),
    UpdateProduct(ProductUpdateForm),
    ToggleActive(ToggleActiveForm),
    PurchaseDetail(PurchaseDetailForm),
    CustomerPurchases(CustomerPurchasesForm),
    CreditCards(CreditCardsForm),
    AddCreditCard(NewCreditCardForm),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_submissions() {
        let msg: Submission =
            serde_json::from_str(r#"{"SearchProducts": {"search": "tea"}}"#).unwrap();
        let Submission::SearchProducts(form) = msg else {
            panic!("unexpected submission");
        };
        assert_eq!(form.search, "tea");
        assert_eq!(form.min_price, "");

        let msg: Submission = serde_json::from_str(r#""Load""#).unwrap();
        assert!(matches!(msg, Submission::Load));
    }
}
