//! Raw form state and its validation into request payloads.
//!
//! Every form keeps its fields as the text a user entered. Validation either
//! yields a typed payload or a [`FormError`] that is shown without touching
//! the network.

use thiserror::Error;

pub mod credit_card;
pub mod customer;
pub mod product;
pub mod purchase;

pub use credit_card::{CreditCardsForm, NewCreditCardForm};
pub use customer::{CustomerPurchasesForm, NewCustomerForm};
pub use product::{LowStockForm, NewProductForm, ProductSearchForm, ProductUpdateForm, ToggleActiveForm};
pub use purchase::{PurchaseDetailForm, PurchaseForm};

/// A numeric field whose text did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field}: {value:?}")]
pub struct FieldError {
    pub field: &'static str,
    pub value: String,
}

/// Local validation failure; no request is issued when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Provide at least one field to update")]
    NoUpdateFields,
    #[error("{}", join_field_errors(.0))]
    InvalidFields(Vec<FieldError>),
}

impl FormError {
    /// Collects the failed fields out of a set of parse results.
    pub(crate) fn fields<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Option<FieldError>>,
    {
        Self::InvalidFields(errors.into_iter().flatten().collect())
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Returns the trimmed text, or `None` when the field was left blank.
pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

pub(crate) fn parse_int(field: &'static str, value: &str) -> Result<i64, FieldError> {
    value.trim().parse().map_err(|_| FieldError {
        field,
        value: value.to_string(),
    })
}

pub(crate) fn parse_decimal(field: &'static str, value: &str) -> Result<f64, FieldError> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(FieldError {
            field,
            value: value.to_string(),
        }),
    }
}

/// Blank means "not supplied"; anything else has to parse.
pub(crate) fn parse_optional_int(
    field: &'static str,
    value: &str,
) -> Result<Option<i64>, FieldError> {
    non_empty(value)
        .map(|value| parse_int(field, value))
        .transpose()
}

pub(crate) fn parse_optional_decimal(
    field: &'static str,
    value: &str,
) -> Result<Option<f64>, FieldError> {
    non_empty(value)
        .map(|value| parse_decimal(field, value))
        .transpose()
}

/// Keeps the text of a query field only when it is non-empty.
///
/// The text itself is forwarded unchanged, matching what the user typed.
pub(crate) fn query_value(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ints_with_surrounding_whitespace() {
        assert_eq!(parse_int("id", " 42 "), Ok(42));
    }

    #[test]
    fn rejects_non_finite_decimals() {
        assert!(parse_decimal("price", "NaN").is_err());
        assert!(parse_decimal("price", "inf").is_err());
        assert_eq!(parse_decimal("price", "3.25"), Ok(3.25));
    }

    #[test]
    fn blank_optional_fields_are_not_supplied() {
        assert_eq!(parse_optional_int("stock_qty", "   "), Ok(None));
        assert_eq!(parse_optional_decimal("price", ""), Ok(None));
    }

    #[test]
    fn field_errors_are_joined_for_display() {
        let error = FormError::fields([
            Some(FieldError {
                field: "price",
                value: "abc".into(),
            }),
            None,
            Some(FieldError {
                field: "stock_qty",
                value: "x".into(),
            }),
        ]);
        assert_eq!(
            error.to_string(),
            r#"Invalid price: "abc"; Invalid stock_qty: "x""#
        );
    }
}
