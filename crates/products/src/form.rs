//! Product form boundary.
//!
//! Forms arrive as raw strings. Everything numeric is parsed here so the
//! record store only ever sees well-typed [`ProductFields`].

use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use adegamax_core::{DomainError, DomainResult, RecordId};

use crate::pricing::compute_sale_price;
use crate::product::{Product, ProductFields, ProductStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw values of a submitted product form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub code: String,
    pub category: String,
    pub stock_level: String,
    pub minimum_stock: String,
    pub purchase_value: String,
    pub profit_margin: String,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub expiration_date: String,
    pub supplier_id: String,
    #[serde(default)]
    pub status: ProductStatus,
}

impl ProductForm {
    /// Pre-fill the form with an existing product, for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            code: product.code().to_string(),
            category: product.category().to_string(),
            stock_level: product.stock_level().to_string(),
            minimum_stock: product.minimum_stock().to_string(),
            purchase_value: product.purchase_value().to_string(),
            profit_margin: product.profit_margin().to_string(),
            expiration_date: product.expiration_date().format(DATE_FORMAT).to_string(),
            supplier_id: product.supplier_id().to_string(),
            status: product.status(),
        }
    }

    /// Validate and convert into typed fields.
    pub fn parse(&self) -> DomainResult<ProductFields> {
        let purchase_value = parse_number::<Decimal>("purchaseValue", &self.purchase_value)?;
        if purchase_value.is_sign_negative() && !purchase_value.is_zero() {
            return Err(DomainError::validation("purchaseValue cannot be negative"));
        }

        let expiration_date = NaiveDate::parse_from_str(self.expiration_date.trim(), DATE_FORMAT)
            .map_err(|e| {
                DomainError::validation(format!(
                    "expirationDate {:?} is not a YYYY-MM-DD date: {e}",
                    self.expiration_date
                ))
            })?;

        Ok(ProductFields {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            category: self.category.trim().to_string(),
            stock_level: parse_number("stockLevel", &self.stock_level)?,
            minimum_stock: parse_number("minimumStock", &self.minimum_stock)?,
            purchase_value,
            profit_margin: parse_number("profitMargin", &self.profit_margin)?,
            expiration_date,
            supplier_id: RecordId::new(parse_number("supplierId", &self.supplier_id)?),
            status: self.status,
        })
    }

    /// Sale price shown next to the cost inputs while the form is being
    /// filled in. `None` until both cost and margin parse.
    pub fn sale_value_preview(&self) -> Option<Decimal> {
        let purchase = Decimal::from_str(self.purchase_value.trim()).ok()?;
        let margin = Decimal::from_str(self.profit_margin.trim()).ok()?;
        Some(compute_sale_price(purchase, margin))
    }
}

fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> DomainResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| DomainError::invalid_numeric(field, raw))
}
