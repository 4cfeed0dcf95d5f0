use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use adegamax_core::{Entity, Record, RecordId};

use crate::pricing::compute_sale_price;

/// Product status.
///
/// Only `Active` is assigned by the application today; no transitions are
/// enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

/// Everything an operator submits through the product form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub code: String,
    pub category: String,
    pub stock_level: u32,
    pub minimum_stock: u32,
    /// Unit cost.
    pub purchase_value: Decimal,
    /// Markup over cost, in percent.
    pub profit_margin: Decimal,
    pub expiration_date: NaiveDate,
    /// Weak reference: the supplier may no longer exist.
    pub supplier_id: RecordId,
    #[serde(default)]
    pub status: ProductStatus,
}

/// A catalog product with its stock position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: RecordId,
    name: String,
    code: String,
    category: String,
    stock_level: u32,
    minimum_stock: u32,
    purchase_value: Decimal,
    profit_margin: Decimal,
    /// Snapshot of the sale price computed at the last save.
    sale_value: Decimal,
    expiration_date: NaiveDate,
    supplier_id: RecordId,
    #[serde(default)]
    status: ProductStatus,
}

impl Product {
    pub fn id_typed(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn stock_level(&self) -> u32 {
        self.stock_level
    }

    pub fn minimum_stock(&self) -> u32 {
        self.minimum_stock
    }

    pub fn purchase_value(&self) -> Decimal {
        self.purchase_value
    }

    pub fn profit_margin(&self) -> Decimal {
        self.profit_margin
    }

    pub fn sale_value(&self) -> Decimal {
        self.sale_value
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    pub fn supplier_id(&self) -> RecordId {
        self.supplier_id
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    /// Stock is at or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.stock_level <= self.minimum_stock
    }

    /// Current field values, e.g. to pre-fill an edit form.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            code: self.code.clone(),
            category: self.category.clone(),
            stock_level: self.stock_level,
            minimum_stock: self.minimum_stock,
            purchase_value: self.purchase_value,
            profit_margin: self.profit_margin,
            expiration_date: self.expiration_date,
            supplier_id: self.supplier_id,
            status: self.status,
        }
    }
}

impl Entity for Product {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for Product {
    type Fields = ProductFields;

    const KIND: &'static str = "product";

    fn from_fields(id: RecordId, fields: ProductFields) -> Self {
        let mut product = Self {
            id,
            name: String::new(),
            code: String::new(),
            category: String::new(),
            stock_level: 0,
            minimum_stock: 0,
            purchase_value: Decimal::ZERO,
            profit_margin: Decimal::ZERO,
            sale_value: Decimal::ZERO,
            expiration_date: fields.expiration_date,
            supplier_id: fields.supplier_id,
            status: ProductStatus::Active,
        };
        product.apply_fields(fields);
        product
    }

    fn apply_fields(&mut self, fields: ProductFields) {
        // Sale value is only refreshed here, on save.
        self.sale_value = compute_sale_price(fields.purchase_value, fields.profit_margin);
        self.name = fields.name;
        self.code = fields.code;
        self.category = fields.category;
        self.stock_level = fields.stock_level;
        self.minimum_stock = fields.minimum_stock;
        self.purchase_value = fields.purchase_value;
        self.profit_margin = fields.profit_margin;
        self.expiration_date = fields.expiration_date;
        self.supplier_id = fields.supplier_id;
        self.status = fields.status;
    }
}
