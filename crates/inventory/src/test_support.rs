use chrono::NaiveDate;
use rust_decimal::Decimal;

use adegamax_core::{Record, RecordId};
use adegamax_parties::{Supplier, SupplierFields};
use adegamax_products::{Product, ProductFields, ProductStatus};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn test_today() -> NaiveDate {
    date(2025, 6, 1)
}

pub fn product_fields(name: &str, code: &str, category: &str) -> ProductFields {
    ProductFields {
        name: name.to_string(),
        code: code.to_string(),
        category: category.to_string(),
        stock_level: 50,
        minimum_stock: 10,
        purchase_value: Decimal::new(1000, 2),
        profit_margin: Decimal::new(50, 0),
        expiration_date: date(2030, 1, 1),
        supplier_id: RecordId::new(1),
        status: ProductStatus::Active,
    }
}

pub fn product(id: u64, name: &str, code: &str, category: &str) -> Product {
    Product::from_fields(RecordId::new(id), product_fields(name, code, category))
}

pub fn product_with(id: u64, edit: impl FnOnce(&mut ProductFields)) -> Product {
    let mut fields = product_fields("Item", "IT000", "Misc");
    edit(&mut fields);
    Product::from_fields(RecordId::new(id), fields)
}

pub fn supplier(id: u64, name: &str) -> Supplier {
    Supplier::from_fields(
        RecordId::new(id),
        SupplierFields {
            name: name.to_string(),
            ..SupplierFields::default()
        },
    )
}
