//! Demo catalog used to populate an empty store.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use adegamax_core::RecordId;
use adegamax_parties::{SupplierFields, SupplierStatus};
use adegamax_products::{ProductFields, ProductStatus};

/// Demo suppliers. Seeded first into an empty store, so they receive ids 1
/// and 2, which [`demo_products`] reference.
pub fn demo_suppliers() -> Vec<SupplierFields> {
    vec![
        SupplierFields {
            name: "Premium Winery Ltd".to_string(),
            contact_person: "John Silva".to_string(),
            phone: "(11) 99999-9999".to_string(),
            email: "contact@winery.example".to_string(),
            address: "123 Vineyard Street".to_string(),
            category: "Wines and Spirits".to_string(),
            status: SupplierStatus::Active,
        },
        SupplierFields {
            name: "Craft Brewery".to_string(),
            contact_person: "Mary Santos".to_string(),
            phone: "(11) 88888-8888".to_string(),
            email: "sales@brewery.example".to_string(),
            address: "456 Malt Avenue".to_string(),
            category: "Beers".to_string(),
            status: SupplierStatus::Active,
        },
    ]
}

pub fn demo_products() -> Vec<ProductFields> {
    vec![
        demo_product(
            "Cabernet Red Wine",
            "VT001",
            "Wines",
            (15, 10),
            (4500, 40),
            (2025, 12, 15),
            1,
        ),
        demo_product(
            "Premium Lager Beer",
            "CP002",
            "Beers",
            (5, 20),
            (850, 35),
            (2025, 8, 20),
            2,
        ),
        demo_product(
            "Single Malt Whisky",
            "WS003",
            "Spirits",
            (3, 5),
            (18000, 50),
            (2027, 1, 10),
            1,
        ),
    ]
}

fn demo_product(
    name: &str,
    code: &str,
    category: &str,
    (stock_level, minimum_stock): (u32, u32),
    (purchase_cents, margin): (i64, i64),
    (y, m, d): (i32, u32, u32),
    supplier: u64,
) -> ProductFields {
    ProductFields {
        name: name.to_string(),
        code: code.to_string(),
        category: category.to_string(),
        stock_level,
        minimum_stock,
        purchase_value: Decimal::new(purchase_cents, 2),
        profit_margin: Decimal::new(margin, 0),
        expiration_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        supplier_id: RecordId::new(supplier),
        status: ProductStatus::Active,
    }
}
