//! Filtered and classified product views.

use chrono::{Days, NaiveDate};

use adegamax_core::RecordId;
use adegamax_parties::Supplier;
use adegamax_products::Product;

/// Products expiring within this many days from today are flagged.
pub const NEAR_EXPIRY_HORIZON_DAYS: u64 = 30;

/// Label shown in place of a supplier name when the reference dangles.
pub const SUPPLIER_NOT_FOUND: &str = "Not found";

/// Products whose stock is at or below their minimum, in store order.
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

/// Whether `product` expires after `today` and no later than the horizon.
///
/// Products already expired (on or before `today`) are not near expiry.
pub fn is_near_expiry(product: &Product, today: NaiveDate) -> bool {
    let expires = product.expiration_date();
    let horizon = today
        .checked_add_days(Days::new(NEAR_EXPIRY_HORIZON_DAYS))
        .unwrap_or(NaiveDate::MAX);
    expires > today && expires <= horizon
}

/// Products that expire within the next 30 days, in store order.
pub fn near_expiry(products: &[Product], today: NaiveDate) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| is_near_expiry(p, today))
        .collect()
}

/// Case-insensitive substring match against name or code. An empty query
/// matches everything.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name().to_lowercase().contains(&needle) || p.code().to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn find_supplier(suppliers: &[Supplier], supplier_id: RecordId) -> Option<&Supplier> {
    suppliers.iter().find(|s| s.id_typed() == supplier_id)
}

/// Name of the referenced supplier, or [`SUPPLIER_NOT_FOUND`] when the
/// reference dangles.
pub fn resolve_supplier_name(suppliers: &[Supplier], supplier_id: RecordId) -> &str {
    match find_supplier(suppliers, supplier_id) {
        Some(supplier) => supplier.name(),
        None => {
            tracing::debug!(%supplier_id, "dangling supplier reference");
            SUPPLIER_NOT_FOUND
        }
    }
}
