//! Inventory views module.
//!
//! Derived, read-only views over the product and supplier collections: stock
//! and expiry classification, search, reports, and the alert aggregate. Every
//! function recomputes from the slices it is given; nothing is cached.

pub mod alerts;
pub mod reports;
pub mod views;

pub use alerts::InventoryAlerts;
pub use reports::{
    CategoryReport, DashboardSummary, ValuationReport, category_report, supplier_product_count,
    valuation_report,
};
pub use views::{
    NEAR_EXPIRY_HORIZON_DAYS, SUPPLIER_NOT_FOUND, find_supplier, is_near_expiry, low_stock,
    near_expiry, resolve_supplier_name, search,
};

#[cfg(test)]
pub(crate) mod test_support;
