//! Products domain module.
//!
//! This crate contains the product catalog record, the sale-price rule that ties
//! purchase cost and margin together, and the product form boundary. Pure
//! deterministic domain logic (no IO, no storage).

pub mod form;
pub mod pricing;
pub mod product;

pub use form::ProductForm;
pub use pricing::{compute_sale_price, format_amount};
pub use product::{Product, ProductFields, ProductStatus};
