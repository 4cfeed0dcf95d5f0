//! Parties domain module (suppliers).
//!
//! This crate contains the supplier record, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod supplier;

pub use supplier::{Supplier, SupplierFields, SupplierStatus};
