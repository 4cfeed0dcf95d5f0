use thiserror::Error;

use adegamax_core::DomainError;

use crate::persistence::StoreError;

/// Error returned by record store and service operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("persistence failed: {0}")]
    Store(#[from] StoreError),
}

impl InventoryError {
    /// Update/delete referenced a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_not_found())
    }
}

pub type InventoryResult<T> = Result<T, InventoryError>;
