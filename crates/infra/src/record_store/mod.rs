//! Record store: owns the product and supplier collections.
//!
//! Both collections are loaded from the key/value store when the record store
//! is opened and the affected collection is written back after every
//! successful mutation. A mutation either is applied and persisted, or leaves
//! both memory and store untouched.

mod collection;

pub use collection::Collection;

use serde::Serialize;

use adegamax_core::{DomainError, DomainResult, Entity, Record, RecordId};
use adegamax_parties::{Supplier, SupplierFields};
use adegamax_products::{Product, ProductFields};

use crate::error::{InventoryError, InventoryResult};
use crate::persistence::{KeyValueStore, StoreError, keys, load_json, save_json};

#[derive(Debug)]
pub struct RecordStore<S: KeyValueStore> {
    store: S,
    products: Collection<Product>,
    suppliers: Collection<Supplier>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Load both collections from `store` (missing keys load as empty).
    pub fn open(store: S) -> Result<Self, StoreError> {
        let products: Vec<Product> = load_json(&store, keys::PRODUCTS, Vec::new())?;
        let suppliers: Vec<Supplier> = load_json(&store, keys::SUPPLIERS, Vec::new())?;
        tracing::info!(
            products = products.len(),
            suppliers = suppliers.len(),
            "record store loaded"
        );

        Ok(Self {
            store,
            products: Collection::from_records(products),
            suppliers: Collection::from_records(suppliers),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn products(&self) -> &[Product] {
        self.products.list()
    }

    pub fn suppliers(&self) -> &[Supplier] {
        self.suppliers.list()
    }

    pub fn product(&self, id: RecordId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn supplier(&self, id: RecordId) -> Option<&Supplier> {
        self.suppliers.get(id)
    }

    pub fn create_product(&mut self, fields: ProductFields) -> InventoryResult<Product> {
        let created = commit(&self.store, keys::PRODUCTS, &mut self.products, |c| {
            c.create(fields).cloned()
        })?;
        tracing::info!(id = %created.id(), code = created.code(), "product created");
        Ok(created)
    }

    pub fn update_product(
        &mut self,
        id: RecordId,
        fields: ProductFields,
    ) -> InventoryResult<Product> {
        let updated = commit(&self.store, keys::PRODUCTS, &mut self.products, |c| {
            c.update(id, fields).cloned()
        })?;
        tracing::info!(%id, "product updated");
        Ok(updated)
    }

    pub fn delete_product(&mut self, id: RecordId) -> InventoryResult<Product> {
        let removed = commit(&self.store, keys::PRODUCTS, &mut self.products, |c| {
            c.delete(id)
        })?;
        tracing::info!(%id, "product deleted");
        Ok(removed)
    }

    pub fn create_supplier(&mut self, fields: SupplierFields) -> InventoryResult<Supplier> {
        let created = commit(&self.store, keys::SUPPLIERS, &mut self.suppliers, |c| {
            c.create(fields).cloned()
        })?;
        tracing::info!(id = %created.id(), name = created.name(), "supplier created");
        Ok(created)
    }

    pub fn update_supplier(
        &mut self,
        id: RecordId,
        fields: SupplierFields,
    ) -> InventoryResult<Supplier> {
        let updated = commit(&self.store, keys::SUPPLIERS, &mut self.suppliers, |c| {
            c.update(id, fields).cloned()
        })?;
        tracing::info!(%id, "supplier updated");
        Ok(updated)
    }

    /// Remove a supplier. Products referencing it keep their now-dangling
    /// `supplier_id`.
    pub fn delete_supplier(&mut self, id: RecordId) -> InventoryResult<Supplier> {
        let removed = commit(&self.store, keys::SUPPLIERS, &mut self.suppliers, |c| {
            c.delete(id)
        })?;
        let orphaned = self
            .products
            .list()
            .iter()
            .filter(|p| p.supplier_id() == id)
            .count();
        tracing::info!(%id, orphaned, "supplier deleted");
        Ok(removed)
    }

    /// Insert the given suppliers then products, but only into a store that
    /// holds neither. Returns whether anything was inserted.
    ///
    /// Both collections are built and written before either replaces the
    /// in-memory state.
    pub fn seed_if_empty(
        &mut self,
        suppliers: Vec<SupplierFields>,
        products: Vec<ProductFields>,
    ) -> InventoryResult<bool> {
        if !self.products.is_empty() || !self.suppliers.is_empty() {
            return Ok(false);
        }

        let mut seeded_suppliers = self.suppliers.clone();
        for fields in suppliers {
            seeded_suppliers.create(fields).map_err(log_rejected)?;
        }
        let mut seeded_products = self.products.clone();
        for fields in products {
            seeded_products.create(fields).map_err(log_rejected)?;
        }

        save_json(&self.store, keys::SUPPLIERS, seeded_suppliers.list())?;
        if let Err(err) = save_json(&self.store, keys::PRODUCTS, seeded_products.list()) {
            // Put the supplier document back the way it was.
            let restored = save_json(&self.store, keys::SUPPLIERS, self.suppliers.list());
            if let Err(restore) = restored {
                tracing::error!(error = %restore, "suppliers not restored after failed seed");
            }
            return Err(err.into());
        }

        self.suppliers = seeded_suppliers;
        self.products = seeded_products;
        tracing::info!(
            products = self.products.len(),
            suppliers = self.suppliers.len(),
            "seeded demo data"
        );
        Ok(true)
    }
}

/// Apply `mutate` to `collection` and persist the result. On a rejected
/// mutation nothing is written; on a failed write the collection is put back
/// exactly as it was, id counter included.
fn commit<S, T, R>(
    store: &S,
    key: &str,
    collection: &mut Collection<T>,
    mutate: impl FnOnce(&mut Collection<T>) -> DomainResult<R>,
) -> InventoryResult<R>
where
    S: KeyValueStore + ?Sized,
    T: Record + Serialize,
{
    let before = collection.clone();
    let result = mutate(collection).map_err(log_rejected)?;
    if let Err(err) = save_json(store, key, collection.list()) {
        *collection = before;
        tracing::warn!(key, error = %err, "write failed; mutation rolled back");
        return Err(err.into());
    }
    Ok(result)
}

fn log_rejected(err: DomainError) -> InventoryError {
    tracing::warn!(error = %err, "mutation rejected");
    InventoryError::Domain(err)
}
