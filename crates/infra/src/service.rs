//! Inventory service: the operations the presentation layer calls.
//!
//! Wraps the record store and settings around one shared key/value store and
//! answers every derived query by recomputing it from the current records.

use std::sync::Arc;

use anyhow::Context;
use chrono::{NaiveDate, Utc};

use adegamax_core::RecordId;
use adegamax_inventory::{
    CategoryReport, DashboardSummary, InventoryAlerts, ValuationReport, category_report,
    low_stock, near_expiry, resolve_supplier_name, search, supplier_product_count,
    valuation_report,
};
use adegamax_parties::{Supplier, SupplierFields};
use adegamax_products::{Product, ProductFields, ProductForm};

use crate::config::InfraConfig;
use crate::error::InventoryResult;
use crate::persistence::{InMemoryKeyValueStore, JsonFileStore, KeyValueStore};
use crate::record_store::RecordStore;
use crate::seed::{demo_products, demo_suppliers};
use crate::settings::{ActiveTab, Settings, SettingsPreset, SystemSettings};

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Service over whichever store the configuration selected.
pub type DynInventoryService = InventoryService<dyn KeyValueStore>;

pub struct InventoryService<S: KeyValueStore + ?Sized> {
    records: RecordStore<Arc<S>>,
    settings: Settings<Arc<S>>,
    today: fn() -> NaiveDate,
}

impl DynInventoryService {
    /// Open the store selected by `config` and seed it if asked to.
    pub fn from_config(config: &InfraConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.data_dir {
            Some(dir) => Arc::new(
                JsonFileStore::open(dir)
                    .with_context(|| format!("failed to open data directory {}", dir.display()))?,
            ),
            None => {
                tracing::warn!("no data directory configured; state will not survive restart");
                Arc::new(InMemoryKeyValueStore::new())
            }
        };

        Self::open(store, config.seed_demo_data).context("failed to load inventory state")
    }
}

impl<S: KeyValueStore + ?Sized> InventoryService<S> {
    pub fn open(store: Arc<S>, seed_demo_data: bool) -> InventoryResult<Self> {
        let mut records = RecordStore::open(store.clone())?;
        if seed_demo_data {
            records.seed_if_empty(demo_suppliers(), demo_products())?;
        }
        let settings = Settings::open(store)?;

        Ok(Self {
            records,
            settings,
            today: utc_today,
        })
    }

    /// Override the clock used by date-relative views.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    // Products

    pub fn products(&self) -> &[Product] {
        self.records.products()
    }

    pub fn product(&self, id: RecordId) -> Option<&Product> {
        self.records.product(id)
    }

    pub fn create_product(&mut self, fields: ProductFields) -> InventoryResult<Product> {
        self.records.create_product(fields)
    }

    pub fn update_product(
        &mut self,
        id: RecordId,
        fields: ProductFields,
    ) -> InventoryResult<Product> {
        self.records.update_product(id, fields)
    }

    pub fn delete_product(&mut self, id: RecordId) -> InventoryResult<Product> {
        self.records.delete_product(id)
    }

    /// Validate a submitted form, then create.
    pub fn submit_new_product(&mut self, form: &ProductForm) -> InventoryResult<Product> {
        let fields = form.parse()?;
        self.create_product(fields)
    }

    /// Validate a submitted edit form, then update.
    pub fn submit_product_edit(
        &mut self,
        id: RecordId,
        form: &ProductForm,
    ) -> InventoryResult<Product> {
        let fields = form.parse()?;
        self.update_product(id, fields)
    }

    // Suppliers

    pub fn suppliers(&self) -> &[Supplier] {
        self.records.suppliers()
    }

    pub fn supplier(&self, id: RecordId) -> Option<&Supplier> {
        self.records.supplier(id)
    }

    pub fn create_supplier(&mut self, fields: SupplierFields) -> InventoryResult<Supplier> {
        self.records.create_supplier(fields)
    }

    pub fn update_supplier(
        &mut self,
        id: RecordId,
        fields: SupplierFields,
    ) -> InventoryResult<Supplier> {
        self.records.update_supplier(id, fields)
    }

    pub fn delete_supplier(&mut self, id: RecordId) -> InventoryResult<Supplier> {
        self.records.delete_supplier(id)
    }

    // Derived views

    pub fn low_stock(&self) -> Vec<&Product> {
        low_stock(self.products())
    }

    pub fn near_expiry(&self) -> Vec<&Product> {
        near_expiry(self.products(), self.today())
    }

    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        search(self.products(), query)
    }

    /// Supplier name for display; a sentinel label when the id dangles.
    pub fn supplier_name(&self, supplier_id: RecordId) -> &str {
        resolve_supplier_name(self.suppliers(), supplier_id)
    }

    pub fn supplier_product_count(&self, supplier_id: RecordId) -> usize {
        supplier_product_count(self.products(), supplier_id)
    }

    pub fn category_report(&self) -> CategoryReport {
        category_report(self.products())
    }

    pub fn valuation_report(&self) -> ValuationReport {
        valuation_report(self.products())
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::compute(self.products(), self.suppliers(), self.today())
    }

    pub fn alerts(&self) -> InventoryAlerts<'_> {
        InventoryAlerts::collect(self.products(), self.today())
    }

    /// Badge count: low-stock plus near-expiry conditions.
    pub fn alert_count(&self) -> usize {
        self.alerts().count()
    }

    // Settings

    pub fn system_settings(&self) -> &SystemSettings {
        self.settings.system()
    }

    pub fn set_system_name(&mut self, name: impl Into<String>) -> InventoryResult<()> {
        Ok(self.settings.set_system_name(name)?)
    }

    pub fn set_system_description(
        &mut self,
        description: impl Into<String>,
    ) -> InventoryResult<()> {
        Ok(self.settings.set_system_description(description)?)
    }

    pub fn apply_preset(&mut self, preset: &SettingsPreset) -> InventoryResult<()> {
        Ok(self.settings.apply_preset(preset)?)
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.settings.active_tab()
    }

    pub fn set_active_tab(&mut self, tab: ActiveTab) -> InventoryResult<()> {
        Ok(self.settings.set_active_tab(tab)?)
    }
}
