//! Infrastructure layer: persistence, record store, settings, config, and the
//! service the presentation layer talks to.

pub mod config;
pub mod error;
pub mod persistence;
pub mod record_store;
pub mod seed;
pub mod service;
pub mod settings;

#[cfg(test)]
mod integration_tests;

pub use config::InfraConfig;
pub use error::{InventoryError, InventoryResult};
pub use persistence::{InMemoryKeyValueStore, JsonFileStore, KeyValueStore, StoreError};
pub use record_store::{Collection, RecordStore};
pub use service::{DynInventoryService, InventoryService};
pub use settings::{ActiveTab, Settings, SettingsPreset, SystemSettings};
