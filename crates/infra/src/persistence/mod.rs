//! Persistence collaborator: a durable key/value store.
//!
//! The inventory core only needs `get`/`set` of JSON documents by key; the
//! medium behind it is up to the implementation.

mod in_memory;
mod json_file;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use thiserror::Error;

pub use in_memory::InMemoryKeyValueStore;
pub use json_file::JsonFileStore;

/// Keys under which the application state is persisted.
pub mod keys {
    pub const PRODUCTS: &str = "products";
    pub const SUPPLIERS: &str = "suppliers";
    pub const ACTIVE_TAB: &str = "activeTab";
    pub const SYSTEM_NAME: &str = "systemName";
    pub const SYSTEM_DESCRIPTION: &str = "systemDescription";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode value for key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode value for key `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid key `{0}`")]
    InvalidKey(String),

    #[error("store lock poisoned")]
    Poisoned,
}

/// Durable key/value store holding JSON documents.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StoreError>;
    fn set(&self, key: &str, value: JsonValue) -> Result<(), StoreError>;

    /// Value under `key`, or `default` when nothing was stored yet.
    fn get_or(&self, key: &str, default: JsonValue) -> Result<JsonValue, StoreError> {
        Ok(self.get(key)?.unwrap_or(default))
    }
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: JsonValue) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Load and decode the document under `key`, falling back to `default`.
pub fn load_json<T, S>(store: &S, key: &str, default: T) -> Result<T, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(value) => serde_json::from_value(value).map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        }),
        None => Ok(default),
    }
}

/// Encode `value` and store it under `key`.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_value(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, json)
}
