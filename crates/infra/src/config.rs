//! Configuration loading and representation.

use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "ADEGAMAX_DATA_DIR";
pub const SEED_DEMO_DATA_ENV: &str = "ADEGAMAX_SEED_DEMO_DATA";

/// Infrastructure settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfraConfig {
    /// Directory for the JSON file store. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Seed the demo catalog into an empty store on open.
    pub seed_demo_data: bool,
}

impl Default for InfraConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed_demo_data: true,
        }
    }
}

impl InfraConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_dir = lookup(DATA_DIR_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let seed_demo_data = match lookup(SEED_DEMO_DATA_ENV) {
            None => defaults.seed_demo_data,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "{SEED_DEMO_DATA_ENV} is not a boolean; using default"
                    );
                    defaults.seed_demo_data
                }
            },
        };

        Self {
            data_dir,
            seed_demo_data,
        }
    }
}
