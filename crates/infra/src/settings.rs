//! Persisted display settings: branding strings and the active navigation tab.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, StoreError, keys, load_json, save_json};

pub const DEFAULT_SYSTEM_NAME: &str = "AdegaMax";
pub const DEFAULT_SYSTEM_DESCRIPTION: &str = "Beverage Cellar Management System";

/// A ready-made branding choice offered on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsPreset {
    pub system_name: &'static str,
    pub system_description: &'static str,
}

pub const PRESETS: [SettingsPreset; 4] = [
    SettingsPreset {
        system_name: DEFAULT_SYSTEM_NAME,
        system_description: DEFAULT_SYSTEM_DESCRIPTION,
    },
    SettingsPreset {
        system_name: "VitaVinho",
        system_description: "Premium Management System for Distributors",
    },
    SettingsPreset {
        system_name: "BrewStock",
        system_description: "Management System for Breweries",
    },
    SettingsPreset {
        system_name: "BebidaStock",
        system_description: "Beverage Stock Control System",
    },
];

/// Look up a preset by its system name (case-insensitive).
pub fn preset(system_name: &str) -> Option<&'static SettingsPreset> {
    PRESETS
        .iter()
        .find(|p| p.system_name.eq_ignore_ascii_case(system_name))
}

/// Navigation tab of the single-page client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Products,
    Suppliers,
    Reports,
    Settings,
}

/// Branding strings shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSettings {
    pub system_name: String,
    pub system_description: String,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            system_name: DEFAULT_SYSTEM_NAME.to_string(),
            system_description: DEFAULT_SYSTEM_DESCRIPTION.to_string(),
        }
    }
}

/// Settings state, written through to the store on every change.
#[derive(Debug)]
pub struct Settings<S: KeyValueStore> {
    store: S,
    system: SystemSettings,
    active_tab: ActiveTab,
}

impl<S: KeyValueStore> Settings<S> {
    pub fn open(store: S) -> Result<Self, StoreError> {
        let defaults = SystemSettings::default();
        let system = SystemSettings {
            system_name: load_json(&store, keys::SYSTEM_NAME, defaults.system_name)?,
            system_description: load_json(
                &store,
                keys::SYSTEM_DESCRIPTION,
                defaults.system_description,
            )?,
        };
        let active_tab = load_json(&store, keys::ACTIVE_TAB, ActiveTab::default())?;

        Ok(Self {
            store,
            system,
            active_tab,
        })
    }

    pub fn system(&self) -> &SystemSettings {
        &self.system
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn set_system_name(&mut self, name: impl Into<String>) -> Result<(), StoreError> {
        let name = name.into();
        save_json(&self.store, keys::SYSTEM_NAME, &name)?;
        self.system.system_name = name;
        Ok(())
    }

    pub fn set_system_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), StoreError> {
        let description = description.into();
        save_json(&self.store, keys::SYSTEM_DESCRIPTION, &description)?;
        self.system.system_description = description;
        Ok(())
    }

    pub fn apply_preset(&mut self, preset: &SettingsPreset) -> Result<(), StoreError> {
        self.set_system_name(preset.system_name)?;
        self.set_system_description(preset.system_description)?;
        tracing::info!(system_name = preset.system_name, "settings preset applied");
        Ok(())
    }

    pub fn set_active_tab(&mut self, tab: ActiveTab) -> Result<(), StoreError> {
        save_json(&self.store, keys::ACTIVE_TAB, &tab)?;
        self.active_tab = tab;
        Ok(())
    }
}
