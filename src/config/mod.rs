//! Configuration module.
//!
//! Handles store credentials, catalog/ruleset selection, and server options.

mod settings;

pub use settings::{
    expand_env_vars, CatalogSettings, ServerSettings, Settings, SettingsError, StoreSettings,
    VizSettings,
};
