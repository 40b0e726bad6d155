//! TOML-based configuration.
//!
//! Supports a config file (retail-insights.toml) with environment variable
//! expansion in the store password.
//!
//! Example configuration:
//! ```toml
//! [store]
//! host = "localhost"
//! port = 3306
//! user = "root"
//! password = "${RETAIL_DB_PASSWORD}"
//! database = "retail_orders"
//!
//! [catalog]
//! variant = "core"        # core | extended
//!
//! [viz]
//! ruleset = "standard"    # standard | bar-only
//!
//! [server]
//! port = 8714
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::CatalogVariant;
use crate::viz::RulesetKind;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Credentials for the external store.
    pub store: StoreSettings,

    /// Which query catalog to serve.
    pub catalog: CatalogSettings,

    /// Chart classification rules.
    pub viz: VizSettings,

    /// Web server options.
    pub server: ServerSettings,
}

/// Connection options for the external store.
///
/// No environment-variable indirection beyond `${VAR}` expansion in the
/// password; the remaining fields are plain values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Store hostname.
    pub host: String,

    /// Store TCP port.
    pub port: u16,

    /// Username.
    pub user: String,

    /// Password (supports `${ENV_VAR}` expansion).
    pub password: String,

    /// Database name.
    pub database: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: "root".to_string(),
            database: "retail_orders".to_string(),
        }
    }
}

impl StoreSettings {
    /// Copy of these settings with the password expanded.
    pub fn resolved(&self) -> Result<Self, SettingsError> {
        Ok(Self {
            password: expand_env_vars(&self.password)?,
            ..self.clone()
        })
    }
}

/// Catalog selection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog variant: "core" (10 queries) or "extended" (20 queries).
    pub variant: CatalogVariant,
}

/// Visualization selection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VizSettings {
    /// Classification ruleset: "standard" or "bar-only".
    pub ruleset: RulesetKind,
}

/// Web server options.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Port to listen on.
    pub port: u16,

    /// Open the browser after binding.
    pub open_browser: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8714,
            open_browser: false,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `RETAIL_INSIGHTS_CONFIG`
    /// 2. `./retail-insights.toml`
    /// 3. `~/.config/retail-insights/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("RETAIL_INSIGHTS_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("retail-insights.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("retail-insights").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // No config file found, defaults apply.
        Ok(Settings::default())
    }
}

/// Expand `${VAR}` and `$VAR` references in a string using environment
/// variables. Returns an error if a referenced variable is not set.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if chars.peek() == Some(&'{') {
                chars.next();
                let mut var_name = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch == '}' {
                        chars.next();
                        break;
                    }
                    var_name.push(ch);
                    chars.next();
                }
                let value = env::var(&var_name)
                    .map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
                result.push_str(&value);
            } else {
                let mut var_name = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_alphanumeric() || ch == '_' {
                        var_name.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if var_name.is_empty() {
                    result.push('$');
                } else {
                    let value = env::var(&var_name)
                        .map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
                    result.push_str(&value);
                }
            }
        } else {
            result.push(c);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_local_dev_store() {
        let settings = Settings::default();
        assert_eq!(settings.store.host, "localhost");
        assert_eq!(settings.store.port, 3306);
        assert_eq!(settings.store.database, "retail_orders");
        assert_eq!(settings.catalog.variant, CatalogVariant::Core);
        assert_eq!(settings.viz.ruleset, RulesetKind::Standard);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [store]
            host = "db.internal"
            port = 3307
            user = "insights"
            password = "secret"
            database = "retail"

            [catalog]
            variant = "extended"

            [viz]
            ruleset = "bar-only"

            [server]
            port = 9000
            open_browser = true
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.store.host, "db.internal");
        assert_eq!(settings.store.port, 3307);
        assert_eq!(settings.catalog.variant, CatalogVariant::Extended);
        assert_eq!(settings.viz.ruleset, RulesetKind::BarOnly);
        assert_eq!(settings.server.port, 9000);
        assert!(settings.server.open_browser);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let toml = r#"
            [catalog]
            variant = "everything"
        "#;
        assert!(toml::from_str::<Settings>(toml).is_err());
    }

    #[test]
    fn test_expand_env_vars_braced() {
        env::set_var("RETAIL_TEST_PW", "hunter2");
        assert_eq!(expand_env_vars("${RETAIL_TEST_PW}").unwrap(), "hunter2");
        assert_eq!(expand_env_vars("pw-$RETAIL_TEST_PW").unwrap(), "pw-hunter2");
    }

    #[test]
    fn test_expand_env_vars_missing() {
        let err = expand_env_vars("${RETAIL_TEST_MISSING_VAR}").unwrap_err();
        assert!(matches!(err, SettingsError::MissingEnvVar(_)));
    }

    #[test]
    fn test_plain_string_passes_through() {
        assert_eq!(expand_env_vars("root").unwrap(), "root");
    }
}
