//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use medisync_sdk::medisync_core::StoreConfig;
use serde::{Deserialize, Serialize};

/// Config file names searched in the working directory and its parents.
pub const CONFIG_NAMES: [&str; 3] = ["medisync.toml", ".medisync.toml", "medisync.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Branding, currency, and navigation.
    #[serde(default)]
    pub store: StoreConfig,

    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON or TOML catalog document. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Generate a default medisync.toml config file.
pub fn generate_default_config() -> Result<String> {
    render_config(&CliConfig::default())
}

/// Render `config` as commented TOML.
pub fn render_config(config: &CliConfig) -> Result<String> {
    let body = toml::to_string_pretty(config).context("Failed to serialize config")?;
    Ok(format!(
        "# MediSync storefront configuration\n\n{body}\n\
         # Catalog: a JSON or TOML document with `categories` and `medicines`.\n\
         # [catalog]\n\
         # path = \"catalog.toml\"\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use medisync_sdk::medisync_core::NavLink;

    #[test]
    fn test_generated_config_parses_to_default() {
        let config: CliConfig = toml::from_str(&generate_default_config().unwrap()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_rendered_config_escapes_strings() {
        let config = CliConfig {
            store: StoreConfig::default()
                .with_brand("Médi\u{7}Sync \"Plus\"")
                .with_nav_links(vec![NavLink::new("Tab\there", "/a\\b")]),
            catalog: CatalogConfig {
                path: Some(PathBuf::from("data/catalog.toml")),
            },
        };

        let text = render_config(&config).unwrap();
        assert!(text.starts_with("# MediSync storefront configuration"));
        assert_eq!(toml::from_str::<CliConfig>(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: CliConfig = toml::from_str("[store]\nbrand = \"PharmaPlus\"\n").unwrap();
        assert_eq!(config.store.brand, "PharmaPlus");
        assert_eq!(config.store.currency, "LKR");
        assert_eq!(config.store.nav_links.len(), 4);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medisync.toml");

        let config = CliConfig {
            store: StoreConfig::default()
                .with_currency("USD")
                .with_nav_links(vec![NavLink::new("Home", "/")]),
            catalog: CatalogConfig {
                path: Some(PathBuf::from("catalog.json")),
            },
        };
        config.save(&path).unwrap();

        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medisync.json");

        let config = CliConfig::default();
        config.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.trim_start().starts_with('{'));
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_reports_path() {
        let err = CliConfig::load("/nonexistent/medisync.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/medisync.toml"));
    }
}
