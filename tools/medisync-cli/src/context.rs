//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use medisync_sdk::medisync_catalog::{Catalog, CatalogSource, FileSource, StaticSource};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd, config_path, output)
    }

    /// Load context as if run from `cwd`.
    pub fn load_from(cwd: &Path, config_path: Option<&str>, output: Output) -> Result<Self> {
        let found = match config_path {
            Some(path) => Some(resolve(cwd, path)),
            None => find_config(cwd),
        };

        let config = match &found {
            Some(path) => {
                output.debug(&format!("Using config {}", path.display()));
                CliConfig::load(path)?
            }
            None => CliConfig::default(),
        };

        Ok(Self {
            config,
            config_path: found,
            output,
            cwd: cwd.to_path_buf(),
        })
    }

    /// The catalog source selected by the configuration.
    ///
    /// A relative catalog path is taken relative to the config file.
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.config.catalog.path {
            Some(path) => {
                let base = self
                    .config_path
                    .as_deref()
                    .and_then(Path::parent)
                    .unwrap_or(self.cwd.as_path());
                Box::new(FileSource::new(base.join(path)))
            }
            None => Box::new(StaticSource),
        }
    }

    /// Fetch the catalog from the configured source.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let source = self.catalog_source();
        self.output.debug(&format!("Loading catalog from {}", source.name()));
        source
            .fetch()
            .with_context(|| format!("Failed to load catalog from {}", source.name()))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

/// Find a config file in `start` or its parents.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> Output {
        Output::new(false, true)
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_from(dir.path(), None, output()).unwrap();
        assert_eq!(ctx.config, CliConfig::default());
        assert_eq!(ctx.catalog_source().name(), "builtin");
        assert_eq!(ctx.load_catalog().unwrap().len(), 4);
    }

    #[test]
    fn test_config_found_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("medisync.toml"),
            "[store]\nbrand = \"ParentStore\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = Context::load_from(&nested, None, output()).unwrap();
        assert_eq!(ctx.config.store.brand, "ParentStore");
        assert_eq!(ctx.config_path, Some(dir.path().join("medisync.toml")));
    }

    #[test]
    fn test_catalog_path_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("medisync.toml"),
            "[catalog]\npath = \"catalog.json\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("catalog.json"),
            r#"{"categories": ["Vitamins"], "medicines": [
                {"_id": "v1", "name": "Vitamin C", "image": "", "brand": "Acme",
                 "category": "Vitamins", "price": 50}
            ]}"#,
        )
        .unwrap();
        let nested = dir.path().join("sub");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = Context::load_from(&nested, None, output()).unwrap();
        let catalog = ctx.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("v1").map(|m| m.name.as_str()), Some("Vitamin C"));
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Context::load_from(dir.path(), Some("missing.toml"), output()).is_err());
    }
}
