//! Catalog sources.
//!
//! A source returns an ordered sequence of records with exactly the fields
//! of [`Medicine`](crate::Medicine), plus the category labels.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Something that can produce a catalog.
pub trait CatalogSource {
    /// Short name for logs.
    fn name(&self) -> String;

    /// Produce the catalog.
    fn fetch(&self) -> Result<Catalog, CatalogError>;
}

/// The catalog compiled into the program.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl CatalogSource for StaticSource {
    fn name(&self) -> String {
        "builtin".to_string()
    }

    fn fetch(&self) -> Result<Catalog, CatalogError> {
        Ok(Catalog::builtin())
    }
}

/// A JSON or TOML catalog document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn fetch(&self) -> Result<Catalog, CatalogError> {
        Catalog::load(&self.path)
    }
}
