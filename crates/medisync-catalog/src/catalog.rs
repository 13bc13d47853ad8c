//! The ordered catalog and category filtering.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::medicine::Medicine;
use crate::seed;
use crate::selection::Selection;

/// Read-only collection of medicines and the category labels used to
/// filter them.
///
/// Record order is declaration order and is preserved by every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument")]
pub struct Catalog {
    categories: Vec<String>,
    medicines: Vec<Medicine>,
}

/// Unvalidated on-disk shape of a catalog.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    medicines: Vec<Medicine>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Catalog::new(doc.categories, doc.medicines)
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids or labels, empty ids or
    /// names, and invalid prices.
    ///
    /// Labels must read back as themselves from the `category` query value,
    /// so blank or padded labels and any spelling of `all` are refused.
    ///
    /// Records whose category is not a known label are accepted; see
    /// [`Catalog::uncategorized`].
    pub fn new(categories: Vec<String>, medicines: Vec<Medicine>) -> Result<Self, CatalogError> {
        let mut labels = HashSet::new();
        for label in &categories {
            if label.is_empty() || label.trim() != label || Selection::parse(label).is_all() {
                return Err(CatalogError::ReservedCategory(label.clone()));
            }
            if !labels.insert(label.as_str()) {
                return Err(CatalogError::DuplicateCategory(label.clone()));
            }
        }

        let mut ids = HashSet::new();
        for (index, medicine) in medicines.iter().enumerate() {
            if medicine.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "id" });
            }
            if medicine.name.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "name" });
            }
            if !medicine.price.is_finite() || medicine.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: medicine.id.to_string(),
                    price: medicine.price,
                });
            }
            if !ids.insert(medicine.id.as_str()) {
                return Err(CatalogError::DuplicateId(medicine.id.to_string()));
            }
        }

        Ok(Self {
            categories,
            medicines,
        })
    }

    /// The catalog compiled into the program.
    pub fn builtin() -> Self {
        Self {
            categories: seed::categories(),
            medicines: seed::medicines(),
        }
    }

    /// Parse a JSON catalog document.
    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a TOML catalog document.
    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a catalog file; the format follows the extension (`.json` or `.toml`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// All records in declaration order.
    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    /// Category labels in display order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    /// Check if the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    /// Find a record by id.
    pub fn get(&self, id: &str) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id.as_str() == id)
    }

    /// Find a record by id, failing if it is absent.
    pub fn require(&self, id: &str) -> Result<&Medicine, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::MedicineNotFound(id.to_string()))
    }

    /// Records visible under `selection`, in catalog order.
    pub fn filter(&self, selection: &Selection) -> Vec<&Medicine> {
        self.medicines
            .iter()
            .filter(|m| selection.matches(&m.category))
            .collect()
    }

    /// Number of records visible under `selection`.
    pub fn count(&self, selection: &Selection) -> usize {
        self.medicines
            .iter()
            .filter(|m| selection.matches(&m.category))
            .count()
    }

    /// Check if `label` is one of the category labels.
    pub fn is_known_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    /// Records whose category is not a known label.
    ///
    /// These are only reachable through [`Selection::All`].
    pub fn uncategorized(&self) -> Vec<&Medicine> {
        self.medicines
            .iter()
            .filter(|m| !self.is_known_category(&m.category))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
