//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while building or loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two records share an identifier.
    #[error("Duplicate medicine id: {0}")]
    DuplicateId(String),

    /// A category label is listed twice.
    #[error("Duplicate category label: {0}")]
    DuplicateCategory(String),

    /// A category label would not survive a trip through the `category` query value.
    #[error("Reserved or malformed category label: {0:?}")]
    ReservedCategory(String),

    /// A required text field is empty.
    #[error("Medicine at position {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    /// Price is negative or not a finite number.
    #[error("Invalid price for {id}: {price}")]
    InvalidPrice { id: String, price: f64 },

    /// Lookup by id failed.
    #[error("Medicine not found: {0}")]
    MedicineNotFound(String),

    /// File extension is neither JSON nor TOML.
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// Document could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reading the document failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
