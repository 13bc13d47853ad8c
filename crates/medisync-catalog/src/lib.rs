//! Medicine catalog for the MediSync storefront.
//!
//! This crate provides:
//! - `Medicine` - A single product record
//! - `Selection` - The active category filter (`all` or one label)
//! - `Catalog` - Ordered records plus category labels, with filtering
//! - `CatalogSource` - Where a catalog comes from (built-in or a local file)

pub mod error;
pub mod ids;

mod catalog;
mod medicine;
mod seed;
mod selection;
mod source;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use ids::MedicineId;
pub use medicine::Medicine;
pub use selection::Selection;
pub use source::{CatalogSource, FileSource, StaticSource};
