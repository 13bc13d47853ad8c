//! Public SDK for MediSync storefront workloads.
//!
//! Re-exports the platform crates under one dependency:
//!
//! ```ignore
//! use medisync_sdk::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let ctx = RequestContext::new(Method::Get, "/?category=Allergy");
//! let logger = StructuredLogger::new(ctx.request_id.clone());
//! logger.info("Handling request");
//! ```

pub use medisync_catalog;
pub use medisync_core;
pub use medisync_observability;
pub use medisync_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use medisync_catalog::*;
    pub use medisync_core::*;
    pub use medisync_observability::*;
    pub use medisync_streaming::*;
}
