//! Core abstractions shared by MediSync workloads and tools.
//!
//! This crate provides:
//! - `StoreConfig` - Branding, currency, and navigation links
//! - `WorkloadManifest` / `RouteConfig` - Declared routes and matching
//! - `RequestContext` - Parsed path, query, and request id
//! - `TimingContext` / `LifecyclePhase` - Request lifecycle tracking
//! - `encode_component` / `decode_component` / `decode_path_segment` - URL component encoding

mod config;
mod context;
mod encoding;
mod lifecycle;
mod workload;

pub use config::*;
pub use context::*;
pub use encoding::*;
pub use lifecycle::*;
pub use workload::*;
