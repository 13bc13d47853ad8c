//! MediSync storefront - medicine listing with category filter.
//!
//! This workload serves:
//! - `/` and `/index.html`: the listing, filtered by `?category=<label>`
//! - `/medicine/:id`: a detail page per medicine
//!
//! Pages stream shell-first: the head and navbar go out before the listing.
//! The HTTP handler is only compiled for `wasm32`; everything else is plain
//! Rust shared with the CLI.

pub mod page;
pub mod routes;
pub mod sections;
pub mod state;
pub mod styles;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod handler;

pub use page::{PageBody, RenderedPage, Section, Storefront};
pub use routes::Page;
pub use state::ListingState;
pub use view::{CardView, DetailView, ListingView, NavbarView, SelectorButton};

/// Workload name used in logs and the manifest.
pub const WORKLOAD: &str = "storefront";
