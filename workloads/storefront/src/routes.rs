//! Routes served by the storefront and the links that point at them.

use medisync_sdk::medisync_catalog::{MedicineId, Selection};
use medisync_sdk::medisync_core::{
    encode_component, RequestContext, RouteConfig, RouteMatch, WorkloadManifest,
};

/// Handler name of the listing route.
pub const LISTING: &str = "listing";
/// Handler name of the per-medicine detail route.
pub const DETAIL: &str = "detail";

/// Query parameter carrying the selection.
pub const CATEGORY_PARAM: &str = "category";

/// Routes of the storefront workload.
pub fn manifest() -> WorkloadManifest {
    WorkloadManifest::new(crate::WORKLOAD, env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new("/", LISTING).with_methods(vec!["GET", "HEAD"]))
        .with_route(RouteConfig::new("/index.html", LISTING).with_methods(vec!["GET", "HEAD"]))
        .with_route(RouteConfig::new("/medicine/:id", DETAIL).with_methods(vec!["GET", "HEAD"]))
}

/// Link that selects `selection` on the listing.
pub fn listing_href(selection: &Selection) -> String {
    match selection {
        Selection::All => "/".to_string(),
        Selection::Category(label) => {
            format!("/?{}={}", CATEGORY_PARAM, encode_component(label))
        }
    }
}

/// Detail link for a medicine, e.g. `/medicine/1`.
pub fn medicine_href(id: &MedicineId) -> String {
    format!("/medicine/{}", encode_component(id.as_str()))
}

/// The page a request asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// Listing filtered by the selection.
    Listing(Selection),
    /// Detail page for the medicine with this id.
    Medicine(MedicineId),
    /// Unknown path.
    NotFound,
    /// Known path, unsupported method.
    MethodNotAllowed,
}

impl Page {
    /// Resolve a request, storing matched route params in `ctx`.
    pub fn resolve(manifest: &WorkloadManifest, ctx: &mut RequestContext) -> Page {
        match manifest.resolve(ctx.method, &ctx.path) {
            RouteMatch::Found { route, params } => {
                ctx.params = params;
                match route.handler.as_str() {
                    DETAIL => match ctx.param("id") {
                        Some(id) => Page::Medicine(MedicineId::new(id)),
                        None => Page::NotFound,
                    },
                    LISTING => Page::Listing(
                        ctx.query_param(CATEGORY_PARAM)
                            .map(Selection::parse)
                            .unwrap_or_default(),
                    ),
                    _ => Page::NotFound,
                }
            }
            RouteMatch::MethodNotAllowed => Page::MethodNotAllowed,
            RouteMatch::NotFound => Page::NotFound,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Listing(_) => LISTING,
            Page::Medicine(_) => DETAIL,
            Page::NotFound => "not-found",
            Page::MethodNotAllowed => "method-not-allowed",
        }
    }
}
