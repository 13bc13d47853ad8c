//! Workload definition, route resolution, and errors.

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::context::{Method, RouteParams};

/// Workload manifest - the routes a deployable unit serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadManifest {
    /// Unique name for this workload.
    pub name: String,
    /// Semantic version.
    pub version: String,
    /// Routes in match order.
    pub routes: Vec<RouteConfig>,
}

/// Outcome of resolving a request against a manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteMatch<'a> {
    /// A route matched the path and accepts the method.
    Found {
        route: &'a RouteConfig,
        params: RouteParams,
    },
    /// Some route matched the path, but none accepts the method.
    MethodNotAllowed,
    /// No route matched the path.
    NotFound,
}

impl WorkloadManifest {
    /// Create a new workload manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
        }
    }

    /// Add a route to this workload.
    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Resolve a request. The first route whose pattern and method both
    /// match wins.
    pub fn resolve(&self, method: Method, path: &str) -> RouteMatch<'_> {
        let mut path_matched = false;

        for route in &self.routes {
            if let Some(params) = route.match_path(path) {
                if route.allows(method.as_str()) {
                    return RouteMatch::Found { route, params };
                }
                path_matched = true;
            }
        }

        if path_matched {
            RouteMatch::MethodNotAllowed
        } else {
            RouteMatch::NotFound
        }
    }
}

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),
}
