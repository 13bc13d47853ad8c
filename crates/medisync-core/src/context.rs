//! Request context with parsed path and query.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::encoding::decode_component;
use crate::lifecycle::TimingContext;

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID from the clock and a process-wide counter.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);

        Self(format!("{:x}-{:x}", nanos, seq))
    }

    /// Create from an existing ID string (e.g. an incoming header).
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracted route parameters (e.g., `:id` from `/medicine/:id`).
pub type RouteParams = HashMap<String, String>;

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

impl Method {
    /// Upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed request context passed to page handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// Route parameters, filled in once a route matches.
    pub params: RouteParams,
    /// Decoded query string parameters.
    pub query: QueryParams,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a context from a method and a `path?query` string.
    pub fn new(method: Method, path_with_query: impl AsRef<str>) -> Self {
        let (path, query) = split_path_and_query(path_with_query.as_ref());
        Self {
            request_id: RequestId::generate(),
            method,
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            params: RouteParams::new(),
            query: parse_query(query),
            timing: TimingContext::new(),
        }
    }

    /// Get a route parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }
}

/// Split `path?query#fragment` into path and query.
fn split_path_and_query(s: &str) -> (&str, &str) {
    let s = s.split('#').next().unwrap_or_default();
    match s.split_once('?') {
        Some((path, query)) => (path, query),
        None => (s, ""),
    }
}

/// Parse a query string. When a key repeats, the first value wins.
pub fn parse_query(query: &str) -> QueryParams {
    let mut params = QueryParams::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params
            .entry(decode_component(key))
            .or_insert_with(|| decode_component(value));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_context_splits_query() {
        let ctx = RequestContext::new(Method::Get, "/?category=Pain%20Relief");
        assert_eq!(ctx.path, "/");
        assert_eq!(ctx.query_param("category"), Some("Pain Relief"));
    }

    #[test]
    fn test_context_empty_path_is_root() {
        let ctx = RequestContext::new(Method::Get, "?category=all");
        assert_eq!(ctx.path, "/");
        assert_eq!(ctx.query_param("category"), Some("all"));
    }

    #[test]
    fn test_context_ignores_fragment() {
        let ctx = RequestContext::new(Method::Get, "/medicine/1#top");
        assert_eq!(ctx.path, "/medicine/1");
        assert!(ctx.query.is_empty());
    }

    #[test]
    fn test_parse_query_first_value_wins() {
        let q = parse_query("category=Allergy&category=Vitamins&flag");
        assert_eq!(q.get("category").map(String::as_str), Some("Allergy"));
        assert_eq!(q.get("flag").map(String::as_str), Some(""));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Head.to_string(), "HEAD");
        assert_eq!(Method::Options.as_str(), "OPTIONS");
    }
}
