//! Store and route configuration.

use serde::{Deserialize, Serialize};

/// Branding and page copy for the storefront.
///
/// Missing keys in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Brand label shown in the navigation bar.
    pub brand: String,
    /// Prefix placed before every price, e.g. `LKR`.
    pub currency: String,
    /// Document title.
    pub title: String,
    /// Listing heading.
    pub headline: String,
    /// Text under the listing heading.
    pub tagline: String,
    /// Placeholder of the (inert) search input.
    pub search_placeholder: String,
    /// Navigation links, in display order.
    pub nav_links: Vec<NavLink>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            brand: "MediSync".to_string(),
            currency: "LKR".to_string(),
            title: "MediSync Online Pharmacy".to_string(),
            headline: "Top trending medicines worldwide".to_string(),
            tagline: "Discover the most trending medicines worldwide for an unforgettable experience."
                .to_string(),
            search_placeholder: "Search".to_string(),
            nav_links: default_nav_links(),
        }
    }
}

impl StoreConfig {
    /// Set the brand label.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the currency prefix.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Replace the navigation links.
    pub fn with_nav_links(mut self, links: Vec<NavLink>) -> Self {
        self.nav_links = links;
        self
    }
}

/// A label/target pair in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    /// Create a navigation link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/#"),
        NavLink::new("Store", "/#Store"),
        NavLink::new("About", "/#About"),
        NavLink::new("Contact", "/#Contact"),
    ]
}

/// Configuration for a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route pattern (e.g., "/medicine/:id").
    pub pattern: String,
    /// Handler name the workload dispatches on.
    pub handler: String,
    /// HTTP methods this route accepts.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

impl RouteConfig {
    /// Create a new route configuration.
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
            methods: default_methods(),
        }
    }

    /// Set allowed HTTP methods.
    pub fn with_methods(mut self, methods: Vec<&str>) -> Self {
        self.methods = methods.into_iter().map(String::from).collect();
        self
    }

    /// Check whether `method` is accepted (case-insensitive).
    pub fn allows(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }

    /// Match `path` against the pattern.
    ///
    /// `:name` segments capture one non-empty segment (percent-decoded, `+` kept);
    /// other segments must match exactly. A trailing slash is ignored.
    pub fn match_path(&self, path: &str) -> Option<crate::RouteParams> {
        let pattern: Vec<&str> = split_segments(&self.pattern);
        let actual: Vec<&str> = split_segments(path);

        if pattern.len() != actual.len() {
            return None;
        }

        let mut params = crate::RouteParams::new();
        for (p, a) in pattern.iter().zip(actual.iter()) {
            if let Some(name) = p.strip_prefix(':') {
                params.insert(name.to_string(), crate::decode_path_segment(a));
            } else if p != a {
                return None;
            }
        }

        Some(params)
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.brand, "MediSync");
        assert_eq!(config.currency, "LKR");
        let labels: Vec<&str> = config.nav_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Store", "About", "Contact"]);
        assert_eq!(config.nav_links[1].href, "/#Store");
    }

    #[test]
    fn test_store_partial_toml_uses_defaults() {
        let config: StoreConfig = toml::from_str(r#"currency = "USD""#).unwrap();
        assert_eq!(config.currency, "USD");
        assert_eq!(config.brand, "MediSync");
        assert_eq!(config.nav_links.len(), 4);
    }

    #[test]
    fn test_store_toml_roundtrip() {
        let config = StoreConfig::default()
            .with_brand("PharmaPlus")
            .with_nav_links(vec![NavLink::new("Home", "/")]);
        let text = toml::to_string(&config).unwrap();
        let parsed: StoreConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_route_static_match() {
        let route = RouteConfig::new("/", "listing");
        assert!(route.match_path("/").is_some());
        assert!(route.match_path("").is_some());
        assert!(route.match_path("/medicine").is_none());
    }

    #[test]
    fn test_route_param_match() {
        let route = RouteConfig::new("/medicine/:id", "detail");
        let params = route.match_path("/medicine/1").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("1"));

        let params = route.match_path("/medicine/a%20b/").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("a b"));

        let params = route.match_path("/medicine/a+b").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("a+b"));
        let params = route.match_path("/medicine/a%2Bb").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("a+b"));

        assert!(route.match_path("/medicine").is_none());
        assert!(route.match_path("/medicine/1/extra").is_none());
        assert!(route.match_path("/medicines/1").is_none());
    }

    #[test]
    fn test_route_methods() {
        let route = RouteConfig::new("/", "listing").with_methods(vec!["GET", "HEAD"]);
        assert!(route.allows("get"));
        assert!(route.allows("HEAD"));
        assert!(!route.allows("POST"));
    }

    #[test]
    fn test_route_config_json_default_methods() {
        let route: RouteConfig =
            serde_json::from_str(r#"{"pattern": "/", "handler": "listing"}"#).unwrap();
        assert_eq!(route.methods, vec!["GET"]);
    }
}
