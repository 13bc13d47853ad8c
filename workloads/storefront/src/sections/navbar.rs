//! Navigation bar - brand, static links, search input.

use medisync_sdk::medisync_streaming::escape_html;

use crate::view::NavbarView;

/// Render the navigation bar.
///
/// The search input is inert: it has no form and nothing reads it.
pub fn render_navbar(nav: &NavbarView) -> String {
    let links: String = nav
        .links
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape_html(&link.href),
                escape_html(&link.label)
            )
        })
        .collect();

    format!(
        r#"<header class="site-header">
    <a href="{}" class="logo">{}</a>
    <nav class="header-nav">
        <ul>{}</ul>
    </nav>
    <div class="search-box">
        <input type="search" placeholder="{}" aria-label="{}">
    </div>
</header>"#,
        escape_html(&nav.brand_href),
        escape_html(&nav.brand),
        links,
        escape_html(&nav.search_placeholder),
        escape_html(&nav.search_placeholder),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use medisync_sdk::medisync_core::StoreConfig;

    #[test]
    fn test_navbar_links_in_order() {
        let html = render_navbar(&NavbarView::from_config(&StoreConfig::default()));

        let home = html.find(r##"<a href="/#">Home</a>"##).unwrap();
        let store = html.find(r##"<a href="/#Store">Store</a>"##).unwrap();
        let about = html.find(r##"<a href="/#About">About</a>"##).unwrap();
        let contact = html.find(r##"<a href="/#Contact">Contact</a>"##).unwrap();
        assert!(home < store && store < about && about < contact);

        assert!(html.contains(r#"class="logo">MediSync</a>"#));
        assert!(html.contains(r#"placeholder="Search""#));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_navbar_escapes_brand() {
        let config = StoreConfig::default().with_brand("Meds <&> Co");
        let html = render_navbar(&NavbarView::from_config(&config));
        assert!(html.contains("Meds &lt;&amp;&gt; Co"));
    }
}
