//! Not-found sections.

use medisync_sdk::medisync_streaming::escape_html;

/// Render the not-found section for an unknown path.
pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<section class="not-found" data-section="not-found">
    <h1>Page not found</h1>
    <p>Nothing lives at <code>{}</code>.</p>
    <a href="/" class="back-link">Back to the store</a>
</section>"#,
        escape_html(path)
    )
}

/// Render the not-found section for an unknown medicine id.
pub fn render_medicine_not_found(id: &str) -> String {
    format!(
        r#"<section class="not-found" data-section="not-found">
    <h1>Medicine not found</h1>
    <p>No medicine with id <code>{}</code> is in the catalog.</p>
    <a href="/" class="back-link">Back to the store</a>
</section>"#,
        escape_html(id)
    )
}
