//! Detail section for a single medicine.

use medisync_sdk::medisync_streaming::escape_html;

use crate::view::DetailView;

/// Render the detail section.
pub fn render_detail(view: &DetailView) -> String {
    let description = if view.description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="medicine-description">{}</p>"#,
            escape_html(&view.description)
        )
    };

    format!(
        r#"<section class="medicine-detail" data-section="detail">
    <a href="{}" class="back-link">&larr; Back to all medicines</a>
    <div class="detail-layout">
        <div class="detail-image">
            <img src="{}" alt="{}">
        </div>
        <div class="detail-info">
            <h1>{}</h1>
            <p class="medicine-brand">{}</p>
            <a href="{}" class="category-tag">{}</a>
            {}
            <p class="medicine-price">{}</p>
        </div>
    </div>
</section>"#,
        escape_html(&view.back_href),
        escape_html(&view.image),
        escape_html(&view.name),
        escape_html(&view.name),
        escape_html(&view.brand),
        escape_html(&view.category_href),
        escape_html(&view.category),
        description,
        escape_html(&view.price),
    )
}
