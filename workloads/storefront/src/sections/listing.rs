//! Listing section - heading, category selectors, card grid.

use medisync_sdk::medisync_streaming::escape_html;

use super::card::render_card;
use crate::view::{ListingView, SelectorButton};

/// Render the listing section.
///
/// An empty grid is valid output: no cards and no placeholder message.
pub fn render_listing(view: &ListingView) -> String {
    let selectors: String = view.selectors.iter().map(render_selector).collect();
    let cards: String = view.cards.iter().map(render_card).collect();

    format!(
        r#"<section class="listing" id="Store" data-section="listing">
    <div class="listing-heading">
        <h1>{}</h1>
        <p class="tagline">{}</p>
    </div>
    <nav class="category-selector" aria-label="Categories">
        {}
    </nav>
    <div class="medicine-grid" data-count="{}">
        {}
    </div>
</section>"#,
        escape_html(&view.headline),
        escape_html(&view.tagline),
        selectors,
        view.cards.len(),
        cards
    )
}

fn render_selector(button: &SelectorButton) -> String {
    let (class, current) = if button.active {
        ("category-button active", r#" aria-current="true""#)
    } else {
        ("category-button", "")
    };

    format!(
        r#"<a href="{}" class="{}"{}>{}</a>"#,
        escape_html(&button.href),
        class,
        current,
        escape_html(&button.label)
    )
}
