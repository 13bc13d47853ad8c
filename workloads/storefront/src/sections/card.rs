//! Product card.

use medisync_sdk::medisync_streaming::escape_html;

use crate::view::CardView;

/// Render one card. The whole card is a link to the detail page.
pub fn render_card(card: &CardView) -> String {
    format!(
        r#"<article class="medicine-card" data-medicine-id="{}">
    <a href="{}" class="medicine-link">
        <div class="medicine-image">
            <img src="{}" alt="{}" loading="lazy">
        </div>
        <div class="medicine-info">
            <h3 class="medicine-name">{}</h3>
            <p class="medicine-brand">{}</p>
            <p class="medicine-price">{}</p>
        </div>
    </a>
</article>"#,
        escape_html(&card.id),
        escape_html(&card.href),
        escape_html(&card.image),
        escape_html(&card.name),
        escape_html(&card.name),
        escape_html(&card.brand),
        escape_html(&card.price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use medisync_sdk::medisync_catalog::{Catalog, Medicine, MedicineId};

    #[test]
    fn test_panadol_card() {
        let catalog = Catalog::builtin();
        let card = CardView::from_medicine(catalog.get("1").unwrap(), "LKR");
        let html = render_card(&card);

        assert!(html.contains(r#"<a href="/medicine/1" class="medicine-link">"#));
        assert!(html.contains(r#"<h3 class="medicine-name">Panadol</h3>"#));
        assert!(html.contains(r#"<p class="medicine-price">LKR 160</p>"#));
        assert!(html.contains("headache-pain-pills-medication"));
    }

    #[test]
    fn test_card_escapes_text_and_encodes_id() {
        let medicine = Medicine {
            id: MedicineId::new("a/b"),
            name: "<Cough> & Cold".to_string(),
            image: String::new(),
            brand: "\"Acme\"".to_string(),
            category: "Cold & Flu".to_string(),
            description: String::new(),
            price: 99.5,
        };
        let html = render_card(&CardView::from_medicine(&medicine, "LKR"));

        assert!(html.contains(r#"href="/medicine/a%2Fb""#));
        assert!(html.contains("&lt;Cough&gt; &amp; Cold"));
        assert!(html.contains("&quot;Acme&quot;"));
        assert!(html.contains("LKR 99.5"));
        assert!(!html.contains("<Cough>"));
    }
}
