//! View tree for storefront pages.
//!
//! Views are plain data derived from the catalog, the selection, and the
//! store configuration. The section renderers turn them into HTML.

use medisync_sdk::medisync_catalog::{Medicine, Selection};
use medisync_sdk::medisync_core::{NavLink, StoreConfig};

use crate::routes::{listing_href, medicine_href};
use crate::state::ListingState;

/// Navigation bar: brand, static links, and an inert search input.
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarView {
    pub brand: String,
    pub brand_href: String,
    pub links: Vec<NavLink>,
    pub search_placeholder: String,
}

impl NavbarView {
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            brand: config.brand.clone(),
            brand_href: "/".to_string(),
            links: config.nav_links.clone(),
            search_placeholder: config.search_placeholder.clone(),
        }
    }
}

/// One category selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorButton {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// One product card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub href: String,
    pub image: String,
    pub name: String,
    pub brand: String,
    pub price: String,
}

impl CardView {
    /// Pure projection of a record; the same record always yields the
    /// same card.
    pub fn from_medicine(medicine: &Medicine, currency: &str) -> Self {
        Self {
            id: medicine.id.to_string(),
            href: medicine_href(&medicine.id),
            image: medicine.image.clone(),
            name: medicine.name.clone(),
            brand: medicine.brand.clone(),
            price: medicine.price_display(currency),
        }
    }
}

/// The listing: heading, selector row, and card grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub headline: String,
    pub tagline: String,
    pub selectors: Vec<SelectorButton>,
    pub cards: Vec<CardView>,
}

impl ListingView {
    /// Build from a selection and the records visible under it.
    ///
    /// The first selector is always `All`, followed by one per label.
    pub fn new(
        config: &StoreConfig,
        categories: &[String],
        selection: &Selection,
        visible: &[&Medicine],
    ) -> Self {
        let all = SelectorButton {
            label: "All".to_string(),
            href: listing_href(&Selection::All),
            active: selection.is_all(),
        };

        let selectors = std::iter::once(all)
            .chain(categories.iter().map(|label| {
                let choice = Selection::category(label.clone());
                SelectorButton {
                    label: label.clone(),
                    href: listing_href(&choice),
                    active: &choice == selection,
                }
            }))
            .collect();

        let cards = visible
            .iter()
            .map(|m| CardView::from_medicine(m, &config.currency))
            .collect();

        Self {
            headline: config.headline.clone(),
            tagline: config.tagline.clone(),
            selectors,
            cards,
        }
    }

    /// Build from the current state of a listing.
    pub fn from_state(state: &ListingState<'_>, config: &StoreConfig) -> Self {
        Self::new(
            config,
            state.catalog().categories(),
            state.selection(),
            &state.visible(),
        )
    }

    /// The active selector, if any. An unknown label activates none.
    pub fn active_selector(&self) -> Option<&SelectorButton> {
        self.selectors.iter().find(|s| s.active)
    }
}

/// Detail page for one medicine.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub image: String,
    pub brand: String,
    pub category: String,
    pub category_href: String,
    pub description: String,
    pub price: String,
    pub back_href: String,
}

impl DetailView {
    pub fn from_medicine(medicine: &Medicine, currency: &str) -> Self {
        Self {
            name: medicine.name.clone(),
            image: medicine.image.clone(),
            brand: medicine.brand.clone(),
            category: medicine.category.clone(),
            category_href: listing_href(&Selection::category(medicine.category.clone())),
            description: medicine.description.clone(),
            price: medicine.price_display(currency),
            back_href: listing_href(&Selection::All),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medisync_sdk::medisync_catalog::Catalog;

    fn listing(selection: Selection) -> ListingView {
        let catalog = Catalog::builtin();
        let state = ListingState::with_selection(&catalog, selection);
        ListingView::from_state(&state, &StoreConfig::default())
    }

    fn card_names(view: &ListingView) -> Vec<&str> {
        view.cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_selectors_all_first_then_labels() {
        let view = listing(Selection::All);
        let labels: Vec<&str> = view.selectors.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["All", "Pain Relief", "Allergy", "Digestive", "Cold & Flu", "Vitamins"]
        );
        assert_eq!(view.active_selector().map(|s| s.label.as_str()), Some("All"));
    }

    #[test]
    fn test_pain_relief_scenario() {
        let view = listing(Selection::category("Pain Relief"));
        assert_eq!(card_names(&view), vec!["Panadol", "Ibuprofen", "Paracetamol"]);
        assert_eq!(
            view.active_selector().map(|s| s.label.as_str()),
            Some("Pain Relief")
        );
        assert_eq!(view.selectors.iter().filter(|s| s.active).count(), 1);
    }

    #[test]
    fn test_antibiotic_has_no_active_selector() {
        let view = listing(Selection::category("Antibiotic"));
        assert_eq!(card_names(&view), vec!["Amoxicillin"]);
        assert!(view.active_selector().is_none());
    }

    #[test]
    fn test_allergy_is_empty() {
        let view = listing(Selection::category("Allergy"));
        assert!(view.cards.is_empty());
    }

    #[test]
    fn test_card_projection() {
        let catalog = Catalog::builtin();
        let panadol = catalog.get("1").unwrap();
        let card = CardView::from_medicine(panadol, "LKR");

        assert_eq!(card.href, "/medicine/1");
        assert_eq!(card.name, "Panadol");
        assert_eq!(card.brand, "Panadol");
        assert_eq!(card.price, "LKR 160");
        assert_eq!(card, CardView::from_medicine(panadol, "LKR"));
    }

    #[test]
    fn test_detail_links() {
        let catalog = Catalog::builtin();
        let detail = DetailView::from_medicine(catalog.get("3").unwrap(), "LKR");
        assert_eq!(detail.price, "LKR 180");
        assert_eq!(detail.category_href, "/?category=Pain%20Relief");
        assert_eq!(detail.back_href, "/");
    }

    #[test]
    fn test_navbar_from_config() {
        let nav = NavbarView::from_config(&StoreConfig::default());
        assert_eq!(nav.brand, "MediSync");
        assert_eq!(nav.links.len(), 4);
        assert_eq!(nav.search_placeholder, "Search");
    }
}
