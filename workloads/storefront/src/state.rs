//! Listing state: the current category selection and its subscribers.

use medisync_sdk::medisync_catalog::{Catalog, Medicine, Selection};

/// Callback run after every selection change with the new selection and
/// the records now visible.
pub type SelectionListener<'a> = Box<dyn FnMut(&Selection, &[&'a Medicine]) + 'a>;

/// Owns the selection for one listing.
///
/// `select` assigns the new value and synchronously notifies every
/// subscriber; there is no batching and no async work.
pub struct ListingState<'a> {
    catalog: &'a Catalog,
    selection: Selection,
    listeners: Vec<SelectionListener<'a>>,
}

impl<'a> ListingState<'a> {
    /// Start with everything visible.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_selection(catalog, Selection::All)
    }

    /// Start with a given selection. Nobody is notified.
    pub fn with_selection(catalog: &'a Catalog, selection: Selection) -> Self {
        Self {
            catalog,
            selection,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for selection changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&Selection, &[&'a Medicine]) + 'a) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the selection and notify listeners, even if it is unchanged.
    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;

        let catalog = self.catalog;
        let visible = catalog.filter(&self.selection);
        for listener in &mut self.listeners {
            listener(&self.selection, &visible);
        }
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Records visible under the current selection, in catalog order.
    pub fn visible(&self) -> Vec<&'a Medicine> {
        self.catalog.filter(&self.selection)
    }

    /// The catalog being listed.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn visible_names(state: &ListingState<'_>) -> Vec<String> {
        state.visible().iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn test_starts_with_all() {
        let catalog = Catalog::builtin();
        let state = ListingState::new(&catalog);
        assert!(state.selection().is_all());
        assert_eq!(state.visible().len(), 4);
    }

    #[test]
    fn test_select_then_all_restores_full_order() {
        let catalog = Catalog::builtin();
        let mut state = ListingState::new(&catalog);

        state.select(Selection::category("Antibiotic"));
        assert_eq!(visible_names(&state), vec!["Amoxicillin"]);

        state.select(Selection::All);
        assert_eq!(
            visible_names(&state),
            vec!["Panadol", "Amoxicillin", "Ibuprofen", "Paracetamol"]
        );
    }

    #[test]
    fn test_listeners_notified_on_every_select() {
        let catalog = Catalog::builtin();
        let seen = RefCell::new(Vec::new());
        {
            let mut state = ListingState::new(&catalog);
            state.subscribe(|selection, visible| {
                seen.borrow_mut().push((selection.to_string(), visible.len()));
            });

            state.select(Selection::category("Pain Relief"));
            state.select(Selection::category("Allergy"));
            state.select(Selection::category("Allergy"));
        }

        assert_eq!(
            seen.into_inner(),
            vec![
                ("Pain Relief".to_string(), 3),
                ("Allergy".to_string(), 0),
                ("Allergy".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_with_selection_does_not_notify() {
        let catalog = Catalog::builtin();
        let calls = RefCell::new(0);
        let mut state = ListingState::with_selection(&catalog, Selection::category("Vitamins"));
        state.subscribe(|_, _| *calls.borrow_mut() += 1);

        assert_eq!(state.selection(), &Selection::category("Vitamins"));
        assert!(state.visible().is_empty());
        drop(state);
        assert_eq!(calls.into_inner(), 0);
    }
}
