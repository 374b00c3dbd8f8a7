//! State record of the search panel and the reducer that updates it.

use crate::{filter_catalog::{FilterCatalog, FilterId}, sort_option::SortChoice};


/// Selected filter ids. Keeps insertion order for display, never holds duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedFilters(Vec<FilterId>);

impl SelectedFilters {
    pub fn contains(&self, id: &FilterId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterId> {
        self.0.iter()
    }

    /// Removes `id` when present, appends it otherwise.
    fn toggle(&mut self, id: FilterId) {
        if let Some(pos) = self.0.iter().position(|x| x == &id) {
            self.0.remove(pos);
        } else {
            self.0.push(id);
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    /// Drops ids missing from `catalog` and repeated ids, keeping first-seen order.
    fn retain_catalog(&mut self, catalog: &FilterCatalog) {
        let mut kept: Vec<FilterId> = Vec::with_capacity(self.0.len());
        for id in self.0.drain(..) {
            if !catalog.contains(&id) {
                tracing::warn!("dropping selected filter id {id} missing from catalog");
                continue;
            }
            if !kept.contains(&id) {
                kept.push(id);
            }
        }
        self.0 = kept;
    }
}

/// Events the panel reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPanelAction {
    SetQuery(String),
    ClearQuery,
    ToggleFilterMenu,
    ToggleFilter(FilterId),
    ClearAllFilters,
    SetSort(SortChoice),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchPanelState {
    pub query: String,
    pub selected_filters: SelectedFilters,
    pub filter_menu_open: bool,
    pub sort: SortChoice,
}

impl SearchPanelState {
    /// Returns the state after `action`. Every action is accepted; a filter id
    /// missing from `catalog` leaves the state untouched.
    pub fn apply(mut self, action: SearchPanelAction, catalog: &FilterCatalog) -> Self {
        match action {
            SearchPanelAction::SetQuery(query) => {
                self.query = query;
            }
            SearchPanelAction::ClearQuery => {
                self.query.clear();
            }
            SearchPanelAction::ToggleFilterMenu => {
                self.filter_menu_open = !self.filter_menu_open;
            }
            SearchPanelAction::ToggleFilter(id) => {
                if !catalog.contains(&id) {
                    tracing::warn!("ignoring toggle of unknown filter id {id}");
                    return self;
                }
                self.selected_filters.toggle(id);
            }
            SearchPanelAction::ClearAllFilters => {
                self.selected_filters.clear();
            }
            SearchPanelAction::SetSort(sort) => {
                self.sort = sort;
            }
        }
        self
    }

    /// Restricts the selection to ids `catalog` knows, so every selected id has a
    /// chip and can be toggled off again.
    pub fn retain_catalog(mut self, catalog: &FilterCatalog) -> Self {
        self.selected_filters.retain_catalog(catalog);
        self
    }

    /// Applies a sequence of actions in order.
    pub fn apply_all(self, actions: impl IntoIterator<Item = SearchPanelAction>, catalog: &FilterCatalog) -> Self {
        actions.into_iter().fold(self, |state, action| state.apply(action, catalog))
    }
}
