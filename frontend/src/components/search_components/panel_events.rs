//! Turns raw DOM event payloads into panel actions.

use dioxus::logger::tracing;
use common::{filter_catalog::FilterId, search_panel_state::SearchPanelAction, sort_option::SortChoice};


/// Value of the search input after a keystroke.
pub fn query_input(value: String) -> SearchPanelAction {
    SearchPanelAction::SetQuery(value)
}

/// Checkbox change or chip remove for `id`.
pub fn filter_toggled(id: &FilterId) -> SearchPanelAction {
    SearchPanelAction::ToggleFilter(id.clone())
}

/// Value of the sort `<select>`. Values that are not sort options yield nothing.
pub fn sort_changed(value: &str) -> Option<SearchPanelAction> {
    match value.parse::<SortChoice>() {
        Ok(choice) => Some(SearchPanelAction::SetSort(choice)),
        Err(e) => {
            tracing::warn!("ignoring sort selection: {e}");
            None
        }
    }
}
