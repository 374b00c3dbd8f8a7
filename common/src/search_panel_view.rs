//! What the panel shows for a given state. Pure derivation, recomputed on every render.

use crate::{
    filter_catalog::{FilterCatalog, FilterGlyph, FilterId},
    search_panel_state::SearchPanelState,
};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterButtonStyle {
    Default,
    Active,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterRowView {
    pub id: FilterId,
    pub label: String,
    pub glyph: FilterGlyph,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterDropdownView {
    pub show_clear_all: bool,
    pub rows: Vec<FilterRowView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterChipView {
    pub id: FilterId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPreviewView {
    pub query: String,
    pub filters_line: Option<String>,
    pub sort_line: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPanelView {
    pub show_clear_query: bool,
    pub filter_button: FilterButtonStyle,
    pub filter_count_badge: Option<usize>,
    pub dropdown: Option<FilterDropdownView>,
    pub chips: Vec<FilterChipView>,
    pub preview: Option<ResultsPreviewView>,
}

impl SearchPanelView {
    pub fn derive(state: &SearchPanelState, catalog: &FilterCatalog) -> Self {
        Self {
            show_clear_query: !state.query.is_empty(),
            filter_button: filter_button_style(state),
            filter_count_badge: filter_count_badge(state),
            dropdown: filter_dropdown(state, catalog),
            chips: active_filter_chips(state, catalog),
            preview: results_preview(state, catalog),
        }
    }
}

pub fn filter_button_style(state: &SearchPanelState) -> FilterButtonStyle {
    if state.filter_menu_open || !state.selected_filters.is_empty() {
        FilterButtonStyle::Active
    } else {
        FilterButtonStyle::Default
    }
}

pub fn filter_count_badge(state: &SearchPanelState) -> Option<usize> {
    (!state.selected_filters.is_empty()).then(|| state.selected_filters.len())
}

pub fn filter_dropdown(state: &SearchPanelState, catalog: &FilterCatalog) -> Option<FilterDropdownView> {
    if !state.filter_menu_open {
        return None;
    }
    let rows = catalog
        .entries()
        .iter()
        .map(|descriptor| FilterRowView {
            id: descriptor.id.clone(),
            label: descriptor.label.clone(),
            glyph: descriptor.glyph,
            checked: state.selected_filters.contains(&descriptor.id),
        })
        .collect();
    Some(FilterDropdownView {
        show_clear_all: !state.selected_filters.is_empty(),
        rows,
    })
}

/// One chip per selected id, in selection order. Ids without a catalog entry are skipped.
pub fn active_filter_chips(state: &SearchPanelState, catalog: &FilterCatalog) -> Vec<FilterChipView> {
    state
        .selected_filters
        .iter()
        .filter_map(|id| {
            catalog.label_of(id).map(|label| FilterChipView {
                id: id.clone(),
                label: label.to_string(),
            })
        })
        .collect()
}

pub fn results_preview(state: &SearchPanelState, catalog: &FilterCatalog) -> Option<ResultsPreviewView> {
    if state.query.is_empty() {
        return None;
    }
    let labels = state
        .selected_filters
        .iter()
        .filter_map(|id| catalog.label_of(id))
        .collect::<Vec<_>>();
    let filters_line = (!labels.is_empty()).then(|| format!("With filters: {}", labels.join(", ")));
    Some(ResultsPreviewView {
        query: state.query.clone(),
        filters_line,
        sort_line: format!("Sorted by: {}", state.sort.label()),
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{search_panel_state::SearchPanelAction::*, sort_option::SortChoice};

    #[test]
    fn empty_state_shows_only_controls() {
        let catalog = FilterCatalog::default();
        let view = SearchPanelView::derive(&SearchPanelState::default(), &catalog);
        assert!(!view.show_clear_query);
        assert_eq!(view.filter_button, FilterButtonStyle::Default);
        assert_eq!(view.filter_count_badge, None);
        assert_eq!(view.dropdown, None);
        assert!(view.chips.is_empty());
        assert_eq!(view.preview, None);
    }

    #[test]
    fn preview_visible_iff_query_non_empty() {
        let catalog = FilterCatalog::default();
        for query in ["", "a", " ", "book club", "\"quoted\"", "émoji 🚀"] {
            let state = SearchPanelState::default().apply(SetQuery(query.to_string()), &catalog);
            let preview = results_preview(&state, &catalog);
            assert_eq!(preview.is_some(), !query.is_empty());
            if let Some(preview) = preview {
                assert_eq!(preview.query, query);
            }
        }
    }

    #[test]
    fn open_menu_alone_activates_button() {
        let catalog = FilterCatalog::default();
        let state = SearchPanelState::default().apply(ToggleFilterMenu, &catalog);
        assert_eq!(filter_button_style(&state), FilterButtonStyle::Active);
        assert_eq!(filter_count_badge(&state), None);

        let dropdown = filter_dropdown(&state, &catalog).unwrap();
        assert!(!dropdown.show_clear_all);
        assert_eq!(dropdown.rows.len(), 3);
        assert!(dropdown.rows.iter().all(|row| !row.checked));
    }

    #[test]
    fn selected_filter_with_closed_menu_keeps_button_active() {
        let catalog = FilterCatalog::default();
        let state = SearchPanelState::default().apply_all(
            [ToggleFilterMenu, ToggleFilter("date".into()), ToggleFilterMenu],
            &catalog,
        );
        assert!(!state.filter_menu_open);
        assert_eq!(filter_button_style(&state), FilterButtonStyle::Active);
        assert_eq!(filter_count_badge(&state), Some(1));
        assert_eq!(filter_dropdown(&state, &catalog), None);
    }

    #[test]
    fn dropdown_rows_follow_catalog_order() {
        let catalog = FilterCatalog::default();
        let state = SearchPanelState::default().apply_all(
            [ToggleFilterMenu, ToggleFilter("members".into())],
            &catalog,
        );
        let dropdown = filter_dropdown(&state, &catalog).unwrap();
        assert!(dropdown.show_clear_all);
        let rows = dropdown.rows.iter().map(|r| (r.label.as_str(), r.checked)).collect::<Vec<_>>();
        assert_eq!(rows, vec![("Location", false), ("Date Created", false), ("Member Count", true)]);
    }

    #[test]
    fn chips_and_filter_line_follow_selection_order() {
        let catalog = FilterCatalog::default();
        let state = SearchPanelState::default().apply_all(
            [
                SetQuery("hiking".to_string()),
                ToggleFilter("members".into()),
                ToggleFilter("location".into()),
            ],
            &catalog,
        );
        let chips = active_filter_chips(&state, &catalog);
        let labels = chips.iter().map(|c| c.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Member Count", "Location"]);
        let preview = results_preview(&state, &catalog).unwrap();
        assert_eq!(preview.filters_line.as_deref(), Some("With filters: Member Count, Location"));
    }

    #[test]
    fn book_club_walkthrough() {
        let catalog = FilterCatalog::default();
        let state = SearchPanelState::default().apply(SetQuery("book club".to_string()), &catalog);
        let view = SearchPanelView::derive(&state, &catalog);
        let preview = view.preview.clone().unwrap();
        assert_eq!(preview.query, "book club");
        assert_eq!(preview.filters_line, None);
        assert_eq!(preview.sort_line, "Sorted by: Relevance");
        assert!(view.show_clear_query);

        let state = state.apply(ToggleFilter("location".into()), &catalog);
        let view = SearchPanelView::derive(&state, &catalog);
        assert_eq!(view.chips, vec![FilterChipView { id: "location".into(), label: "Location".to_string() }]);
        assert_eq!(view.filter_count_badge, Some(1));
        assert_eq!(view.preview.unwrap().filters_line.as_deref(), Some("With filters: Location"));

        let state = state.apply(ToggleFilter("location".into()), &catalog);
        let view = SearchPanelView::derive(&state, &catalog);
        assert!(view.chips.is_empty());
        assert_eq!(view.filter_count_badge, None);
        assert_eq!(view.preview.unwrap().filters_line, None);

        let state = state.apply(SetSort(SortChoice::Members), &catalog);
        let view = SearchPanelView::derive(&state, &catalog);
        assert_eq!(view.preview.unwrap().sort_line, "Sorted by: Most Members");

        let state = state.apply(ClearQuery, &catalog);
        let view = SearchPanelView::derive(&state, &catalog);
        assert_eq!(view.preview, None);
        assert!(!view.show_clear_query);
        assert_eq!(state.sort, SortChoice::Members);
    }
}
