//! Root of the group search panel: owns the state and hands out the dispatcher.

use dioxus::{logger::tracing, prelude::*};
use common::{
    filter_catalog::FilterCatalog,
    search_panel_state::{SearchPanelAction, SearchPanelState},
    search_panel_view::SearchPanelView,
};

use crate::components::search_components::{
    active_filter_chips::ActiveFilterChips,
    filter_menu::{FilterDropdown, FilterMenuButton},
    results_preview::ResultsPreview,
    search_input_bar::SearchInputBar,
    sort_selector::SortSelector,
};


#[derive(Clone, Copy)]
pub struct SearchPanelContext {
    pub dispatch: Callback<SearchPanelAction>,
}

#[component]
pub fn SearchPanel(
    #[props(default)] initial_state: SearchPanelState,
    #[props(default)] catalog: FilterCatalog,
) -> Element {
    let mut state = use_signal(|| initial_state.clone().retain_catalog(&catalog));
    let catalog = use_signal(move || catalog);

    let dispatch = use_callback(move |action: SearchPanelAction| {
        tracing::debug!("search panel action: {:?}", action);
        let next = state.peek().clone().apply(action, &catalog.peek());
        state.set(next);
    });
    use_context_provider(|| SearchPanelContext { dispatch });

    let view = use_memo(move || SearchPanelView::derive(&state.read(), &catalog.read()));
    let query = use_memo(move || state.read().query.clone());
    let sort = use_memo(move || state.read().sort);

    let SearchPanelView {
        show_clear_query,
        filter_button,
        filter_count_badge,
        dropdown,
        chips,
        preview,
    } = view();

    rsx! {
        div {
            id: "x-search-panel-root",
            style: "
                width: 100%;
                max-width: 896px;
                margin-left: auto;
                margin-right: auto;
                padding: 24px;
                display: flex;
                flex-direction: column;
                gap: 16px;
                box-sizing: border-box;
            ",

            SearchInputBar { query: query(), show_clear_query }

            div {
                id: "x-search-panel-controls-row",
                style: "
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 12px;
                ",

                div {
                    style: "position: relative;",
                    FilterMenuButton { button_style: filter_button, filter_count_badge }
                    if let Some(dropdown) = dropdown {
                        FilterDropdown { dropdown }
                    }
                }

                SortSelector { sort: sort() }

                if !chips.is_empty() {
                    ActiveFilterChips { chips }
                }
            }

            if let Some(preview) = preview {
                ResultsPreview { preview }
            }
        }
    }
}
