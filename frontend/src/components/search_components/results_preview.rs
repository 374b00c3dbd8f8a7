//! Read-only echo of the current query, filters and sort.

use dioxus::prelude::*;
use common::search_panel_view::ResultsPreviewView;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};


#[component]
pub fn ResultsPreview(preview: ResultsPreviewView) -> Element {
    rsx! {
        div {
            id: "x-search-results-preview",
            style: "
                padding: 16px;
                border-radius: 8px;
                background-color: #F9FAFB;
                font-size: 14px;
                color: #4B5563;
            ",
            div {
                style: "display: flex; align-items: center; gap: 8px; margin-bottom: 8px;",
                Icon { icon: MdSearch, style: "width: 16px; height: 16px;" }
                "Searching for: "
                span {
                    id: "x-preview-query",
                    style: "font-weight: 500; color: #111827;",
                    "\"{preview.query}\""
                }
            }
            if let Some(filters_line) = &preview.filters_line {
                div { id: "x-preview-filters-line", "{filters_line}" }
            }
            div {
                id: "x-preview-sort-line",
                style: "margin-top: 4px;",
                "{preview.sort_line}"
            }
        }
    }
}
