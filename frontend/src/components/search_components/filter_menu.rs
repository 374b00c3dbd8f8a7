//! Filter toggle button and its checkbox dropdown.

use dioxus::prelude::*;
use common::{
    search_panel_state::SearchPanelAction,
    search_panel_view::{FilterButtonStyle, FilterDropdownView, FilterRowView},
};
use dioxus_free_icons::{Icon, icons::md_content_icons::MdFilterList};

use crate::components::search_components::{filter_glyph::FilterGlyphIcon, panel_events, search_panel::SearchPanelContext};


#[component]
pub fn FilterMenuButton(button_style: FilterButtonStyle, filter_count_badge: Option<usize>) -> Element {
    let dispatch = use_context::<SearchPanelContext>().dispatch;
    let (background, border, color, class) = match button_style {
        FilterButtonStyle::Active => ("#EFF6FF", "#BFDBFE", "#1D4ED8", "x-filter-button-active"),
        FilterButtonStyle::Default => ("white", "#E5E7EB", "#111827", "x-filter-button-default x-hover-gray"),
    };

    rsx! {
        button {
            id: "x-filter-menu-button",
            class: "{class}",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 8px 16px;
                border: 1px solid {border};
                border-radius: 8px;
                background-color: {background};
                color: {color};
                font-size: 14px;
                cursor: pointer;
            ",
            onclick: move |_| {
                dispatch.call(SearchPanelAction::ToggleFilterMenu);
            },
            Icon { icon: MdFilterList, style: "width: 16px; height: 16px;" }
            "Filters"
            if let Some(count) = filter_count_badge {
                span {
                    id: "x-filter-count-badge",
                    style: "
                        margin-left: 4px;
                        padding: 4px 8px;
                        border-radius: 9999px;
                        background-color: #DBEAFE;
                        color: #1D4ED8;
                        font-size: 12px;
                    ",
                    "{count}"
                }
            }
        }
    }
}

#[component]
pub fn FilterDropdown(dropdown: FilterDropdownView) -> Element {
    let dispatch = use_context::<SearchPanelContext>().dispatch;
    rsx! {
        div {
            id: "x-filter-dropdown",
            style: "
                position: absolute;
                top: 100%;
                left: 0px;
                margin-top: 8px;
                width: 256px;
                padding: 16px;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                background-color: white;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                z-index: 10;
                box-sizing: border-box;
            ",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 12px;
                ",
                h3 {
                    style: "margin: 0px; font-size: 16px; font-weight: 500; color: #111827;",
                    "Filters"
                }
                if dropdown.show_clear_all {
                    button {
                        id: "x-filter-clear-all",
                        style: "
                            border: none;
                            background: none;
                            font-size: 14px;
                            color: #2563EB;
                            cursor: pointer;
                        ",
                        onclick: move |_| {
                            dispatch.call(SearchPanelAction::ClearAllFilters);
                        },
                        "Clear all"
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                for row in dropdown.rows {
                    FilterCheckboxRow { key: "{row.id}", row: row.clone() }
                }
            }
        }
    }
}

#[component]
fn FilterCheckboxRow(row: FilterRowView) -> Element {
    let dispatch = use_context::<SearchPanelContext>().dispatch;
    let id = row.id.clone();
    rsx! {
        label {
            class: "x-filter-row x-hover-gray",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                padding: 8px;
                border-radius: 4px;
                cursor: pointer;
            ",
            input {
                r#type: "checkbox",
                value: "{row.id}",
                checked: row.checked,
                onchange: move |_| {
                    dispatch.call(panel_events::filter_toggled(&id));
                },
            }
            FilterGlyphIcon { glyph: row.glyph, style: "width: 16px; height: 16px; color: #9CA3AF;".to_string() }
            span {
                style: "font-size: 14px; color: #374151;",
                "{row.label}"
            }
        }
    }
}
