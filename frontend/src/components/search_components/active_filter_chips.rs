use dioxus::prelude::*;
use common::search_panel_view::FilterChipView;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::components::search_components::{panel_events, search_panel::SearchPanelContext};


#[component]
pub fn ActiveFilterChips(chips: Vec<FilterChipView>) -> Element {
    rsx! {
        div {
            id: "x-active-filter-chips",
            style: "display: flex; flex-wrap: wrap; gap: 8px;",
            for chip in chips {
                FilterChip { key: "{chip.id}", chip: chip.clone() }
            }
        }
    }
}

#[component]
fn FilterChip(chip: FilterChipView) -> Element {
    let dispatch = use_context::<SearchPanelContext>().dispatch;
    let id = chip.id.clone();
    rsx! {
        span {
            class: "x-filter-chip",
            style: "
                display: inline-flex;
                align-items: center;
                gap: 4px;
                padding: 4px 12px;
                border-radius: 9999px;
                background-color: #DBEAFE;
                color: #1D4ED8;
                font-size: 14px;
            ",
            "{chip.label}"
            button {
                class: "x-hover-blue",
                style: "
                    display: flex;
                    padding: 2px;
                    border: none;
                    border-radius: 9999px;
                    background: none;
                    color: inherit;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    dispatch.call(panel_events::filter_toggled(&id));
                },
                Icon { icon: MdClose, style: "width: 12px; height: 12px;" }
            }
        }
    }
}
