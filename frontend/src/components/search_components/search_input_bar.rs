use dioxus::prelude::*;
use common::search_panel_state::SearchPanelAction;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};

use crate::components::search_components::{panel_events, search_panel::SearchPanelContext};


#[component]
pub fn SearchInputBar(query: String, show_clear_query: bool) -> Element {
    let dispatch = use_context::<SearchPanelContext>().dispatch;
    let search_oninput = move |event: Event<FormData>| {
        dispatch.call(panel_events::query_input(event.value()));
    };
    rsx! {
        div {
            id: "x-search-input-box",
            style: "
                position: relative;
                display: flex;
                align-items: center;
            ",
            Icon { icon: MdSearch, style: "position: absolute; left: 12px; width: 16px; height: 16px; color: #9CA3AF;" }
            input {
                r#type: "text",
                placeholder: "Search groups...",
                style: "
                    width: 100%;
                    padding: 12px 48px 12px 40px;
                    border: 1px solid #E5E7EB;
                    border-radius: 8px;
                    background-color: white;
                    box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
                    font-size: 16px;
                    color: #111827;
                    box-sizing: border-box;
                ",
                class: "x-focus-ring",
                value: "{query}",
                oninput: search_oninput,
            }
            if show_clear_query {
                button {
                    id: "x-search-clear-button",
                    class: "x-hover-gray",
                    style: "
                        position: absolute;
                        right: 12px;
                        padding: 4px;
                        border: none;
                        border-radius: 9999px;
                        background: none;
                        cursor: pointer;
                        display: flex;
                    ",
                    onclick: move |_| {
                        dispatch.call(SearchPanelAction::ClearQuery);
                    },
                    Icon { icon: MdClose, style: "width: 16px; height: 16px; color: #9CA3AF;" }
                }
            }
        }
    }
}
