use dioxus::prelude::*;
use common::sort_option::SortChoice;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdSort};

use crate::components::search_components::{panel_events, search_panel::SearchPanelContext};


#[component]
pub fn SortSelector(sort: SortChoice) -> Element {
    let dispatch = use_context::<SearchPanelContext>().dispatch;
    let sort_onchange = move |event: Event<FormData>| {
        if let Some(action) = panel_events::sort_changed(&event.value()) {
            dispatch.call(action);
        }
    };
    rsx! {
        div {
            style: "position: relative;",
            select {
                id: "x-sort-selector",
                class: "x-focus-ring",
                style: "
                    appearance: none;
                    padding: 8px 32px 8px 16px;
                    border: 1px solid #E5E7EB;
                    border-radius: 8px;
                    background-color: white;
                    font-size: 14px;
                    cursor: pointer;
                ",
                value: "{sort.value()}",
                onchange: sort_onchange,
                for choice in SortChoice::ALL {
                    option {
                        key: "{choice.value()}",
                        value: "{choice.value()}",
                        selected: choice == sort,
                        "{choice.label()}"
                    }
                }
            }
            Icon {
                icon: MdSort,
                style: "
                    position: absolute;
                    right: 8px;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 16px;
                    height: 16px;
                    color: #9CA3AF;
                    pointer-events: none;
                "
            }
        }
    }
}
