use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::search_components::search_panel::SearchPanel;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "Search Groups" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            SearchPanel {}
        }
    }
}
