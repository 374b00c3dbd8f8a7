pub mod search_panel;
pub mod search_input_bar;
pub mod filter_menu;
pub mod filter_glyph;
pub mod sort_selector;
pub mod active_filter_chips;
pub mod results_preview;
pub mod panel_events;
