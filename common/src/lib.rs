//! Framework-free data model for the group search panel.


pub mod filter_catalog;
pub mod sort_option;
pub mod search_panel_state;
pub mod search_panel_view;
