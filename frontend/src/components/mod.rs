pub mod error_boundary;
pub mod search_components;
