pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{catalog_error_panel, empty_state, filter_bar, listing_card};
pub use layouts::desktop::desktop_layout;
