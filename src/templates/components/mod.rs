pub mod card;
pub mod error;
pub mod filter_bar;

pub use card::listing_card;
pub use error::{catalog_error_panel, empty_state};
pub use filter_bar::filter_bar;
