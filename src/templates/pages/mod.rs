pub mod about;
pub mod contact;
pub mod detail;
pub mod home;
pub mod insights;
pub mod listings;
pub mod not_found;
pub mod stories;

pub use about::about_page;
pub use contact::{contact_page, contact_received_page};
pub use detail::{detail_page, missing_listing_page};
pub use home::home_page;
pub use insights::insights_page;
pub use listings::{listings_page, ListingsVm};
pub use not_found::not_found_page;
pub use stories::stories_page;
