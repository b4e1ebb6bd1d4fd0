mod filter;
mod loader;
mod models;
mod presenter;

pub use filter::{
    filter, location_bucket, location_options, price_value, FilterCriteria, LocationFilter,
    PriceBucket,
};
pub use loader::{parse_catalog, CatalogError, CatalogSource, Endpoint, FileCatalog, HttpCatalog};
pub use models::{Category, ListingRecord};
pub use presenter::{gallery_images, present, ListingCard};
