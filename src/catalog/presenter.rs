// src/catalog/presenter.rs

use crate::catalog::{Category, ListingRecord};

/// How many highlight chips fit on a card before we collapse to "+N".
const CARD_HIGHLIGHTS: usize = 3;

const ASSET_ROOT: &str = "/assets/images";

/// Card view-model consumed by the grid and featured-strip templates.
/// Pure mapping from a record; no fetch, no mutation.
pub struct ListingCard {
    pub listing_id: String,
    pub category: Category,
    pub category_label: String,
    pub title: String,
    pub price: String,
    pub location: String,
    pub cover_image: String,
    pub detail_href: String,
    pub top_highlights: Vec<String>,
    pub hidden_highlights: usize,
}

pub fn present(record: &ListingRecord) -> ListingCard {
    let category = record.category();

    let cover_image = record
        .images
        .first()
        .filter(|img| !img.is_empty())
        .map(|img| resolve_image(img))
        .unwrap_or_else(|| category.fallback_image().to_string());

    let top_highlights: Vec<String> = record
        .highlights
        .iter()
        .take(CARD_HIGHLIGHTS)
        .cloned()
        .collect();
    let hidden_highlights = record.highlights.len().saturating_sub(CARD_HIGHLIGHTS);

    ListingCard {
        listing_id: record.listing_id.clone(),
        category,
        category_label: record.category.clone(),
        title: record.title.clone(),
        price: record.price.clone(),
        location: record.location.clone(),
        cover_image,
        detail_href: format!("/listing/{}", record.listing_id),
        top_highlights,
        hidden_highlights,
    }
}

/// Full image set for the detail gallery, already resolved against the asset
/// root. The detail template shows the category placeholder when this comes
/// back empty.
pub fn gallery_images(record: &ListingRecord) -> Vec<String> {
    record
        .images
        .iter()
        .filter(|img| !img.is_empty())
        .map(|img| resolve_image(img))
        .collect()
}

fn resolve_image(reference: &str) -> String {
    // Absolute references pass through; bare filenames resolve against the
    // static asset root.
    if reference.starts_with('/') || reference.starts_with("http") {
        reference.to_string()
    } else {
        format!("{ASSET_ROOT}/{reference}")
    }
}
