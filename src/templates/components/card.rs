use crate::catalog::ListingCard;
use maud::{html, Markup};

/// One listing card in a grid. The inline onerror swaps in the category
/// placeholder when the cover reference fails to decode in the browser.
pub fn listing_card(card: &ListingCard) -> Markup {
    let fallback = format!(
        "this.onerror=null;this.src='{}'",
        card.category.fallback_image()
    );

    html! {
        a class="listing-card" href=(card.detail_href) {
            div class="card-media" {
                img src=(card.cover_image) alt=(card.title) loading="lazy" onerror=(fallback);
                span class="badge" { (card.category_label) }
            }
            div class="card-body" {
                h3 { (card.title) }
                p class="card-location" { (card.location) }
                @if !card.top_highlights.is_empty() {
                    ul class="highlights" {
                        @for highlight in &card.top_highlights {
                            li { (highlight) }
                        }
                        @if card.hidden_highlights > 0 {
                            li class="more" { "+" (card.hidden_highlights) }
                        }
                    }
                }
            }
            div class="card-footer" {
                span class="price" { (card.price) }
                span class="listing-id" { "ID: " (card.listing_id) }
            }
        }
    }
}
