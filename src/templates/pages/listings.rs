use crate::catalog::{FilterCriteria, ListingCard};
use crate::templates::{
    catalog_error_panel, desktop_layout, empty_state, filter_bar, listing_card,
};
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub title: &'static str,
    pub intro: &'static str,
    pub path: &'static str,
    pub criteria: &'a FilterCriteria,
    pub locations: &'a [String],
    pub cards: Vec<ListingCard>,
}

/// The canonical category listings page: header, filter bar, then the grid,
/// the empty state, or nothing left after filtering.
pub fn listings_page(vm: &ListingsVm) -> Markup {
    desktop_layout(
        vm.title,
        vm.path,
        html! {
            div class="page-header" {
                h1 { (vm.title) }
                p { (vm.intro) }
            }

            (filter_bar(vm.path, vm.criteria, vm.locations))

            div class="container" {
                @if vm.cards.is_empty() {
                    (empty_state(vm.path))
                } @else {
                    div class="listing-grid" {
                        @for card in &vm.cards {
                            (listing_card(card))
                        }
                    }
                }
            }
        },
    )
}

/// Error state for a category page whose catalog document failed to load.
pub fn listings_error_page(title: &str, path: &str) -> Markup {
    desktop_layout(
        title,
        path,
        html! {
            div class="page-header" {
                h1 { (title) }
            }
            div class="container" {
                (catalog_error_panel(path))
            }
        },
    )
}
