use crate::catalog::{FilterCriteria, LocationFilter, PriceBucket};
use maud::{html, Markup};

/// Search box plus the two bucket dropdowns. Plain GET form: the criteria
/// round-trip through the query string, so every filter state has a URL.
pub fn filter_bar(action: &str, criteria: &FilterCriteria, locations: &[String]) -> Markup {
    html! {
        form class="filter-bar" method="get" action=(action) {
            input
                type="search"
                name="q"
                value=(criteria.search)
                placeholder="搜索生意、区域或关键词...";

            select name="location" {
                option value="all" selected[criteria.location == LocationFilter::All] {
                    "所有区域"
                }
                @for bucket in locations {
                    option
                        value=(bucket)
                        selected[criteria.location == LocationFilter::Bucket(bucket.clone())]
                    {
                        (bucket)
                    }
                }
            }

            select name="price" {
                @for bucket in PriceBucket::options() {
                    option value=(bucket.as_query()) selected[criteria.price == bucket] {
                        (bucket.label())
                    }
                }
            }

            button type="submit" class="btn" { "筛选" }

            @if !criteria.is_neutral() {
                a class="clear-filters" href=(action) { "清除" }
            }
        }
    }
}
