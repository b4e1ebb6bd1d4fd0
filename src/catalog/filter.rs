// src/catalog/filter.rs

use crate::catalog::ListingRecord;

/// One filter pass over a loaded catalog. Pure: fixed inputs give a fixed
/// output, and the output is always a subsequence of the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub location: LocationFilter,
    pub price: PriceBucket,
}

impl FilterCriteria {
    pub fn is_neutral(&self) -> bool {
        self.search.is_empty()
            && self.location == LocationFilter::All
            && self.price == PriceBucket::All
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationFilter {
    #[default]
    All,
    Bucket(String),
}

impl LocationFilter {
    pub fn from_query(value: &str) -> Self {
        match value {
            "" | "all" => LocationFilter::All,
            bucket => LocationFilter::Bucket(bucket.to_string()),
        }
    }

    fn matches(&self, record: &ListingRecord) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Bucket(bucket) => record.location.contains(bucket.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceBucket {
    #[default]
    All,
    Under100k,
    From100kTo200k,
    Over200k,
}

impl PriceBucket {
    pub fn from_query(value: &str) -> Self {
        match value {
            "under-100k" => PriceBucket::Under100k,
            "100k-200k" => PriceBucket::From100kTo200k,
            "over-200k" => PriceBucket::Over200k,
            _ => PriceBucket::All,
        }
    }

    pub fn as_query(&self) -> &'static str {
        match self {
            PriceBucket::All => "all",
            PriceBucket::Under100k => "under-100k",
            PriceBucket::From100kTo200k => "100k-200k",
            PriceBucket::Over200k => "over-200k",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBucket::All => "所有价格",
            PriceBucket::Under100k => "$10万以下",
            PriceBucket::From100kTo200k => "$10万 - $20万",
            PriceBucket::Over200k => "$20万以上",
        }
    }

    pub fn options() -> [PriceBucket; 4] {
        [
            PriceBucket::All,
            PriceBucket::Under100k,
            PriceBucket::From100kTo200k,
            PriceBucket::Over200k,
        ]
    }

    fn matches(&self, record: &ListingRecord) -> bool {
        let value = price_value(&record.price);
        match self {
            PriceBucket::All => true,
            PriceBucket::Under100k => value < 100_000,
            PriceBucket::From100kTo200k => (100_000..=200_000).contains(&value),
            PriceBucket::Over200k => value > 200_000,
        }
    }
}

/// Numeric value of a display price like "$150,000": digits only.
/// A price with no digits comes out as 0 and lands in the under-100k bucket;
/// the policy choice is written down in DESIGN.md.
pub fn price_value(price: &str) -> i64 {
    let digits: String = price.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Location bucket: the part before the first "(", trimmed.
/// "Ontario (Inland Empire)" buckets as "Ontario".
pub fn location_bucket(location: &str) -> &str {
    location
        .split('(')
        .next()
        .unwrap_or(location)
        .trim()
}

/// Distinct location buckets across a batch, sorted, for the dropdown.
pub fn location_options(records: &[&ListingRecord]) -> Vec<String> {
    let mut buckets: Vec<String> = records
        .iter()
        .map(|r| location_bucket(&r.location).to_string())
        .filter(|b| !b.is_empty())
        .collect();
    buckets.sort();
    buckets.dedup();
    buckets
}

fn matches_search(record: &ListingRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.location.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
}

/// Applies all three axes: search OR-matches across title/location/description,
/// and the three axes AND together. Never reorders.
pub fn filter<'a>(
    records: &[&'a ListingRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ListingRecord> {
    records
        .iter()
        .filter(|r| {
            matches_search(r, &criteria.search)
                && criteria.location.matches(r)
                && criteria.price.matches(r)
        })
        .copied()
        .collect()
}
