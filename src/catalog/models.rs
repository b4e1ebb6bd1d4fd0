use serde::Deserialize;

// record
//  ├── listing_id        unique within one catalog document
//  ├── category          display label, also drives the fallback image
//  ├── title / price / location
//  ├── highlights []     card shows at most 3
//  ├── description
//  ├── images []         images[0] is the cover when present
//  └── is_success_story

#[derive(Debug, Clone, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "listing_id")]
    pub listing_id: String,

    pub title: String,

    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(rename = "is_success_story", default)]
    pub is_success_story: bool,
}

/// Category derived once from the free-text label. The label strings in the
/// catalog documents are not uniform ("生意转让", "仓库出售", "office-retail"),
/// so membership is decided by known substrings and the fallback asset hangs
/// off the enum instead of being re-matched at every render site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Business,
    Industrial,
    Office,
    Other,
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        if label.contains("生意") || label.contains("business") {
            Category::Business
        } else if label.contains("工业")
            || label.contains("仓库")
            || label.contains("industrial")
            || label.contains("warehouse")
        {
            Category::Industrial
        } else if label.contains("办公") || label.contains("office") {
            Category::Office
        } else {
            Category::Other
        }
    }

    /// Placeholder shown when a listing has no images or its cover fails to
    /// decode in the browser.
    pub fn fallback_image(&self) -> &'static str {
        match self {
            Category::Business => "/images/business-cover.svg",
            Category::Industrial => "/images/industrial-cover.svg",
            Category::Office => "/images/office-cover.svg",
            Category::Other => "/images/home-banner.svg",
        }
    }
}

impl ListingRecord {
    pub fn category(&self) -> Category {
        Category::from_label(&self.category)
    }
}
