use crate::models::Occupancy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Amenity tag that maps to a listing's food flag instead of its amenity set
pub const FOOD_INCLUDED: &str = "Food Included";

/// Price slider bounds the search page starts from
pub const DEFAULT_MIN_PRICE: i64 = 3000;
pub const DEFAULT_MAX_PRICE: i64 = 25000;

/// Inclusive bound on a listing's minimum monthly price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub low: i64,
    pub high: i64,
}

impl PriceRange {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// A range every non-negative price falls into
    pub fn any() -> Self {
        Self {
            low: 0,
            high: i64::MAX,
        }
    }

    /// An inverted range (`low > high`) contains nothing
    pub fn contains(&self, price: i64) -> bool {
        self.low <= price && price <= self.high
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            low: DEFAULT_MIN_PRICE,
            high: DEFAULT_MAX_PRICE,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortKey {
    /// Accepts canonical keys and the search page labels. "Newest" and
    /// anything unrecognized mean catalog order.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "price_asc" | "price: low to high" => Some(Self::PriceAsc),
            "price_desc" | "price: high to low" => Some(Self::PriceDesc),
            "rating_desc" | "rating" => Some(Self::RatingDesc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::RatingDesc => "rating_desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::RatingDesc => "Rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter and sort parameters for one search invocation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Query {
    pub text: Option<String>,
    /// Raw category tokens; empty means no restriction
    pub categories: BTreeSet<String>,
    pub price_range: PriceRange,
    /// Required amenity tags, all of which must match
    pub amenities: BTreeSet<String>,
    pub sort_key: Option<SortKey>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn price(mut self, low: i64, high: i64) -> Self {
        self.price_range = PriceRange::new(low, high);
        self
    }

    pub fn amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenities.insert(amenity.into());
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort_key = Some(key);
        self
    }

    /// Add the category if absent, remove it otherwise
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        if !self.amenities.remove(amenity) {
            self.amenities.insert(amenity.to_string());
        }
    }

    /// Reset the search text, categories, amenities and price range; the sort
    /// key stays
    pub fn clear_filters(&mut self) {
        self.text = None;
        self.categories.clear();
        self.amenities.clear();
        self.price_range = PriceRange::default();
    }

    /// Badge count shown next to the filter toggle
    pub fn active_filter_count(&self) -> usize {
        let price = usize::from(self.price_range != PriceRange::default());
        self.categories.len() + self.amenities.len() + price
    }

    /// Lower-cased search term, or `None` when blank
    pub(crate) fn normalized_text(&self) -> Option<String> {
        self.text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_lowercase)
    }

    /// Selected categories in canonical form. Unknown tokens are dropped, so a
    /// selection made only of unknown tokens admits nothing.
    pub(crate) fn canonical_categories(&self) -> BTreeSet<Occupancy> {
        self.categories
            .iter()
            .filter_map(|c| Occupancy::parse(c))
            .collect()
    }
}
