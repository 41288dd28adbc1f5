//! Listing filter and rank engine.
//!
//! `search` is a pure function over a borrowed catalog: it narrows the
//! candidate set through four independent predicates (text, category, price,
//! amenities) and then applies a stable sort. Constraints that cannot be met
//! narrow the result instead of raising.

pub mod query;

pub use query::{PriceRange, Query, SortKey, FOOD_INCLUDED};

use crate::models::Listing;
use std::cmp::Ordering;
use tracing::debug;

/// Filter and order `catalog` according to `query`.
///
/// The result borrows from the catalog and keeps catalog order unless the
/// query names a sort key; ties keep their catalog order.
pub fn search<'a>(catalog: &'a [Listing], query: &Query) -> Vec<&'a Listing> {
    let text = query.normalized_text();
    let categories = query.canonical_categories();

    let mut result: Vec<&Listing> = catalog
        .iter()
        .filter(|l| text.as_deref().map_or(true, |t| matches_text(l, t)))
        .filter(|l| query.categories.is_empty() || categories.contains(&l.occupancy))
        .filter(|l| query.price_range.contains(l.min_price))
        .filter(|l| {
            query
                .amenities
                .iter()
                .all(|required| has_amenity(l, required))
        })
        .collect();

    if let Some(key) = query.sort_key {
        sort_listings(&mut result, key);
    }

    debug!(
        candidates = catalog.len(),
        results = result.len(),
        sort = ?query.sort_key,
        "search complete"
    );

    result
}

/// Substring match of an already lower-cased term against name, locality
/// and city.
fn matches_text(listing: &Listing, term: &str) -> bool {
    [&listing.name, &listing.locality, &listing.city]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// The food marker is satisfied by the food flag. Otherwise any listing
/// amenity containing the required tag counts, so "AC" also matches
/// "Power Backup".
fn has_amenity(listing: &Listing, required: &str) -> bool {
    if listing.food_included && required.eq_ignore_ascii_case(FOOD_INCLUDED) {
        return true;
    }
    let required = required.to_lowercase();
    listing
        .amenities
        .iter()
        .any(|a| a.to_lowercase().contains(&required))
}

/// Stable in-place sort by the given key. Ratings compare numerically, so
/// `-0.0` and `0.0` tie.
pub fn sort_listings(listings: &mut [&Listing], key: SortKey) {
    match key {
        SortKey::PriceAsc => listings.sort_by_key(|l| l.min_price),
        SortKey::PriceDesc => listings.sort_by(|a, b| b.min_price.cmp(&a.min_price)),
        SortKey::RatingDesc => listings.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_listings;

    fn ids(result: &[&Listing]) -> Vec<String> {
        result.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn default_query_keeps_catalog_order() {
        let catalog = sample_listings();
        let result = search(&catalog, &Query::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        assert!(search(&[], &Query::new().sort(SortKey::PriceAsc)).is_empty());
    }

    #[test]
    fn text_matches_name_case_insensitively() {
        let catalog = sample_listings();
        for term in ["sunrise", "SUNRISE", "rise"] {
            let result = search(&catalog, &Query::new().text(term));
            assert_eq!(ids(&result), vec!["1"], "term {term}");
        }
    }

    #[test]
    fn text_matches_locality_and_city() {
        let catalog = sample_listings();
        assert_eq!(ids(&search(&catalog, &Query::new().text("layout"))), vec!["3", "4"]);
        assert_eq!(search(&catalog, &Query::new().text("bangalore")).len(), 6);
        assert!(search(&catalog, &Query::new().text("mumbai")).is_empty());
    }

    #[test]
    fn blank_text_is_no_filter() {
        let catalog = sample_listings();
        assert_eq!(search(&catalog, &Query::new().text("  ")).len(), 6);
    }

    #[test]
    fn category_synonyms() {
        let catalog = sample_listings();
        let coed = search(&catalog, &Query::new().category("Co-ed"));
        let mixed = search(&catalog, &Query::new().category("mixed"));
        assert_eq!(ids(&coed), vec!["3", "6"]);
        assert_eq!(coed, mixed);

        let both = search(&catalog, &Query::new().category("Boys").category("girls"));
        assert_eq!(ids(&both), vec!["1", "2", "4", "5"]);
    }

    #[test]
    fn unknown_category_filters_everything() {
        let catalog = sample_listings();
        assert!(search(&catalog, &Query::new().category("pets")).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive_on_min_price() {
        let catalog = sample_listings();
        let result = search(&catalog, &Query::new().price(6000, 10000));
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
        // listing 5 starts at 14000 even though it tops out at 20000
        let result = search(&catalog, &Query::new().price(15000, 25000));
        assert!(result.is_empty());
    }

    #[test]
    fn inverted_price_range_is_empty() {
        let catalog = sample_listings();
        assert!(search(&catalog, &Query::new().price(20000, 3000)).is_empty());
    }

    #[test]
    fn amenities_use_and_semantics() {
        let catalog = sample_listings();
        let result = search(&catalog, &Query::new().amenity("WiFi").amenity("Gym"));
        assert_eq!(ids(&result), vec!["2", "5"]);
    }

    #[test]
    fn amenities_match_by_substring() {
        let catalog = sample_listings();
        // "pool" only appears inside "Swimming Pool"
        let result = search(&catalog, &Query::new().amenity("pool"));
        assert_eq!(ids(&result), vec!["5"]);
        // "space" hits "Coworking Space"
        let result = search(&catalog, &Query::new().amenity("SPACE"));
        assert_eq!(ids(&result), vec!["3"]);
    }

    #[test]
    fn food_marker_maps_to_food_flag() {
        let catalog = sample_listings();
        let result = search(&catalog, &Query::new().amenity(FOOD_INCLUDED));
        assert_eq!(ids(&result), vec!["1", "2", "5", "6"]);

        let result = search(&catalog, &Query::new().amenity("food included").amenity("Parking"));
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn sorts_are_stable() {
        let catalog = sample_listings();
        let by_price = search(&catalog, &Query::new().sort(SortKey::PriceAsc));
        assert_eq!(ids(&by_price), vec!["4", "6", "1", "3", "2", "5"]);

        let by_price_desc = search(&catalog, &Query::new().sort(SortKey::PriceDesc));
        assert_eq!(ids(&by_price_desc), vec!["5", "2", "3", "1", "6", "4"]);

        let mut tied = sample_listings();
        tied[0].rating = 4.8;
        let by_rating = search(&tied, &Query::new().sort(SortKey::RatingDesc));
        assert_eq!(ids(&by_rating), vec!["1", "2", "5", "3", "6", "4"]);
    }

    #[test]
    fn signed_zero_ratings_tie() {
        let mut catalog: Vec<Listing> = sample_listings().into_iter().take(2).collect();
        catalog[0].rating = -0.0;
        catalog[1].rating = 0.0;
        assert!(catalog.iter().all(|l| l.validate().is_ok()));

        let by_rating = search(&catalog, &Query::new().sort(SortKey::RatingDesc));
        assert_eq!(ids(&by_rating), vec!["1", "2"]);
    }

    #[test]
    fn girls_by_rating() {
        let catalog = sample_listings();
        let query = Query::new()
            .category("girls")
            .price(0, 20000)
            .sort(SortKey::RatingDesc);
        assert_eq!(ids(&search(&catalog, &query)), vec!["2", "5"]);
    }

    #[test]
    fn search_leaves_inputs_untouched() {
        let catalog = sample_listings();
        let query = Query::new().amenity("WiFi").sort(SortKey::PriceDesc);
        let before = (catalog.clone(), query.clone());
        let _ = search(&catalog, &query);
        assert_eq!((catalog, query), before);
    }
}
