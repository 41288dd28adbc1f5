pub mod file;
pub mod rest;
pub mod sample;
pub mod traits;

pub use file::FileCatalog;
pub use rest::RestCatalog;
pub use sample::{popular_cities, sample_listings, SampleCatalog};
pub use traits::CatalogSource;

use crate::models::{CityCount, Listing};
use crate::search::{self, Query};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};
use tracing::{info, warn};

/// Number of cards in the home page's featured strip
pub const FEATURED_LIMIT: usize = 6;

/// A read-only snapshot of the catalog, taken from one source at one time
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
    source: &'static str,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Fetch from `source`, dropping records that break listing invariants
    /// or reuse an id or slug already seen
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        info!("Loading catalog from {}...", source.source_name());

        let fetched = source
            .fetch()
            .await
            .with_context(|| format!("Failed to load catalog from {}", source.source_name()))?;

        let catalog = Self::from_listings(source.source_name(), fetched);
        info!(
            "Loaded {} listings from {}",
            catalog.listings.len(),
            catalog.source
        );
        Ok(catalog)
    }

    pub fn from_listings(source: &'static str, fetched: Vec<Listing>) -> Self {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        let mut listings = Vec::with_capacity(fetched.len());

        for listing in fetched {
            if let Err(e) = listing.validate() {
                warn!("Skipping invalid listing: {}", e);
                continue;
            }
            if !ids.insert(listing.id.clone()) {
                warn!("Skipping listing with duplicate id {}", listing.id);
                continue;
            }
            if !slugs.insert(listing.slug.clone()) {
                warn!("Skipping listing {} with duplicate slug {}", listing.id, listing.slug);
                continue;
            }
            listings.push(listing);
        }

        Self {
            listings,
            source,
            loaded_at: Utc::now(),
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn search(&self, query: &Query) -> Vec<&Listing> {
        search::search(&self.listings, query)
    }
}

/// Featured listings in catalog order, at most `limit` of them
pub fn featured(catalog: &[Listing], limit: usize) -> Vec<&Listing> {
    catalog.iter().filter(|l| l.featured).take(limit).collect()
}

/// Exact slug lookup for the detail page
pub fn find_by_slug<'a>(catalog: &'a [Listing], slug: &str) -> Option<&'a Listing> {
    catalog.iter().find(|l| l.slug == slug)
}

/// Listings per city, largest first; equal counts order by city name
pub fn city_counts(catalog: &[Listing]) -> Vec<CityCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for listing in catalog {
        *counts.entry(listing.city.as_str()).or_default() += 1;
    }

    let mut cities: Vec<CityCount> = counts
        .into_iter()
        .map(|(name, count)| CityCount {
            name: name.to_string(),
            count,
        })
        .collect();
    cities.sort_by(|a, b| b.count.cmp(&a.count));
    cities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_respects_order_and_limit() {
        let catalog = sample_listings();
        let ids: Vec<&str> = featured(&catalog, FEATURED_LIMIT)
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "5"]);
        assert_eq!(featured(&catalog, 2).len(), 2);
    }

    #[test]
    fn slug_lookup() {
        let catalog = sample_listings();
        assert_eq!(
            find_by_slug(&catalog, "urban-coliving-hsr").map(|l| l.id.as_str()),
            Some("3")
        );
        assert!(find_by_slug(&catalog, "URBAN-COLIVING-HSR").is_none());
    }

    #[test]
    fn city_counts_sort_by_count_then_name() {
        let mut catalog = sample_listings();
        catalog[0].city = "Pune".to_string();
        catalog[1].city = "Mumbai".to_string();
        let counts = city_counts(&catalog);
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.name.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("Bangalore", 4), ("Mumbai", 1), ("Pune", 1)]);
    }

    #[test]
    fn from_listings_drops_invalid_and_duplicates() {
        let mut fetched = sample_listings();
        fetched[1].rating = 7.0;
        let mut dup_id = fetched[2].clone();
        dup_id.slug = "another-slug".to_string();
        let mut dup_slug = fetched[3].clone();
        dup_slug.id = "40".to_string();
        fetched.push(dup_id);
        fetched.push(dup_slug);

        let catalog = Catalog::from_listings("test", fetched);
        let ids: Vec<&str> = catalog.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4", "5", "6"]);
        assert_eq!(catalog.source(), "test");
    }

    #[test]
    fn popular_cities_table() {
        let cities = popular_cities();
        assert_eq!(cities.len(), 6);
        assert_eq!(cities[0], CityCount { name: "Bangalore".to_string(), count: 2500 });
        assert_eq!(cities[5].name, "Chennai");
    }

    #[test]
    fn sample_details_are_complete() {
        let catalog = sample_listings();
        let grace = find_by_slug(&catalog, "grace-ladies-pg-indiranagar").unwrap();
        assert!(grace
            .description
            .ends_with("Located in the vibrant Indiranagar area with great food and shopping options nearby."));
        assert_eq!(grace.rules.len(), 3);

        let images: Vec<usize> = catalog.iter().map(|l| l.images.len()).collect();
        assert_eq!(images, vec![3, 3, 3, 2, 2, 2]);
        assert_eq!(catalog[0].nearby_places[2].name, "Christ University");
    }

    #[tokio::test]
    async fn sample_source_loads_all_listings() {
        let catalog = Catalog::load(&SampleCatalog).await.unwrap();
        assert_eq!(catalog.listings().len(), 6);
        assert_eq!(catalog.search(&Query::new().text("whitefield")).len(), 1);
        assert!(catalog.loaded_at() <= Utc::now());
    }
}
