use crate::catalog::traits::CatalogSource;
use crate::models::{Coordinates, Listing, Occupancy, Room, RoomType};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Rows requested per page from the table endpoint
const PAGE_SIZE: usize = 500;

const SELECT: &str = "*,room_types(*),cities(name),localities(name)";

/// Catalog read from the hosted data store's REST table endpoint
/// (`{base_url}/rest/v1/{table}`), one page at a time
pub struct RestCatalog {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl RestCatalog {
    pub fn new(base_url: &str, api_key: &str, table: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
        })
    }

    async fn fetch_page(&self, offset: usize) -> Result<Vec<PgRow>> {
        let url = format!("{}/rest/v1/{}", self.base_url, self.table);
        debug!("Fetching {} (offset {})", url, offset);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[
                ("select", SELECT.to_string()),
                ("is_active", "eq.true".to_string()),
                ("order", "created_at.asc,id.asc".to_string()),
                ("limit", PAGE_SIZE.to_string()),
                ("offset", offset.to_string()),
            ])
            .send()
            .await
            .context("Failed to send catalog request")?;

        if !response.status().is_success() {
            warn!("Data store returned status: {}", response.status());
            anyhow::bail!("Failed to fetch {}: {}", self.table, response.status());
        }

        response
            .json::<Vec<PgRow>>()
            .await
            .context("Failed to decode catalog rows")
    }
}

#[async_trait]
impl CatalogSource for RestCatalog {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        let mut listings = Vec::new();
        let mut offset = 0;

        loop {
            let rows = self.fetch_page(offset).await?;
            let page_len = rows.len();
            listings.extend(rows.into_iter().filter_map(|row| {
                let id = row.id.clone();
                let listing = row.into_listing();
                if listing.is_none() {
                    warn!("Skipping row {} with unknown pg_type", id);
                }
                listing
            }));

            if page_len < PAGE_SIZE {
                break;
            }
            offset += page_len;
        }

        info!("Fetched {} listings from {}", listings.len(), self.table);
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "rest"
    }
}

#[derive(Debug, Deserialize)]
struct NameRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RoomTypeRow {
    id: String,
    occupancy: u32,
    rent_per_bed: i64,
    security_deposit: i64,
    available_beds: i64,
    is_ac: Option<bool>,
}

/// One row of the `pgs` table with its embedded relations
#[derive(Debug, Deserialize)]
struct PgRow {
    id: String,
    name: String,
    address: String,
    pg_type: String,
    #[serde(default)]
    amenities: Option<Vec<String>>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    house_rules: Option<Vec<String>>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    food_included: Option<bool>,
    #[serde(default)]
    is_verified: Option<bool>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    min_price: Option<i64>,
    #[serde(default)]
    max_price: Option<i64>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    total_reviews: Option<i64>,
    #[serde(default)]
    room_types: Vec<RoomTypeRow>,
    #[serde(default)]
    cities: Option<NameRef>,
    #[serde(default)]
    localities: Option<NameRef>,
}

impl PgRow {
    /// Map a table row onto a listing. Missing prices fall back to the room
    /// rents; the table has no slug column, so one is derived.
    fn into_listing(self) -> Option<Listing> {
        let occupancy = Occupancy::parse(&self.pg_type)?;

        let rooms: Vec<Room> = self
            .room_types
            .into_iter()
            .filter_map(|r| {
                Some(Room {
                    room_type: RoomType::from_sharing(r.occupancy)?,
                    id: r.id,
                    sharing: r.occupancy,
                    price: r.rent_per_bed,
                    deposit: r.security_deposit,
                    available: u32::try_from(r.available_beds).unwrap_or(0),
                    ac: r.is_ac.unwrap_or(false),
                })
            })
            .collect();

        let room_min = rooms.iter().map(|r| r.price).min().unwrap_or(0);
        let room_max = rooms.iter().map(|r| r.price).max().unwrap_or(0);

        let city = self.cities.map(|c| c.name).unwrap_or_default();
        let locality = self.localities.map(|l| l.name).unwrap_or_default();
        let slug = slugify(&format!("{} {}", self.name, locality));

        let coordinates = match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        };

        Some(Listing {
            id: self.id,
            name: self.name,
            slug,
            address: self.address,
            locality,
            city,
            landmark: None,
            occupancy,
            rating: self.rating.unwrap_or(0.0),
            review_count: self
                .total_reviews
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            images: self.images.unwrap_or_default(),
            amenities: self.amenities.unwrap_or_default(),
            rooms,
            description: self.description.unwrap_or_default(),
            rules: self.house_rules.unwrap_or_default(),
            owner: None,
            coordinates,
            featured: false,
            verified: self.is_verified.unwrap_or(false),
            min_price: self.min_price.unwrap_or(room_min),
            max_price: self.max_price.unwrap_or(room_max),
            food_included: self.food_included.unwrap_or(false),
            nearby_places: Vec::new(),
        })
    }
}

/// Lower-case, ASCII alphanumerics joined by single dashes
fn slugify(raw: &str) -> String {
    raw.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
