use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Resident policy of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Occupancy {
    #[serde(rename = "boys", alias = "male")]
    Male,
    #[serde(rename = "girls", alias = "female")]
    Female,
    #[serde(rename = "coed", alias = "co-ed", alias = "mixed")]
    Mixed,
}

impl Occupancy {
    /// Canonicalize a user or data store token. Display synonyms collapse onto
    /// the same category; anything unrecognized is `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "boys" | "male" | "men" | "male-only" => Some(Self::Male),
            "girls" | "female" | "women" | "female-only" => Some(Self::Female),
            "coed" | "co-ed" | "mixed" | "unisex" => Some(Self::Mixed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "boys",
            Self::Female => "girls",
            Self::Mixed => "coed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Boys",
            Self::Female => "Girls",
            Self::Mixed => "Co-ed",
        }
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room category, keyed by how many residents share it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Triple,
    Quad,
}

impl RoomType {
    /// Map a bed count to a room category; four or more beds is a quad
    pub fn from_sharing(sharing: u32) -> Option<Self> {
        match sharing {
            0 => None,
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            _ => Some(Self::Quad),
        }
    }

    pub fn sharing(&self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
            Self::Quad => 4,
        }
    }
}

/// One bookable room option within a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub sharing: u32,
    pub price: i64,
    pub deposit: i64,
    pub available: u32,
    pub ac: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub name: String,
    pub phone: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A point of interest shown on the detail page ("Forum Mall", "500m")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NearbyPlace {
    pub name: String,
    pub distance: String,
}

/// Core paying-guest listing record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub address: String,
    pub locality: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    #[serde(rename = "type")]
    pub occupancy: Occupancy,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub featured: bool,
    pub verified: bool,
    pub min_price: i64,
    pub max_price: i64,
    pub food_included: bool,
    #[serde(default)]
    pub nearby_places: Vec<NearbyPlace>,
}

/// A listing that breaks one of the record invariants
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ListingError {
    #[error("listing {id}: negative price (min {min}, max {max})")]
    NegativePrice { id: String, min: i64, max: i64 },

    #[error("listing {id}: min price {min} exceeds max price {max}")]
    InvertedPrice { id: String, min: i64, max: i64 },

    #[error("listing {id}: rating {rating} outside 0.0..=5.0")]
    RatingOutOfRange { id: String, rating: f64 },

    #[error("listing {id}: duplicate amenity {tag:?}")]
    DuplicateAmenity { id: String, tag: String },

    #[error("listing {id}: slug {slug:?} is not URL-safe")]
    InvalidSlug { id: String, slug: String },
}

impl Listing {
    /// Check the record invariants the search engine relies on
    pub fn validate(&self) -> Result<(), ListingError> {
        if self.min_price < 0 || self.max_price < 0 {
            return Err(ListingError::NegativePrice {
                id: self.id.clone(),
                min: self.min_price,
                max: self.max_price,
            });
        }
        if self.min_price > self.max_price {
            return Err(ListingError::InvertedPrice {
                id: self.id.clone(),
                min: self.min_price,
                max: self.max_price,
            });
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ListingError::RatingOutOfRange {
                id: self.id.clone(),
                rating: self.rating,
            });
        }
        if !is_url_safe_slug(&self.slug) {
            return Err(ListingError::InvalidSlug {
                id: self.id.clone(),
                slug: self.slug.clone(),
            });
        }

        let mut seen = HashSet::new();
        for tag in &self.amenities {
            if !seen.insert(tag.to_lowercase()) {
                return Err(ListingError::DuplicateAmenity {
                    id: self.id.clone(),
                    tag: tag.clone(),
                });
            }
        }

        Ok(())
    }

    /// Total free beds across all room options
    pub fn available_units(&self) -> u32 {
        self.rooms.iter().map(|r| r.available).sum()
    }

    /// Cheapest room option; the first one wins on a price tie
    pub fn cheapest_room(&self) -> Option<&Room> {
        self.rooms
            .iter()
            .reduce(|best, room| if room.price < best.price { room } else { best })
    }

    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }
}

fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Number of listings per city, for the popular-cities strip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CityCount {
    pub name: String,
    pub count: usize,
}
