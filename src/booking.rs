use crate::models::{Listing, RoomType};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("listing {listing} has no room {room}")]
    UnknownRoom { listing: String, room: String },

    #[error("room {room} of listing {listing} has no free beds")]
    SoldOut { listing: String, room: String },
}

/// Price breakdown shown in the detail page's booking card
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub listing_id: String,
    pub room_id: Option<String>,
    pub room_type: Option<RoomType>,
    pub monthly_rent: i64,
    pub deposit: i64,
    pub food_included: bool,
    pub move_in_total: i64,
}

impl BookingQuote {
    /// Quote the named room, or the listing's first room when none is named.
    /// A listing without rooms is quoted at its minimum price with no deposit.
    pub fn for_listing(listing: &Listing, room_id: Option<&str>) -> Result<Self, BookingError> {
        let room = match room_id {
            Some(id) => Some(listing.room(id).ok_or_else(|| BookingError::UnknownRoom {
                listing: listing.id.clone(),
                room: id.to_string(),
            })?),
            None => listing.rooms.first(),
        };

        if let Some(room) = room {
            if room.available == 0 {
                return Err(BookingError::SoldOut {
                    listing: listing.id.clone(),
                    room: room.id.clone(),
                });
            }
        }

        let monthly_rent = room.map_or(listing.min_price, |r| r.price);
        let deposit = room.map_or(0, |r| r.deposit);

        Ok(Self {
            listing_id: listing.id.clone(),
            room_id: room.map(|r| r.id.clone()),
            room_type: room.map(|r| r.room_type),
            monthly_rent,
            deposit,
            food_included: listing.food_included,
            move_in_total: monthly_rent + deposit,
        })
    }
}
