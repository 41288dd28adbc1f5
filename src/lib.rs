//! Paying-guest listing search: the listing model, the filter/rank engine,
//! catalog sources and booking quotes.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod models;
pub mod search;

pub use booking::{BookingError, BookingQuote};
pub use catalog::{Catalog, CatalogSource};
pub use config::Config;
pub use models::{Listing, Occupancy, Room, RoomType};
pub use search::{search, PriceRange, Query, SortKey};
