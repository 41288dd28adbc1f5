use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply the listing catalog.
/// The search engine only ever sees the loaded listings, so a new backend
/// (another table, a cache dump) just implements this.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every candidate listing
    async fn fetch(&self) -> Result<Vec<Listing>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
