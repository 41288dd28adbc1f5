use crate::catalog::traits::CatalogSource;
use crate::models::Listing;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Catalog read from a JSON array of listings on disk
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        debug!("Reading catalog file {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let listings: Vec<Listing> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse listings in {}", self.path.display()))?;

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_listings, Catalog};
    use tempfile::TempDir;

    #[tokio::test]
    async fn reads_listings_written_as_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("listings.json");
        let json = serde_json::to_string_pretty(&sample_listings()).unwrap();
        tokio::fs::write(&path, json).await.unwrap();

        let catalog = Catalog::load(&FileCatalog::new(&path)).await.unwrap();

        let slugs: Vec<&str> = catalog.listings().iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs[0], "sunrise-pg-koramangala");
        assert_eq!(slugs.len(), 6);
        assert_eq!(catalog.listings()[3].rooms, sample_listings()[3].rooms);
        assert_eq!(catalog.source(), "file");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = FileCatalog::new(tmp.path().join("missing.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("listings.json");
        tokio::fs::write(&path, r#"[{"id": "1"}]"#).await.unwrap();
        assert!(FileCatalog::new(&path).fetch().await.is_err());
    }
}
