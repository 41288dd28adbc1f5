use crate::catalog::{CatalogSource, FileCatalog, RestCatalog, SampleCatalog};
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub table: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            catalog_path: env::var("PG_FINDER_CATALOG").ok().map(PathBuf::from),
            supabase_url: env::var("SUPABASE_URL").ok(),
            supabase_anon_key: env::var("SUPABASE_ANON_KEY").ok(),
            table: env::var("PG_FINDER_TABLE").unwrap_or_else(|_| "pgs".to_string()),
            timeout_secs: env::var("PG_FINDER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("PG_FINDER_TIMEOUT_SECS must be a valid number")?,
        })
    }

    /// Pick the catalog source: the data store when both URL and key are
    /// set, else the JSON file, else the built-in sample
    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>> {
        if let (Some(url), Some(key)) = (&self.supabase_url, &self.supabase_anon_key) {
            let timeout = Duration::from_secs(self.timeout_secs);
            return Ok(Box::new(RestCatalog::new(url, key, &self.table, timeout)?));
        }
        if let Some(path) = &self.catalog_path {
            return Ok(Box::new(FileCatalog::new(path)));
        }
        Ok(Box::new(SampleCatalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            table: "pgs".to_string(),
            timeout_secs: 30,
            ..Config::default()
        }
    }

    #[test]
    fn falls_back_to_sample() {
        let source = config().catalog_source().unwrap();
        assert_eq!(source.source_name(), "sample");
    }

    #[test]
    fn file_when_path_set() {
        let config = Config {
            catalog_path: Some(PathBuf::from("listings.json")),
            ..config()
        };
        assert_eq!(config.catalog_source().unwrap().source_name(), "file");
    }

    #[test]
    fn rest_needs_url_and_key() {
        let url_only = Config {
            supabase_url: Some("https://example.supabase.co".to_string()),
            catalog_path: Some(PathBuf::from("listings.json")),
            ..config()
        };
        assert_eq!(url_only.catalog_source().unwrap().source_name(), "file");

        let both = Config {
            supabase_anon_key: Some("anon".to_string()),
            ..url_only
        };
        assert_eq!(both.catalog_source().unwrap().source_name(), "rest");
    }
}
