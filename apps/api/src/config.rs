use anyhow::{bail, Context, Result};

/// Where the internship catalog is loaded from at startup.
#[derive(Debug, Clone)]
pub enum CatalogLocation {
    /// Local JSON file (`CATALOG_PATH`).
    File(String),
    /// Remote JSON endpoint (`CATALOG_URL`).
    Url(String),
}

/// Application configuration loaded from environment variables.
/// Fails at startup if the catalog location is missing or ambiguous.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog: CatalogLocation,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let catalog_path = std::env::var("CATALOG_PATH").ok();
        let catalog_url = std::env::var("CATALOG_URL").ok();
        let catalog = match (catalog_path, catalog_url) {
            (Some(path), None) => CatalogLocation::File(path),
            (None, Some(url)) => CatalogLocation::Url(url),
            (Some(_), Some(_)) => bail!("CATALOG_PATH and CATALOG_URL are mutually exclusive"),
            (None, None) => bail!("Either CATALOG_PATH or CATALOG_URL must be set"),
        };

        Ok(Config {
            catalog,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
