//! Catalog sources: fetch the internship catalog from a JSON file or an
//! HTTP endpoint.
//!
//! A source is queried exactly once, at startup, to build the
//! [`CatalogSnapshot`] the rest of the service reads. There is no retry or
//! refresh loop here; a failed fetch is a boot failure.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::snapshot::CatalogSnapshot;
use crate::models::internship::InternshipRecord;

/// Timeout for the HTTP catalog fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog is not a valid JSON array of internships: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A provider of internship records. The concrete implementation is chosen
/// from configuration at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<InternshipRecord>, CatalogError>;

    /// Label used in logs and snapshot metadata.
    fn describe(&self) -> String;
}

/// Reads the catalog from a local JSON file.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Vec<InternshipRecord>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Fetches the catalog from an HTTP endpoint serving a JSON array.
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<InternshipRecord>, CatalogError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    fn describe(&self) -> String {
        format!("url:{}", self.url)
    }
}

/// Fetches once from `source` and wraps the records in a timestamped
/// snapshot. Records without an id are kept (scoring never needs one) but
/// logged; the by-id lookup will not resolve them.
pub async fn load_snapshot(source: &dyn CatalogSource) -> Result<CatalogSnapshot, CatalogError> {
    info!("Loading internship catalog from {}", source.describe());

    let records = source.fetch().await?;

    let missing_ids = records.iter().filter(|r| r.id.is_empty()).count();
    if missing_ids > 0 {
        warn!("{missing_ids} catalog records have no id and will not resolve by id");
    }

    info!("Catalog loaded: {} internships", records.len());
    Ok(CatalogSnapshot::new(records, source.describe()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write catalog");
        file
    }

    #[tokio::test]
    async fn test_file_source_loads_records_in_order() {
        let file = write_catalog(
            r#"[
                {"id": "i1", "title": "Backend Intern", "skills": ["rust"], "isPaid": true},
                {"id": "i2", "title": "Data Intern", "location": "Delhi"}
            ]"#,
        );

        let source = FileCatalogSource::new(file.path());
        let records = source.fetch().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "i1");
        assert!(records[0].is_paid);
        assert_eq!(records[1].location, "Delhi");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FileCatalogSource::new("/nonexistent/internships.json");
        match source.fetch().await {
            Err(CatalogError::Io { path, .. }) => {
                assert!(path.contains("internships.json"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let file = write_catalog(r#"{"not": "an array"}"#);
        let source = FileCatalogSource::new(file.path());
        assert!(matches!(source.fetch().await, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_snapshot_labels_the_source() {
        let file = write_catalog(r#"[{"id": "i1"}]"#);
        let source = FileCatalogSource::new(file.path());

        let snapshot = load_snapshot(&source).await.unwrap();

        assert_eq!(snapshot.records.len(), 1);
        assert!(snapshot.source.starts_with("file:"));
    }

    #[tokio::test]
    async fn test_load_snapshot_keeps_records_without_ids() {
        let file = write_catalog(r#"[{"title": "No Id Intern"}, {"id": "i2"}]"#);
        let source = FileCatalogSource::new(file.path());

        let snapshot = load_snapshot(&source).await.unwrap();

        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[0].title, "No Id Intern");
    }

    #[test]
    fn test_describe_labels() {
        assert_eq!(
            FileCatalogSource::new("/data/internships.json").describe(),
            "file:/data/internships.json"
        );
        assert_eq!(
            HttpCatalogSource::new("https://example.com/catalog.json".to_string()).describe(),
            "url:https://example.com/catalog.json"
        );
    }
}
