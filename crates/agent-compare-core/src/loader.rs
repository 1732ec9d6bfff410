use std::path::Path;
use std::sync::Arc;

use reqwest::Client;
use tokio::sync::OnceCell;

use crate::cache;
use crate::config::DataSource;
use crate::dataset::{self, Dataset};
use crate::error::{AcError, Result};

/// Loads the dataset once per process and hands out shared references.
///
/// Every page view goes through the same `Loader`, so the data file is
/// fetched or read at most once no matter how many views render.
pub struct Loader {
    source: DataSource,
    http: Client,
    cell: OnceCell<Arc<Dataset>>,
}

impl Loader {
    pub fn new(source: DataSource) -> Result<Self> {
        let http = http_client()?;
        Ok(Self {
            source,
            http,
            cell: OnceCell::new(),
        })
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// The dataset, loading it on first call.
    pub async fn dataset(&self) -> Result<Arc<Dataset>> {
        self.cell
            .get_or_try_init(|| async {
                tracing::debug!(source = %self.source, "loading dataset");
                let loaded = match &self.source {
                    DataSource::File(path) => load_file(path),
                    DataSource::Url(url) => fetch_url(&self.http, url).await,
                    DataSource::Default => load_default(),
                };
                match loaded {
                    Ok(ds) => Ok(Arc::new(ds)),
                    Err(e) => {
                        tracing::error!(source = %self.source, error = %e, "failed to load data");
                        Err(e)
                    }
                }
            })
            .await
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

/// HTTP client shared by the loader and `sync`: 15 s timeout, no retry.
pub fn http_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .build()?)
}

pub fn load_file(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AcError::Io(format!("failed to read {}: {e}", path.display())))?;
    Dataset::from_json_str(&text)
}

/// Download and validate the data file.
pub async fn fetch_url(http: &Client, url: &str) -> Result<Dataset> {
    let resp = http.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(AcError::Api {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    let text = resp.text().await?;
    Dataset::from_json_str(&text)
}

/// Synced copy from the cache directory if it parses, otherwise the copy
/// bundled into the binary.
pub fn load_default() -> Result<Dataset> {
    if let Some(path) = cache::cache_path(cache::CACHED_DATA_FILE) {
        if path.exists() {
            match load_file(&path) {
                Ok(ds) => {
                    tracing::debug!(path = %path.display(), "using synced dataset");
                    return Ok(ds);
                }
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable synced dataset"),
            }
        }
    }
    dataset::load_bundled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_once_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, r#"{"platforms": {"a": {"name": "A"}}}"#).unwrap();

        let loader = Loader::new(DataSource::File(path.clone())).unwrap();
        assert!(!loader.is_loaded());
        let first = loader.dataset().await.unwrap();
        assert_eq!(first.len(), 1);

        // Later changes on disk are not seen: the first load is kept.
        std::fs::write(&path, r#"{"platforms": {}}"#).unwrap();
        let second = loader.dataset().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let loader = Loader::new(DataSource::File("/nonexistent/agents.json".into())).unwrap();
        let err = loader.dataset().await.unwrap_err();
        assert!(matches!(err, AcError::Io(_)));
        assert!(!loader.is_loaded());
    }

    #[test]
    fn default_source_always_loads() {
        let ds = load_default().expect("bundled fallback should load");
        assert!(!ds.is_empty());
    }
}
