use std::path::PathBuf;

use crate::cache;
use crate::dataset::Dataset;
use crate::error::{AcError, Result};
use crate::loader;

#[derive(Debug)]
pub struct SyncResult {
    pub platform_count: usize,
    pub path: PathBuf,
}

/// Download the data file from `url`, validate it, and write it to the cache
/// directory where [`crate::loader::load_default`] picks it up.
pub async fn sync_data(url: &str) -> Result<SyncResult> {
    let resp = loader::http_client()?.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(AcError::Api {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }
    let text = resp.text().await?;

    // Validate by parsing before writing.
    let ds = Dataset::from_json_str(&text)?;
    let cache_dir =
        cache::cache_dir().ok_or_else(|| AcError::Io("cannot determine cache directory".into()))?;
    let path = cache::write_file(&cache_dir, cache::CACHED_DATA_FILE, &text)?;
    tracing::debug!(path = %path.display(), platforms = ds.len(), "dataset synced");

    Ok(SyncResult {
        platform_count: ds.len(),
        path,
    })
}
