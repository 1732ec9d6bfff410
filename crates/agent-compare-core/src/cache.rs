use std::path::{Path, PathBuf};

use crate::error::{AcError, Result};

/// File name of the synced dataset inside the cache directory.
pub const CACHED_DATA_FILE: &str = "ai_agents_structured_data.json";

/// Return the cache directory for agent-compare data files.
/// Creates it if it doesn't exist.
pub fn cache_dir() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join("agent-compare");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

/// Return the path to a cached data file, if the cache directory is available.
pub fn cache_path(filename: &str) -> Option<PathBuf> {
    Some(cache_dir()?.join(filename))
}

/// Write `contents` into `dir/filename` via a temp file and rename, so a
/// reader never sees a half-written dataset.
pub fn write_file(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf> {
    let target = dir.join(filename);
    let tmp = dir.join(format!(".{filename}.tmp"));
    std::fs::write(&tmp, contents)
        .map_err(|e| AcError::Io(format!("failed to write {}: {e}", tmp.display())))?;
    std::fs::rename(&tmp, &target)
        .map_err(|e| AcError::Io(format!("failed to move {} into place: {e}", target.display())))?;
    Ok(target)
}
