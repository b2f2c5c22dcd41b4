//! Single-slot JSON cache file used when the remote store is unreachable

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::error::StoreFailure;
use crate::traits::LocalCache;
use shared::Restaurant;

/// One named file holding the latest JSON-serialized snapshot.
///
/// The slot is overwritten wholesale on each fallback write; there is no
/// partial-write protection or transaction, matching the single-active-
/// client assumption of the whole tool.
pub struct FileLocalCache {
    path: PathBuf,
}

impl FileLocalCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LocalCache for FileLocalCache {
    async fn read(&self) -> Result<Option<Vec<Restaurant>>, StoreFailure> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreFailure::CacheIo(e)),
        };

        let snapshot =
            serde_json::from_str(&raw).map_err(|e| StoreFailure::Decode(e.to_string()))?;
        Ok(Some(snapshot))
    }

    async fn write(&self, snapshot: &[Restaurant]) -> Result<(), StoreFailure> {
        let raw =
            serde_json::to_string(snapshot).map_err(|e| StoreFailure::Decode(e.to_string()))?;
        fs::write(&self.path, raw).await.map_err(StoreFailure::CacheIo)
    }
}
