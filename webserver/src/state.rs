//! Webserver state: the JSON data file behind the collection endpoints

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::fs;
use tokio::sync::RwLock;

use shared::Restaurant;

/// Shared handler state.
///
/// The lock serializes full-replace writes against concurrent reads of the
/// data file; the file itself is the durable state, read fresh on every
/// request.
#[derive(Clone)]
pub struct AppState {
    data_file: Arc<PathBuf>,
    lock: Arc<RwLock<()>>,
}

impl AppState {
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            data_file: Arc::new(data_file),
            lock: Arc::new(RwLock::new(())),
        }
    }

    /// Current collection; an absent data file reads as empty.
    pub async fn read_collection(&self) -> Result<Vec<Restaurant>> {
        let _guard = self.lock.read().await;

        let raw = match fs::read_to_string(self.data_file.as_ref()).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&raw)?)
    }

    /// Replace the stored collection wholesale. Pretty-printed so the data
    /// file stays hand-inspectable.
    pub async fn write_collection(&self, collection: &[Restaurant]) -> Result<()> {
        let _guard = self.lock.write().await;

        let raw = serde_json::to_string_pretty(collection)?;
        fs::write(self.data_file.as_ref(), raw).await?;
        Ok(())
    }
}
