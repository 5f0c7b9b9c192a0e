use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::FeedError;

/// Operator-supplied parameters, loaded once at startup and read-only
/// for the rest of the process.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Upstream API endpoint.
    pub url: String,
    /// Prefix prepended to every article image URL.
    pub thumbnail_compression: String,
    /// Process lifetime in seconds.
    pub interval: u64,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| FeedError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| FeedError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.interval)
    }
}
