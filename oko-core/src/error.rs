use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file {} is not valid JSON: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("upstream returned {status} for {url}")]
    BadStatus { status: StatusCode, url: String },
    #[error("malformed upstream payload: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("article {id} has an unparseable publish timestamp {value:?}: {source}")]
    TimestampParse {
        id: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("feed serialization failed: {0}")]
    Serialize(#[from] rss::Error),
}
