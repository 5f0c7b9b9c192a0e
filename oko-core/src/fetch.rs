use chrono::Utc;
use reqwest::Client;
use tracing::info;

use crate::config::Config;
use crate::error::FeedError;
use crate::feed;
use crate::source::SourceResponse;

/// Fetch the upstream article list once and render it as the feed
/// payload.
///
/// Network failures, non-success statuses, malformed payloads and
/// unparseable timestamps all propagate to the caller; nothing is
/// retried and no stale content is substituted.
pub async fn fetch_feed(client: &Client, config: &Config) -> Result<String, FeedError> {
    info!(url = %config.url, "fetching upstream article list");
    let response = client.get(&config.url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::BadStatus {
            status,
            url: config.url.clone(),
        });
    }

    let body = response.bytes().await?;
    let decoded: SourceResponse = serde_json::from_slice(&body).map_err(FeedError::Decode)?;

    let channel = feed::build_channel(&decoded.data.nodes, &config.thumbnail_compression)?;
    let payload = feed::render(&channel, Utc::now())?;
    info!(items = decoded.data.nodes.len(), "feed generated");
    Ok(payload)
}
