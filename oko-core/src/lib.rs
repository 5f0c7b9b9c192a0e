pub mod config;
pub mod error;
pub mod feed;
pub mod fetch;
pub mod source;

pub use config::Config;
pub use error::FeedError;
pub use feed::{article_to_item, build_channel, render};
pub use fetch::fetch_feed;
pub use source::{Article, SourceResponse};
