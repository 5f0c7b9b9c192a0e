use chrono::{DateTime, NaiveDateTime, Utc};
use rss::extension::atom::{AtomExtension, Link};
use rss::{Channel, ChannelBuilder, EnclosureBuilder, GuidBuilder, Item, ItemBuilder};

use crate::error::FeedError;
use crate::source::Article;

pub const SITE_URL: &str = "https://oko.press";
const CHANNEL_TITLE: &str = "OKO.press";
const CHANNEL_DESCRIPTION: &str = "OKO.press to portal informacyjny, który publikuje najnowsze wiadomości z różnych dziedzin: polityki, gospodarki, sportu, kultury, nauki i nauki. Znajdziesz tu także wywiady, analizy, sondaże, podcasty i multimedia.";

/// Format of `publish_at` as sent by the source API.
const SOURCE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// RFC-2822-compatible output format used for pubDate and the
/// last-updated comment, e.g. `01 May 2023 10:00 +0000`.
const FEED_TIME_FORMAT: &str = "%d %b %Y %H:%M %z";

/// The upstream image format is not inspected; every enclosure is
/// reported as JPEG with an unknown (zero) length.
const THUMBNAIL_MIME: &str = "image/jpeg";

/// Map one upstream article to one feed item.
///
/// The guid carries the raw article id and is always flagged as
/// non-permalink, even when the id looks like a URL, so feed readers do
/// not collapse it with the item link.
pub fn article_to_item(article: &Article, thumbnail_prefix: &str) -> Result<Item, FeedError> {
    let published = NaiveDateTime::parse_from_str(&article.publish_at, SOURCE_TIME_FORMAT)
        .map_err(|source| FeedError::TimestampParse {
            id: article.id.clone(),
            value: article.publish_at.clone(),
            source,
        })?
        .and_utc();

    let guid = GuidBuilder::default()
        .value(article.id.clone())
        .permalink(false)
        .build();

    let enclosure = EnclosureBuilder::default()
        .url(format!(
            "{thumbnail_prefix}{}",
            article.featured_image.original_url
        ))
        .length("0".to_string())
        .mime_type(THUMBNAIL_MIME.to_string())
        .build();

    Ok(ItemBuilder::default()
        .title(article.title.clone())
        .link(format!("{SITE_URL}/{}", article.seo_fields.slug))
        .guid(guid)
        .pub_date(published.format(FEED_TIME_FORMAT).to_string())
        .enclosure(enclosure)
        .build())
}

/// Assemble the full channel from the upstream articles, preserving the
/// upstream response order.
pub fn build_channel(articles: &[Article], thumbnail_prefix: &str) -> Result<Channel, FeedError> {
    let items = articles
        .iter()
        .map(|article| article_to_item(article, thumbnail_prefix))
        .collect::<Result<Vec<_>, _>>()?;

    let mut self_link = Link::default();
    self_link.set_rel("self");
    self_link.set_href(SITE_URL);
    let mut atom_ext = AtomExtension::default();
    atom_ext.set_links(vec![self_link]);

    Ok(ChannelBuilder::default()
        .title(CHANNEL_TITLE.to_string())
        .link(SITE_URL.to_string())
        .description(CHANNEL_DESCRIPTION.to_string())
        .atom_ext(Some(atom_ext))
        .items(items)
        .build())
}

/// Serialize the channel to indented XML, prefixed with a comment
/// recording the generation instant.
///
/// `generated_at` is a parameter so that identical input produces
/// byte-identical output under test; callers pass `Utc::now()`.
pub fn render(channel: &Channel, generated_at: DateTime<Utc>) -> Result<String, FeedError> {
    let xml = channel.pretty_write_to(Vec::new(), b' ', 2)?;
    let xml = String::from_utf8(xml)
        .map_err(|err| FeedError::Serialize(rss::Error::Utf8(err.utf8_error())))?;
    let stamp = generated_at.format(FEED_TIME_FORMAT);
    Ok(format!("<!-- Last updated: {stamp} -->\n{xml}"))
}
