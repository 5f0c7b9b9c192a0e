use serde::Deserialize;

/// Envelope of the upstream article listing: `{"data": {"nodes": [...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceResponse {
    pub data: SourceData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceData {
    pub nodes: Vec<Article>,
}

/// One article as received from the source API. Immutable; discarded
/// after it has been mapped to a feed item.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    /// `YYYY-MM-DDTHH:MM:SS`, no zone marker; the source reports UTC.
    pub publish_at: String,
    pub seo_fields: SeoFields,
    pub featured_image: FeaturedImage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeoFields {
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedImage {
    pub original_url: String,
}
