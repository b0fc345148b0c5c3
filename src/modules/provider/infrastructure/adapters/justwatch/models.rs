//! JustWatch GraphQL response models
//!
//! The upstream schema is loose: any field may be missing, `null` or of the
//! wrong type, and list entries may be `null`. Fields that fail to parse become
//! `None`, list entries that fail to parse are dropped, and the mapper decides
//! the fallback.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Parse a field, turning a mismatched or `null` value into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Parse a list, dropping entries that are `null` or fail to parse.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// GraphQL envelope shared by every operation.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(bound(deserialize = "N: DeserializeOwned"))]
pub struct Connection<N> {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub edges: Option<Vec<Edge<N>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(bound(deserialize = "N: DeserializeOwned"))]
pub struct Edge<N> {
    #[serde(default, deserialize_with = "lenient")]
    pub node: Option<N>,
}

impl<N> Connection<N> {
    /// Nodes of the connection, skipping `null` edges and nodes.
    pub fn into_nodes(self) -> impl Iterator<Item = N> {
        self.edges
            .unwrap_or_default()
            .into_iter()
            .filter_map(|edge| edge.node)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Genre {
    #[serde(default, deserialize_with = "lenient")]
    pub translation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoring {
    #[serde(default, deserialize_with = "lenient")]
    pub imdb_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub imdb_votes: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub tmdb_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub tmdb_popularity: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub tomato_meter: Option<f64>,
}

// =============================================================================
// GetSuggestedTitles
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    #[serde(default, deserialize_with = "lenient")]
    pub popular_titles: Option<Connection<SuggestedTitle>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedTitle {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub object_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<SuggestedContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedContent {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub original_release_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub poster_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub full_path: Option<String>,
}

// =============================================================================
// GetUrlTitleDetails
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsData {
    #[serde(default, deserialize_with = "lenient")]
    pub url_v2: Option<UrlResolution>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlResolution {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub node: Option<TitleDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDetails {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub object_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub offers: Option<Vec<Offer>>,
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<DetailsContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(default, deserialize_with = "lenient")]
    pub presentation_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub monetization_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub retail_price: Option<String>,
    #[serde(rename = "standardWebURL")]
    #[serde(default, deserialize_with = "lenient")]
    pub standard_web_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub audio_languages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub subtitle_languages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub package: Option<OfferPackage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferPackage {
    #[serde(default, deserialize_with = "lenient")]
    pub clear_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon_wide: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsContent {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub original_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_released: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub original_release_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub genres: Option<Vec<Genre>>,
    #[serde(default, deserialize_with = "lenient")]
    pub scoring: Option<Scoring>,
    #[serde(default, deserialize_with = "lenient")]
    pub poster_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub backdrops: Option<Vec<Backdrop>>,
    #[serde(default, deserialize_with = "lenient")]
    pub full_path: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub production_countries: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub age_certification: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backdrop {
    #[serde(default, deserialize_with = "lenient")]
    pub backdrop_url: Option<String>,
}

// =============================================================================
// GetSimilarTitles
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimilarData {
    #[serde(default, deserialize_with = "lenient")]
    pub node: Option<SimilarRoot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarRoot {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub similar_titles_v2: Option<Connection<SimilarNode>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarNode {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub object_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<SimilarContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarContent {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub poster_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub full_path: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub genres: Option<Vec<Genre>>,
    #[serde(default, deserialize_with = "lenient")]
    pub scoring: Option<Scoring>,
}
