use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarScoring {
    pub imdb_votes: Option<f64>,
    pub imdb_score: Option<f64>,
    pub tomato_meter: Option<f64>,
}

/// A recommendation returned for a title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarTitleRecord {
    /// Upstream node id; feed it back into a similar-titles lookup.
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub title: String,
    pub poster_url: Option<String>,
    pub full_path: String,
    pub genres: Vec<String>,
    pub scoring: SimilarScoring,
}
