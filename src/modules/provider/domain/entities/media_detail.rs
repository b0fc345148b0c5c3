use super::streaming_offer::StreamingOffer;
use crate::modules::provider::domain::services::offer_normalizer::{
    NormalizedOffers, OfferNormalizer,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaScores {
    pub imdb_score: Option<f64>,
    pub imdb_votes: Option<f64>,
    pub tmdb_score: Option<f64>,
    pub tmdb_popularity: Option<f64>,
    pub tomato_meter: Option<f64>,
}

/// Detail page data for a single title. `Default` is the "unavailable" value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetail {
    pub id: String,
    pub offers: Vec<StreamingOffer>,
    pub object_type: String,
    pub title: String,
    pub original_title: Option<String>,
    pub is_released: Option<bool>,
    pub original_release_year: Option<i32>,
    pub short_description: String,
    pub genres: Vec<String>,
    pub scores: MediaScores,
    pub poster_url: String,
    pub backdrop_urls: Vec<String>,
    pub full_path: String,
    pub production_countries: Vec<String>,
    pub runtime: Option<u32>,
    pub age_certification: Option<String>,
}

impl MediaDetail {
    /// True for the default value handed out when the upstream call degraded.
    pub fn is_unavailable(&self) -> bool {
        self.id.is_empty() && self.offers.is_empty()
    }

    /// Offers grouped by monetization type for display.
    pub fn grouped_offers(&self) -> NormalizedOffers {
        OfferNormalizer::normalize(&self.offers)
    }
}
