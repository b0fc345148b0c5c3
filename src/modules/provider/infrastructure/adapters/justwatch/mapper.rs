use super::models::*;
use crate::modules::provider::domain::{
    entities::{
        MediaDetail, MediaScores, SearchRecord, SimilarScoring, SimilarTitleRecord, StreamingOffer,
    },
    services::OfferNormalizer,
    value_objects::{OfferType, ResolutionTier},
};

pub const POSTER_PROFILE: &str = "s332";
pub const ICON_PROFILE: &str = "s160";
pub const BACKDROP_PROFILE: &str = "s1920";
pub const IMAGE_FORMAT: &str = "webp";

/// JustWatch specific mapper implementation
#[derive(Debug, Clone)]
pub struct JustWatchMapper {
    image_cdn: String,
}

impl JustWatchMapper {
    pub fn new(image_cdn: &str) -> Self {
        Self {
            image_cdn: image_cdn.trim_end_matches('/').to_string(),
        }
    }

    /// Fill the `{profile}` and `{format}` placeholders and prefix the CDN host.
    pub fn image_url(&self, template: &str, profile: &str) -> String {
        format!(
            "{}{}",
            self.image_cdn,
            template
                .replace("{profile}", profile)
                .replace("{format}", IMAGE_FORMAT)
        )
    }

    fn optional_image(&self, template: Option<&str>, profile: &str) -> Option<String> {
        template
            .filter(|t| !t.is_empty())
            .map(|t| self.image_url(t, profile))
    }

    fn genre_names(genres: Option<Vec<Genre>>) -> Vec<String> {
        genres
            .unwrap_or_default()
            .into_iter()
            .map(|g| g.translation.unwrap_or_default())
            .collect()
    }

    /// Suggestions that cannot be navigated to (no path) are dropped.
    pub fn map_search(&self, data: SearchData) -> Vec<SearchRecord> {
        data.popular_titles
            .map(Connection::into_nodes)
            .into_iter()
            .flatten()
            .filter_map(|node| node.content)
            .map(|content| SearchRecord {
                poster_url: self
                    .optional_image(content.poster_url.as_deref(), POSTER_PROFILE)
                    .unwrap_or_default(),
                title: content.title.filter(|t| !t.is_empty()),
                original_release_year: content.original_release_year,
                full_path: content.full_path,
            })
            .filter(SearchRecord::is_navigable)
            .collect()
    }

    pub fn map_offer(&self, offer: Offer) -> StreamingOffer {
        let package = offer.package.unwrap_or_default();

        StreamingOffer {
            resolution: ResolutionTier::from_upstream(
                offer.presentation_type.as_deref().unwrap_or_default(),
            ),
            monetization_type: OfferType::from_upstream(
                offer.monetization_type.as_deref().unwrap_or_default(),
            ),
            price: offer.retail_price.unwrap_or_default(),
            provider_name: package.clear_name.unwrap_or_default(),
            link: offer.standard_web_url.unwrap_or_default(),
            audio_languages: offer.audio_languages.unwrap_or_default().into_iter().collect(),
            subtitle_languages: offer
                .subtitle_languages
                .unwrap_or_default()
                .into_iter()
                .collect(),
            icon_url: self
                .optional_image(package.icon_wide.as_deref(), ICON_PROFILE)
                .unwrap_or_default(),
        }
    }

    /// A missing node maps to `MediaDetail::default()`.
    pub fn map_details(&self, data: DetailsData) -> MediaDetail {
        let Some(node) = data.url_v2.and_then(|url| url.node) else {
            return MediaDetail::default();
        };

        let offers = OfferNormalizer::dedup_by_link(
            node.offers
                .unwrap_or_default()
                .into_iter()
                .map(|offer| self.map_offer(offer))
                .collect(),
        );
        let content = node.content.unwrap_or_default();
        let scoring = content.scoring.unwrap_or_default();

        MediaDetail {
            id: node.id.unwrap_or_default(),
            offers,
            object_type: node.object_type.unwrap_or_default(),
            title: content.title.unwrap_or_default(),
            original_title: content.original_title,
            is_released: content.is_released,
            original_release_year: content.original_release_year,
            short_description: content.short_description.unwrap_or_default(),
            genres: Self::genre_names(content.genres),
            scores: MediaScores {
                imdb_score: scoring.imdb_score,
                imdb_votes: scoring.imdb_votes,
                tmdb_score: scoring.tmdb_score,
                tmdb_popularity: scoring.tmdb_popularity,
                tomato_meter: scoring.tomato_meter,
            },
            poster_url: self
                .optional_image(content.poster_url.as_deref(), POSTER_PROFILE)
                .unwrap_or_default(),
            backdrop_urls: content
                .backdrops
                .unwrap_or_default()
                .into_iter()
                .filter_map(|b| self.optional_image(b.backdrop_url.as_deref(), BACKDROP_PROFILE))
                .collect(),
            full_path: content.full_path.unwrap_or_default(),
            production_countries: content.production_countries.unwrap_or_default(),
            runtime: content.runtime,
            age_certification: content.age_certification,
        }
    }

    pub fn map_similar(&self, data: SimilarData) -> Vec<SimilarTitleRecord> {
        data.node
            .and_then(|root| root.similar_titles_v2)
            .map(Connection::into_nodes)
            .into_iter()
            .flatten()
            .map(|node| {
                let content = node.content.unwrap_or_default();
                let scoring = content.scoring.unwrap_or_default();

                SimilarTitleRecord {
                    id: node.id.unwrap_or_default(),
                    object_type: node.object_type.unwrap_or_default(),
                    title: content.title.unwrap_or_default(),
                    poster_url: self.optional_image(content.poster_url.as_deref(), POSTER_PROFILE),
                    full_path: content.full_path.unwrap_or_default(),
                    genres: Self::genre_names(content.genres),
                    scoring: SimilarScoring {
                        imdb_votes: scoring.imdb_votes,
                        imdb_score: scoring.imdb_score,
                        tomato_meter: scoring.tomato_meter,
                    },
                }
            })
            .collect()
    }
}
