use crate::modules::provider::domain::value_objects::{OfferType, ResolutionTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One way to watch a title through one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingOffer {
    pub resolution: ResolutionTier,
    pub monetization_type: OfferType,
    pub price: String,
    pub provider_name: String,
    pub link: String,
    pub audio_languages: BTreeSet<String>,
    pub subtitle_languages: BTreeSet<String>,
    pub icon_url: String,
}
