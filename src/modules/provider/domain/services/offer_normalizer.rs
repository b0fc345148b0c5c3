//! Offer normalization
//!
//! Collapses the raw offer list of a title into one entry per provider and
//! monetization type, keeping the best picture quality, and orders the
//! monetization groups the way they are shown to users.

use crate::modules::provider::domain::entities::StreamingOffer;
use crate::modules::provider::domain::value_objects::OfferType;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Offers of one monetization type, one per provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferGroup {
    pub offer_type: OfferType,
    pub offers: Vec<StreamingOffer>,
}

impl OfferGroup {
    pub fn label(&self) -> &'static str {
        self.offer_type.display_label()
    }
}

/// Groups in display order (`FLATRATE` first, `OTHER` last).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedOffers {
    groups: Vec<OfferGroup>,
}

impl NormalizedOffers {
    pub fn groups(&self) -> &[OfferGroup] {
        &self.groups
    }

    pub fn offer_types(&self) -> Vec<OfferType> {
        self.groups.iter().map(|g| g.offer_type).collect()
    }

    pub fn get(&self, offer_type: OfferType) -> Option<&[StreamingOffer]> {
        self.groups
            .iter()
            .find(|g| g.offer_type == offer_type)
            .map(|g| g.offers.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.offers.len()).sum()
    }

    /// All offers, group by group.
    pub fn flatten(&self) -> Vec<StreamingOffer> {
        self.groups
            .iter()
            .flat_map(|g| g.offers.iter().cloned())
            .collect()
    }
}

pub struct OfferNormalizer;

impl OfferNormalizer {
    /// Group by monetization type and keep the highest resolution per provider.
    ///
    /// Ties keep the offer seen first; providers keep first-encounter order.
    pub fn normalize(offers: &[StreamingOffer]) -> NormalizedOffers {
        let mut by_type: BTreeMap<OfferType, Vec<StreamingOffer>> = BTreeMap::new();

        for offer in offers {
            let group = by_type.entry(offer.monetization_type).or_default();
            match group
                .iter()
                .position(|existing| existing.provider_name == offer.provider_name)
            {
                None => group.push(offer.clone()),
                Some(index) => {
                    if offer.resolution > group[index].resolution {
                        group[index] = offer.clone();
                    }
                }
            }
        }

        NormalizedOffers {
            groups: by_type
                .into_iter()
                .map(|(offer_type, offers)| OfferGroup { offer_type, offers })
                .collect(),
        }
    }

    /// Drop offers whose link was already seen. Offers without a link are kept.
    pub fn dedup_by_link(offers: Vec<StreamingOffer>) -> Vec<StreamingOffer> {
        let mut seen = HashSet::new();
        offers
            .into_iter()
            .filter(|offer| offer.link.is_empty() || seen.insert(offer.link.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::domain::value_objects::ResolutionTier;

    fn offer(offer_type: OfferType, provider: &str, resolution: ResolutionTier) -> StreamingOffer {
        StreamingOffer {
            monetization_type: offer_type,
            provider_name: provider.to_string(),
            resolution,
            link: format!("https://{}/{}/{}", provider, offer_type, resolution),
            ..Default::default()
        }
    }

    #[test]
    fn test_keeps_highest_resolution() {
        let offers = vec![
            offer(OfferType::Flatrate, "Netflix", ResolutionTier::Hd),
            offer(OfferType::Flatrate, "Netflix", ResolutionTier::FourK),
        ];

        let normalized = OfferNormalizer::normalize(&offers);
        let flatrate = normalized.get(OfferType::Flatrate).unwrap();
        assert_eq!(flatrate.len(), 1);
        assert_eq!(flatrate[0].resolution, ResolutionTier::FourK);
    }

    #[test]
    fn test_tie_keeps_first() {
        let mut first = offer(OfferType::Rent, "Apple TV", ResolutionTier::Hd);
        first.price = "$3.99".to_string();
        let mut second = offer(OfferType::Rent, "Apple TV", ResolutionTier::Hd);
        second.price = "$4.99".to_string();

        let normalized = OfferNormalizer::normalize(&[first, second]);
        assert_eq!(normalized.get(OfferType::Rent).unwrap()[0].price, "$3.99");
    }

    #[test]
    fn test_provider_order_is_first_encounter() {
        let offers = vec![
            offer(OfferType::Buy, "Google Play", ResolutionTier::Sd),
            offer(OfferType::Buy, "Amazon", ResolutionTier::FourK),
            offer(OfferType::Buy, "Google Play", ResolutionTier::Uhd),
        ];

        let normalized = OfferNormalizer::normalize(&offers);
        let providers: Vec<&str> = normalized
            .get(OfferType::Buy)
            .unwrap()
            .iter()
            .map(|o| o.provider_name.as_str())
            .collect();
        assert_eq!(providers, vec!["Google Play", "Amazon"]);
        assert_eq!(
            normalized.get(OfferType::Buy).unwrap()[0].resolution,
            ResolutionTier::Uhd
        );
    }

    #[test]
    fn test_group_order() {
        let offers = vec![
            offer(OfferType::Other, "Kanopy", ResolutionTier::Hd),
            offer(OfferType::Buy, "Amazon", ResolutionTier::Hd),
            offer(OfferType::Free, "Tubi", ResolutionTier::Sd),
            offer(OfferType::Flatrate, "Max", ResolutionTier::Hd),
        ];

        let normalized = OfferNormalizer::normalize(&offers);
        assert_eq!(
            normalized.offer_types(),
            vec![
                OfferType::Flatrate,
                OfferType::Free,
                OfferType::Buy,
                OfferType::Other
            ]
        );
        assert_eq!(normalized.len(), 4);
    }

    #[test]
    fn test_dedup_by_link() {
        let a = offer(OfferType::Flatrate, "Netflix", ResolutionTier::Hd);
        let mut b = offer(OfferType::Flatrate, "Netflix", ResolutionTier::Sd);
        b.link = a.link.clone();
        let mut c = offer(OfferType::Free, "Pluto", ResolutionTier::Sd);
        c.link = String::new();
        let d = c.clone();

        let deduped = OfferNormalizer::dedup_by_link(vec![a.clone(), b, c, d]);
        assert_eq!(deduped.len(), 3);
        assert_eq!(deduped[0], a);
    }

    #[test]
    fn test_empty_input() {
        let normalized = OfferNormalizer::normalize(&[]);
        assert!(normalized.is_empty());
        assert!(normalized.flatten().is_empty());
    }
}
