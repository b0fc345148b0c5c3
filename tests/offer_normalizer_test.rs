//! Offer normalization tests

use reelscout_lib::{OfferNormalizer, OfferType, ResolutionTier, StreamingOffer};
use std::collections::HashSet;

fn offer(monetization: &str, presentation: &str, provider: &str) -> StreamingOffer {
    StreamingOffer {
        monetization_type: OfferType::from_upstream(monetization),
        resolution: ResolutionTier::from_upstream(presentation),
        provider_name: provider.to_string(),
        link: format!("https://{}/{}/{}", provider, monetization, presentation),
        ..Default::default()
    }
}

fn catalogue() -> Vec<StreamingOffer> {
    vec![
        offer("BUY", "SD", "Amazon"),
        offer("FLATRATE", "HD", "Netflix"),
        offer("BUY", "4K", "Amazon"),
        offer("RENT", "HD", "Apple TV"),
        offer("FLATRATE", "_4K", "Netflix"),
        offer("SOMETHING_NEW", "HD", "Kanopy"),
        offer("ADS", "SD", "Tubi"),
        offer("FREE", "CANVAS", "Pluto"),
        offer("FLATRATE", "UHD", "Max"),
        offer("RENT", "SD", "Apple TV"),
        offer("CINEMA", "", "AMC"),
        offer("", "HD", "Mystery"),
    ]
}

#[test]
fn test_no_duplicate_provider_within_type() {
    let normalized = OfferNormalizer::normalize(&catalogue());

    for group in normalized.groups() {
        let mut seen = HashSet::new();
        for offer in &group.offers {
            assert_eq!(offer.monetization_type, group.offer_type);
            assert!(seen.insert(offer.provider_name.clone()));
        }
    }
}

#[test]
fn test_best_resolution_is_kept() {
    let normalized = OfferNormalizer::normalize(&catalogue());

    assert_eq!(
        normalized.get(OfferType::Buy).unwrap()[0].resolution,
        ResolutionTier::FourK
    );
    assert_eq!(
        normalized.get(OfferType::Rent).unwrap()[0].resolution,
        ResolutionTier::Hd
    );

    let flatrate = normalized.get(OfferType::Flatrate).unwrap();
    assert_eq!(flatrate[0].provider_name, "Netflix");
    assert_eq!(flatrate[0].resolution, ResolutionTier::FourK);
    assert_eq!(flatrate[1].provider_name, "Max");
}

#[test]
fn test_groups_in_display_order() {
    let normalized = OfferNormalizer::normalize(&catalogue());

    assert_eq!(
        normalized.offer_types(),
        vec![
            OfferType::Flatrate,
            OfferType::Free,
            OfferType::Ads,
            OfferType::Cinema,
            OfferType::Rent,
            OfferType::Buy,
            OfferType::Other,
        ]
    );
    let priorities: Vec<u8> = normalized
        .offer_types()
        .iter()
        .map(|t| t.priority())
        .collect();
    assert!(priorities.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_unknown_types_collapse_into_other() {
    let normalized = OfferNormalizer::normalize(&catalogue());
    let other: Vec<&str> = normalized
        .get(OfferType::Other)
        .unwrap()
        .iter()
        .map(|o| o.provider_name.as_str())
        .collect();

    assert_eq!(other, vec!["Kanopy", "Mystery"]);
}

#[test]
fn test_normalize_is_idempotent() {
    let once = OfferNormalizer::normalize(&catalogue());
    let twice = OfferNormalizer::normalize(&once.flatten());

    assert_eq!(once, twice);
}

#[test]
fn test_labels() {
    let normalized = OfferNormalizer::normalize(&catalogue());
    let labels: Vec<&str> = normalized.groups().iter().map(|g| g.label()).collect();

    assert_eq!(labels[0], "Stream with Subscription");
    assert_eq!(labels.last().copied(), Some("Other Options"));
}

#[test]
fn test_resolution_aliases() {
    assert_eq!(ResolutionTier::from_upstream("_4K"), ResolutionTier::FourK);
    assert_eq!(ResolutionTier::from_upstream("4K"), ResolutionTier::FourK);
    assert_eq!(ResolutionTier::from_upstream("DOLBY"), ResolutionTier::Unknown);
    assert!(ResolutionTier::Canvas > ResolutionTier::Unknown);
    assert!(ResolutionTier::FourK.is_ultra_hd());
    assert!(!ResolutionTier::Hd.is_ultra_hd());
}
