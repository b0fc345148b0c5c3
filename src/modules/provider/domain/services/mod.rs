pub mod offer_normalizer;

pub use offer_normalizer::{NormalizedOffers, OfferGroup, OfferNormalizer};
