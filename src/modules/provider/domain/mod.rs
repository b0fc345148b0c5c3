pub mod entities;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::*;
pub use services::{NormalizedOffers, OfferGroup, OfferNormalizer};
pub use value_objects::{OfferType, ProxyEndpoint, ResolutionTier};
