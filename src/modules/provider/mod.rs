pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::MetadataClient;
pub use domain::{
    ClientConfig, MediaDetail, NormalizedOffers, OfferNormalizer, OfferType, ProxyEndpoint,
    ResolutionTier, SearchRecord, SimilarTitleRecord, StreamingOffer,
};
