pub mod modules;
pub mod shared;

pub use modules::provider::{
    ClientConfig, MediaDetail, MetadataClient, NormalizedOffers, OfferNormalizer, OfferType,
    ProxyEndpoint, ResolutionTier, SearchRecord, SimilarTitleRecord, StreamingOffer,
};
pub use shared::{AppError, AppResult};
