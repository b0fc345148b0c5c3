pub mod offer_type;
pub mod proxy_endpoint;
pub mod resolution_tier;

pub use offer_type::OfferType;
pub use proxy_endpoint::ProxyEndpoint;
pub use resolution_tier::ResolutionTier;
