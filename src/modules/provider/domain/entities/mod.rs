pub mod media_detail;
pub mod provider_config;
pub mod search_record;
pub mod similar_title;
pub mod streaming_offer;

pub use media_detail::{MediaDetail, MediaScores};
pub use provider_config::ClientConfig;
pub use search_record::SearchRecord;
pub use similar_title::{SimilarScoring, SimilarTitleRecord};
pub use streaming_offer::StreamingOffer;
