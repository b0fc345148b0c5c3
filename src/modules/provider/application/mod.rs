pub mod service;

pub use service::MetadataClient;
