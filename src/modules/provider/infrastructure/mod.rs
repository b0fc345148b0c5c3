pub mod adapters;
pub mod http_client;

// Re-export commonly used types
pub use adapters::JustWatchAdapter;
pub use http_client::{
    FreeProxyListSource, HttpSender, ProxyPool, ProxyPoolState, ProxySource, ResilientTransport,
};
