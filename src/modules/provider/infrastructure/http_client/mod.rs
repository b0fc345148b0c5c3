pub mod proxy_pool;
pub mod resilient_transport;

pub use proxy_pool::{parse_proxy_table, FreeProxyListSource, ProxyPool, ProxyPoolState, ProxySource};
pub use resilient_transport::{
    HttpSender, RawResponse, ReqwestSender, ResilientTransport, UpstreamRequest,
};
