use crate::modules::provider::domain::value_objects::ProxyEndpoint;
use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://apis.justwatch.com/graphql";
pub const DEFAULT_IMAGE_CDN: &str = "https://images.justwatch.com";
pub const DEFAULT_PROXY_LIST_URL: &str = "https://free-proxy-list.net/anonymous-proxy.html";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_COUNTRY: &str = "US";
pub const UPSTREAM_LANGUAGE: &str = "en";

/// Known-good proxies used when discovery yields nothing.
pub const FALLBACK_PROXIES: [&str; 4] = [
    "http://43.159.142.191:13001",
    "http://165.232.129.150:80",
    "http://113.175.44.30:8080",
    "http://40.76.69.94:8080",
];

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    pub image_cdn: String,
    pub proxy_list_url: String,
    pub timeout_ms: u64,
    pub default_country: String,
    pub language: String,
    pub fallback_proxies: Vec<ProxyEndpoint>,
}

impl ClientConfig {
    pub fn new(timeout_ms: u64, default_country: &str) -> Self {
        Self {
            timeout_ms,
            default_country: default_country.trim().to_ascii_uppercase(),
            ..Self::default()
        }
    }

    /// Build from `REELSCOUT_*` environment variables, falling back to defaults.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("REELSCOUT_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(cdn) = std::env::var("REELSCOUT_IMAGE_CDN") {
            config.image_cdn = cdn.trim_end_matches('/').to_string();
        }
        if let Ok(url) = std::env::var("REELSCOUT_PROXY_LIST_URL") {
            config.proxy_list_url = url;
        }
        if let Ok(raw) = std::env::var("REELSCOUT_TIMEOUT_MS") {
            config.timeout_ms = raw.trim().parse().map_err(|e| {
                AppError::ConfigError(format!("REELSCOUT_TIMEOUT_MS='{}': {}", raw, e))
            })?;
        }
        if let Ok(country) = std::env::var("REELSCOUT_DEFAULT_COUNTRY") {
            if country.trim().is_empty() {
                return Err(AppError::ConfigError(
                    "REELSCOUT_DEFAULT_COUNTRY cannot be empty".to_string(),
                ));
            }
            config.default_country = country.trim().to_ascii_uppercase();
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Caller-supplied country, or the configured default when blank.
    pub fn resolve_country(&self, country: &str) -> String {
        let country = country.trim();
        if country.is_empty() {
            self.default_country.clone()
        } else {
            country.to_ascii_uppercase()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            image_cdn: DEFAULT_IMAGE_CDN.to_string(),
            proxy_list_url: DEFAULT_PROXY_LIST_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_country: DEFAULT_COUNTRY.to_string(),
            language: UPSTREAM_LANGUAGE.to_string(),
            fallback_proxies: FALLBACK_PROXIES
                .iter()
                .filter_map(|raw| ProxyEndpoint::parse(raw).ok())
                .collect(),
        }
    }
}
