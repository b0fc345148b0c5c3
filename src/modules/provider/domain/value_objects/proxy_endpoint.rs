use crate::shared::errors::{AppError, AppResult};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated proxy server URL (`scheme://host:port`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProxyEndpoint(String);

impl ProxyEndpoint {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let url = Url::parse(raw.trim())
            .map_err(|e| AppError::InvalidInput(format!("Invalid proxy URL '{}': {}", raw, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::InvalidInput(format!(
                "Unsupported proxy scheme '{}'",
                url.scheme()
            )));
        }

        let host = url
            .host_str()
            .ok_or_else(|| AppError::InvalidInput(format!("Proxy URL '{}' has no host", raw)))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| AppError::InvalidInput(format!("Proxy URL '{}' has no port", raw)))?;

        Ok(Self(format!("{}://{}:{}", url.scheme(), host, port)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProxyEndpoint {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProxyEndpoint> for String {
    fn from(endpoint: ProxyEndpoint) -> Self {
        endpoint.0
    }
}

impl fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
