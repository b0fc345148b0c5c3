//! HTTP transport with a single proxy-routed retry
//!
//! A request is sent directly first. If that attempt errors or answers with a
//! non-2xx status, one endpoint is picked from the [`ProxyPool`] and the same
//! request is sent once more through it. There is no backoff and no second
//! proxy: the caller's deadline bounds the whole exchange.

use super::proxy_pool::ProxyPool;
use crate::modules::provider::domain::value_objects::ProxyEndpoint;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::{Client, Method, Proxy};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Method, URL, headers and body of one upstream call; replayed verbatim on retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl UpstreamRequest {
    pub fn post_json(url: &str, body: &Value) -> Self {
        Self {
            method: Method::POST,
            url: url.to_string(),
            headers: Vec::new(),
            body: Some(body.to_string()),
        }
    }

    pub fn with_headers<'a>(mut self, headers: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.headers.extend(
            headers
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            AppError::MalformedResponse(format!(
                "Failed to parse response: {}. Response: {}",
                e,
                if self.body.len() > 200 {
                    format!("{}...", self.body.chars().take(200).collect::<String>())
                } else {
                    self.body.clone()
                }
            ))
        })
    }
}

/// The network edge: sends one request, directly or through a proxy.
#[async_trait]
pub trait HttpSender: Send + Sync {
    async fn send(
        &self,
        request: &UpstreamRequest,
        proxy: Option<&ProxyEndpoint>,
    ) -> AppResult<RawResponse>;
}

/// `reqwest`-backed sender. Proxied clients are built lazily, one per endpoint.
pub struct ReqwestSender {
    direct: Client,
    proxied: DashMap<ProxyEndpoint, Client>,
    request_timeout: Duration,
}

impl ReqwestSender {
    pub fn new(request_timeout: Duration) -> AppResult<Self> {
        let direct = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            direct,
            proxied: DashMap::new(),
            request_timeout,
        })
    }

    fn client_for(&self, proxy: &ProxyEndpoint) -> AppResult<Client> {
        if let Some(client) = self.proxied.get(proxy) {
            return Ok(client.clone());
        }

        // The entry holds the shard lock, so concurrent first callers build one client.
        let client = self
            .proxied
            .entry(proxy.clone())
            .or_try_insert_with(|| {
                Client::builder()
                    .proxy(Proxy::all(proxy.as_str())?)
                    .timeout(self.request_timeout)
                    .build()
            })?;
        Ok(client.clone())
    }
}

#[async_trait]
impl HttpSender for ReqwestSender {
    async fn send(
        &self,
        request: &UpstreamRequest,
        proxy: Option<&ProxyEndpoint>,
    ) -> AppResult<RawResponse> {
        let client = match proxy {
            Some(endpoint) => self.client_for(endpoint)?,
            None => self.direct.clone(),
        };

        let mut builder = client.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

pub struct ResilientTransport {
    sender: Arc<dyn HttpSender>,
    pool: Arc<ProxyPool>,
    discovery_deadline: Duration,
    provider_name: String,
}

impl ResilientTransport {
    pub fn new(
        provider_name: &str,
        sender: Arc<dyn HttpSender>,
        pool: Arc<ProxyPool>,
        discovery_deadline: Duration,
    ) -> Self {
        Self {
            sender,
            pool,
            discovery_deadline,
            provider_name: provider_name.to_string(),
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Send directly, then once through a pooled proxy if the direct attempt failed.
    pub async fn fetch(
        &self,
        request: &UpstreamRequest,
        token: &CancellationToken,
    ) -> AppResult<RawResponse> {
        let direct_error = match self.attempt(request, None, token).await {
            Ok(response) => return Ok(response),
            Err(err) if err.is_cancellation() => return Err(err),
            Err(err) => err,
        };

        log::warn!(
            "{} direct request failed ({}). Retrying through a proxy.",
            self.provider_name,
            direct_error
        );

        let proxies = tokio::select! {
            biased;
            _ = token.cancelled() => {
                return Err(AppError::Cancelled(format!(
                    "{} request cancelled during proxy discovery",
                    self.provider_name
                )))
            }
            proxies = self.pool.acquire(self.discovery_deadline) => proxies,
        };

        let proxy = self
            .pool
            .pick()
            .or_else(|| proxies.first().cloned())
            .ok_or_else(|| {
                AppError::ProxyPoolExhausted(format!("{} has no proxy to retry through", self.provider_name))
            })?;

        self.attempt(request, Some(&proxy), token)
            .await
            .map_err(|err| match err {
                AppError::Cancelled(_) => err,
                other => AppError::TransportError(format!(
                    "direct attempt: {}; via {}: {}",
                    direct_error, proxy, other
                )),
            })
    }

    async fn attempt(
        &self,
        request: &UpstreamRequest,
        proxy: Option<&ProxyEndpoint>,
        token: &CancellationToken,
    ) -> AppResult<RawResponse> {
        let route = proxy.map_or_else(|| "direct".to_string(), |p| format!("via {}", p));
        LogContext::api_call(&self.provider_name, &request.url, &route, None);
        let started = Instant::now();

        let response = tokio::select! {
            biased;
            _ = token.cancelled() => {
                return Err(AppError::Cancelled(format!(
                    "{} request to {} cancelled",
                    self.provider_name, request.url
                )))
            }
            result = self.sender.send(request, proxy) => result?,
        };

        LogContext::api_call(
            &self.provider_name,
            &request.url,
            &format!("{} -> HTTP {}", route, response.status),
            Some(started.elapsed().as_millis() as u64),
        );

        if !response.is_success() {
            return Err(AppError::TransportError(format!(
                "{} API returned HTTP {} ({})",
                self.provider_name, response.status, route
            )));
        }
        Ok(response)
    }
}
