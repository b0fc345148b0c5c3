//! Proxy endpoint discovery and caching
//!
//! Discovery is slow and unreliable, so it runs at most once per
//! [`ProxyPoolState`]. Concurrent first callers wait on the same discovery
//! instead of racing, and a built-in fallback list keeps the pool non-empty.

use crate::modules::provider::domain::value_objects::ProxyEndpoint;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimeBoundedExecutor;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use regex::Regex;
use reqwest::Client;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

/// Where proxy endpoints come from.
#[async_trait]
pub trait ProxySource: Send + Sync {
    async fn fetch_listing(&self) -> AppResult<Vec<ProxyEndpoint>>;
}

/// Process-scoped proxy cache. Populated once, never expires.
#[derive(Debug, Default)]
pub struct ProxyPoolState {
    endpoints: OnceCell<Vec<ProxyEndpoint>>,
}

impl ProxyPoolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_populated(&self) -> bool {
        self.endpoints.initialized()
    }

    pub fn endpoints(&self) -> Option<&[ProxyEndpoint]> {
        self.endpoints.get().map(|list| list.as_slice())
    }
}

pub struct ProxyPool {
    state: Arc<ProxyPoolState>,
    source: Arc<dyn ProxySource>,
    fallback: Vec<ProxyEndpoint>,
    executor: TimeBoundedExecutor,
}

impl ProxyPool {
    pub fn new(source: Arc<dyn ProxySource>, fallback: Vec<ProxyEndpoint>) -> AppResult<Self> {
        Self::with_state(
            Arc::new(ProxyPoolState::new()),
            source,
            fallback,
            TimeBoundedExecutor::new(),
        )
    }

    /// Share an existing state between pools (and therefore between transports).
    ///
    /// Discovery runs under `executor`, so its degradations reach the same
    /// observer and its root token cancels pending discovery.
    pub fn with_state(
        state: Arc<ProxyPoolState>,
        source: Arc<dyn ProxySource>,
        fallback: Vec<ProxyEndpoint>,
        executor: TimeBoundedExecutor,
    ) -> AppResult<Self> {
        if fallback.is_empty() {
            return Err(AppError::ProxyPoolExhausted(
                "fallback proxy list cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            state,
            source,
            fallback,
            executor,
        })
    }

    pub fn state(&self) -> Arc<ProxyPoolState> {
        Arc::clone(&self.state)
    }

    /// Cached endpoints, discovering them first if needed. Never empty.
    pub async fn acquire(&self, deadline: Duration) -> Vec<ProxyEndpoint> {
        self.state
            .endpoints
            .get_or_init(|| self.discover(deadline))
            .await
            .clone()
    }

    /// A uniformly random cached endpoint; `None` until the pool is populated.
    pub fn pick(&self) -> Option<ProxyEndpoint> {
        self.state
            .endpoints()
            .and_then(|list| list.choose(&mut rand::thread_rng()).cloned())
    }

    async fn discover(&self, deadline: Duration) -> Vec<ProxyEndpoint> {
        log::info!("Discovering proxy endpoints (deadline {:?})", deadline);

        let source = Arc::clone(&self.source);
        let discovered = self
            .executor
            .run("proxy discovery", deadline, Vec::new(), |_| async move {
                source.fetch_listing().await
            })
            .await;

        let mut seen = HashSet::new();
        let unique: Vec<ProxyEndpoint> = discovered
            .into_iter()
            .filter(|endpoint| seen.insert(endpoint.clone()))
            .collect();

        if unique.is_empty() {
            log::warn!(
                "Proxy discovery yielded no endpoints, using {} built-in proxies",
                self.fallback.len()
            );
            self.fallback.clone()
        } else {
            log::info!("Proxy discovery found {} endpoints", unique.len());
            unique
        }
    }
}

/// Scrapes the public anonymous proxy listing page.
pub struct FreeProxyListSource {
    client: Client,
    url: String,
    parser: ProxyTableParser,
}

impl FreeProxyListSource {
    pub fn new(url: &str) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent("reelscout/0.1")
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.to_string(),
            parser: ProxyTableParser::new()?,
        })
    }
}

#[async_trait]
impl ProxySource for FreeProxyListSource {
    async fn fetch_listing(&self) -> AppResult<Vec<ProxyEndpoint>> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::TransportError(format!(
                "Proxy listing returned {}",
                response.status()
            )));
        }

        let html = response.text().await?;
        Ok(self.parser.parse(&html))
    }
}

/// Parse the proxy listing HTML table into endpoints.
pub fn parse_proxy_table(html: &str) -> AppResult<Vec<ProxyEndpoint>> {
    Ok(ProxyTableParser::new()?.parse(html))
}

struct ProxyTableParser {
    thead: Regex,
    tbody: Regex,
    header_cell: Regex,
    row: Regex,
    cell: Regex,
    tag: Regex,
}

impl ProxyTableParser {
    fn new() -> AppResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| AppError::ConfigError(format!("Invalid pattern {}: {}", pattern, e)))
        };

        Ok(Self {
            thead: compile(r"(?s)<thead[^>]*>(.*?)</thead>")?,
            tbody: compile(r"(?s)<tbody[^>]*>(.*?)</tbody>")?,
            header_cell: compile(r"(?s)<th(?:\s[^>]*)?>(.*?)</th>")?,
            row: compile(r"(?s)<tr(?:\s[^>]*)?>(.*?)</tr>")?,
            cell: compile(r"(?s)<td(?:\s[^>]*)?>(.*?)</td>")?,
            tag: compile(r"<[^>]*>")?,
        })
    }

    fn parse(&self, html: &str) -> Vec<ProxyEndpoint> {
        let table = match (html.find("<table"), html.find("</table>")) {
            (Some(start), Some(end)) if end > start => &html[start..end + "</table>".len()],
            _ => {
                log::error!("Could not find the proxy table on the page");
                return Vec::new();
            }
        };

        let thead = self
            .thead
            .captures(table)
            .and_then(|c| c.get(1))
            .map_or("", |m| m.as_str());
        let tbody = self
            .tbody
            .captures(table)
            .and_then(|c| c.get(1))
            .map_or("", |m| m.as_str());

        let headers: Vec<String> = self
            .header_cell
            .captures_iter(thead)
            .filter_map(|c| c.get(1))
            .map(|m| camel_case(&self.strip_tags(m.as_str())))
            .collect();

        if headers.is_empty() {
            return Vec::new();
        }

        self.row
            .captures_iter(tbody)
            .filter_map(|row| row.get(1))
            .filter_map(|row| {
                let cells: Vec<String> = self
                    .cell
                    .captures_iter(row.as_str())
                    .filter_map(|c| c.get(1))
                    .map(|m| self.strip_tags(m.as_str()))
                    .collect();

                if cells.len() != headers.len() {
                    return None;
                }

                let fields: HashMap<&str, &str> = headers
                    .iter()
                    .map(String::as_str)
                    .zip(cells.iter().map(String::as_str))
                    .collect();

                let ip = fields.get("ipAddress").filter(|v| !v.is_empty())?;
                let port = fields.get("port").filter(|v| !v.is_empty())?;
                if fields.get("google").copied() != Some("yes") {
                    return None;
                }

                let scheme = if fields.get("https").copied() == Some("yes") {
                    "https"
                } else {
                    "http"
                };
                ProxyEndpoint::parse(&format!("{}://{}:{}", scheme, ip, port)).ok()
            })
            .collect()
    }

    fn strip_tags(&self, cell: &str) -> String {
        self.tag.replace_all(cell, "").trim().to_string()
    }
}

/// "IP Address" -> "ipAddress", "Last Checked" -> "lastChecked".
fn camel_case(header: &str) -> String {
    let mut out = String::with_capacity(header.len());
    let mut upper_next = false;
    for ch in header.trim().to_lowercase().chars() {
        if ch.is_whitespace() {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
