use crate::modules::provider::domain::entities::{
    ClientConfig, MediaDetail, SearchRecord, SimilarTitleRecord,
};
use crate::modules::provider::infrastructure::adapters::JustWatchAdapter;
use crate::modules::provider::infrastructure::http_client::{
    FreeProxyListSource, HttpSender, ProxyPool, ProxyPoolState, ProxySource, ReqwestSender,
    ResilientTransport,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::{
    DegradationObserver, LogContext, LoggingObserver, TimeBoundedExecutor, TimedOperation,
};
use std::sync::Arc;

/// Public entry point for title metadata
///
/// Every operation is bounded by the configured timeout and degrades to an
/// empty value instead of failing:
/// - `search` returns `[]`
/// - `get_streaming_details` returns `MediaDetail::default()`
/// - `get_similar_titles` returns `[]`
#[derive(Clone)]
pub struct MetadataClient {
    adapter: Arc<JustWatchAdapter>,
    executor: TimeBoundedExecutor,
    config: Arc<ClientConfig>,
    pool_state: Arc<ProxyPoolState>,
}

impl MetadataClient {
    /// Production client: reqwest transport and the public proxy listing.
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let sender = Arc::new(ReqwestSender::new(config.timeout())?);
        let source = Arc::new(FreeProxyListSource::new(&config.proxy_list_url)?);

        Self::with_parts(
            config,
            Arc::new(ProxyPoolState::new()),
            sender,
            source,
            Arc::new(LoggingObserver),
        )
    }

    pub fn from_env() -> AppResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Assemble a client from explicit collaborators.
    ///
    /// Clients built with the same `pool_state` share discovered proxies.
    pub fn with_parts(
        config: ClientConfig,
        pool_state: Arc<ProxyPoolState>,
        sender: Arc<dyn HttpSender>,
        source: Arc<dyn ProxySource>,
        observer: Arc<dyn DegradationObserver>,
    ) -> AppResult<Self> {
        let executor = TimeBoundedExecutor::with_observer(observer);
        let pool = Arc::new(ProxyPool::with_state(
            Arc::clone(&pool_state),
            source,
            config.fallback_proxies.clone(),
            executor.clone(),
        )?);
        let transport = Arc::new(ResilientTransport::new(
            "JustWatch",
            sender,
            pool,
            config.timeout(),
        ));
        let adapter = Arc::new(JustWatchAdapter::new(transport, &config));

        tracing::debug!(
            endpoint = %config.endpoint,
            timeout_ms = config.timeout_ms,
            "Metadata client ready"
        );

        Ok(Self {
            adapter,
            executor,
            config: Arc::new(config),
            pool_state,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn proxy_pool_state(&self) -> Arc<ProxyPoolState> {
        Arc::clone(&self.pool_state)
    }

    /// Search titles by free text. Blank queries return `[]` without a request.
    pub async fn search(&self, query: &str, country: &str) -> Vec<SearchRecord> {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("Skipping blank search query");
            return Vec::new();
        }

        let country = self.config.resolve_country(country);
        LogContext::search_operation(query, Some(country.as_str()), None);
        let timer = TimedOperation::new("search");

        let adapter = &self.adapter;
        let upstream_country = country.clone();
        let records = self
            .executor
            .run("search", self.config.timeout(), Vec::new(), |token| async move {
                adapter.search(query, &upstream_country, &token).await
            })
            .await;

        timer.finish();
        LogContext::search_operation(query, Some(country.as_str()), Some(records.len()));
        records
    }

    /// Title details and offers for a URL path such as `/us/movie/dune`.
    pub async fn get_streaming_details(&self, full_path: &str, country: &str) -> MediaDetail {
        let full_path = full_path.trim();
        if full_path.is_empty() {
            tracing::debug!("Skipping detail lookup without a path");
            return MediaDetail::default();
        }

        let full_path = if full_path.starts_with('/') {
            full_path.to_string()
        } else {
            format!("/{}", full_path)
        };
        let country = self.config.resolve_country(country);
        let timer = TimedOperation::new("streaming details");

        let adapter = &self.adapter;
        let path = full_path.as_str();
        let upstream_country = country.as_str();
        let detail = self
            .executor
            .run(
                "streaming details",
                self.config.timeout(),
                MediaDetail::default(),
                |token| async move { adapter.get_details(path, upstream_country, &token).await },
            )
            .await;

        timer.finish_with_info(&format!("{} offers", detail.offers.len()));
        tracing::info!(
            path = %full_path,
            country = %country,
            offers = detail.offers.len(),
            "Streaming details resolved"
        );
        detail
    }

    /// Titles similar to an upstream node id.
    pub async fn get_similar_titles(&self, show_id: &str, country: &str) -> Vec<SimilarTitleRecord> {
        let show_id = show_id.trim();
        if show_id.is_empty() {
            tracing::debug!("Skipping similar-titles lookup without an id");
            return Vec::new();
        }

        let country = self.config.resolve_country(country);
        let timer = TimedOperation::new("similar titles");

        let adapter = &self.adapter;
        let upstream_country = country.as_str();
        let similar = self
            .executor
            .run("similar titles", self.config.timeout(), Vec::new(), |token| async move {
                adapter.get_similar(show_id, upstream_country, &token).await
            })
            .await;

        timer.finish();
        tracing::info!(
            id = show_id,
            country = %country,
            results = similar.len(),
            "Similar titles resolved"
        );
        similar
    }

    /// Cancel every in-flight call. Later calls return their empty value.
    pub fn shutdown(&self) {
        tracing::info!("Shutting down metadata client");
        self.executor.cancel_all();
    }

    pub fn is_shut_down(&self) -> bool {
        self.executor.root_token().is_cancelled()
    }
}
