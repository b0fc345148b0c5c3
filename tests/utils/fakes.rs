/// Hand-written collaborators for driving the client without a network
use async_trait::async_trait;
use reelscout_lib::modules::provider::infrastructure::http_client::{
    HttpSender, ProxySource, RawResponse, UpstreamRequest,
};
use reelscout_lib::shared::utils::DegradationObserver;
use reelscout_lib::{AppError, AppResult, ClientConfig, MetadataClient, ProxyEndpoint};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the fake upstream answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(u16, Value),
    Raw(u16, String),
    Fail(String),
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Reply::Json(200, body)
    }

    pub fn status(status: u16) -> Self {
        Reply::Raw(status, String::new())
    }
}

#[derive(Debug, Clone)]
pub struct SentCall {
    pub url: String,
    pub proxy: Option<String>,
    pub body: Value,
}

impl SentCall {
    pub fn operation(&self) -> Option<&str> {
        self.body["operationName"].as_str()
    }

    pub fn variable(&self, name: &str) -> &Value {
        &self.body["variables"][name]
    }
}

/// Answers direct and proxied requests with fixed replies and records every call.
pub struct FakeSender {
    direct: Reply,
    proxied: Reply,
    delay: Duration,
    calls: Mutex<Vec<SentCall>>,
}

impl FakeSender {
    pub fn new(direct: Reply, proxied: Reply) -> Self {
        Self {
            direct,
            proxied,
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Same reply on both routes.
    pub fn always(reply: Reply) -> Self {
        Self::new(reply.clone(), reply)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<SentCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn direct_calls(&self) -> usize {
        self.calls().iter().filter(|c| c.proxy.is_none()).count()
    }

    pub fn proxied_calls(&self) -> usize {
        self.calls().iter().filter(|c| c.proxy.is_some()).count()
    }
}

#[async_trait]
impl HttpSender for FakeSender {
    async fn send(
        &self,
        request: &UpstreamRequest,
        proxy: Option<&ProxyEndpoint>,
    ) -> AppResult<RawResponse> {
        let body = request
            .body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
            .unwrap_or(Value::Null);
        self.calls.lock().unwrap().push(SentCall {
            url: request.url.clone(),
            proxy: proxy.map(|p| p.to_string()),
            body,
        });

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let reply = if proxy.is_some() {
            &self.proxied
        } else {
            &self.direct
        };
        match reply {
            Reply::Json(status, body) => Ok(RawResponse {
                status: *status,
                body: body.to_string(),
            }),
            Reply::Raw(status, body) => Ok(RawResponse {
                status: *status,
                body: body.clone(),
            }),
            Reply::Fail(message) => Err(AppError::TransportError(message.clone())),
        }
    }
}

/// Proxy source returning a fixed list after an optional delay, counting fetches.
pub struct CountingSource {
    endpoints: Vec<ProxyEndpoint>,
    delay: Duration,
    fetches: AtomicUsize,
}

impl CountingSource {
    pub fn new(endpoints: &[&str], delay: Duration) -> Self {
        Self {
            endpoints: endpoints
                .iter()
                .map(|raw| ProxyEndpoint::parse(raw).unwrap())
                .collect(),
            delay,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProxySource for CountingSource {
    async fn fetch_listing(&self) -> AppResult<Vec<ProxyEndpoint>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.endpoints.clone())
    }
}

/// Records every degraded operation.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<(String, AppError)>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<(String, AppError)> {
        self.events.lock().unwrap().clone()
    }
}

impl DegradationObserver for RecordingObserver {
    fn on_degraded(&self, operation: &str, cause: &AppError) {
        self.events
            .lock()
            .unwrap()
            .push((operation.to_string(), cause.clone()));
    }
}

pub fn endpoint(raw: &str) -> ProxyEndpoint {
    ProxyEndpoint::parse(raw).unwrap()
}

pub struct TestClient {
    pub client: MetadataClient,
    pub sender: Arc<FakeSender>,
    pub source: Arc<CountingSource>,
    pub observer: Arc<RecordingObserver>,
}

/// Client over fakes with the given timeout and default country `US`.
pub fn build_client(sender: FakeSender, timeout_ms: u64) -> TestClient {
    let sender = Arc::new(sender);
    let source = Arc::new(CountingSource::new(
        &["http://10.1.1.1:8080"],
        Duration::ZERO,
    ));
    let observer = Arc::new(RecordingObserver::default());

    let client = MetadataClient::with_parts(
        ClientConfig::new(timeout_ms, "US"),
        Arc::new(Default::default()),
        sender.clone(),
        source.clone(),
        observer.clone(),
    )
    .unwrap();

    TestClient {
        client,
        sender,
        source,
        observer,
    }
}
