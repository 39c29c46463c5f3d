//! Transport adapters: the single seam between the request pipeline and the network.

use crate::error::TransportError;
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{header::HeaderMap, Client, Method, Url};
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// A fully built request, ready to be handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

/// Status line and raw body of an upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }
}

/// Anything that can send an [`HttpRequest`] and hand back the response.
///
/// Implementations own their connection pooling, timeouts and TLS setup; the
/// pipeline never retries and never inspects the transport beyond this call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client, e.g. one built with a request timeout.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .send()
            .await?;

        let status = response.status();
        let status_text = reason_phrase(&response);

        // An error status is reported even if its body never arrives in full.
        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(e) if status.is_client_error() || status.is_server_error() => {
                warn!(status = status.as_u16(), error = %e, "dropping unreadable error body");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// Reason phrase the server sent, or the canonical one for the status code.
fn reason_phrase(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
        .or_else(|| response.status().canonical_reason().map(str::to_string))
        .unwrap_or_default()
}

/// Replays JSON payloads from a directory instead of touching the network.
///
/// The request path `/timelines/17/255711` is served from
/// `<dir>/timelines_17_255711.json` with status 200. Query strings are ignored.
#[derive(Debug, Clone)]
pub struct FixtureTransport {
    dir: PathBuf,
}

impl FixtureTransport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File a request for `url` would be served from.
    pub fn fixture_path(&self, url: &Url) -> PathBuf {
        let name = url.path().trim_start_matches('/').replace('/', "_");
        self.dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let path = self.fixture_path(&request.url);
        trace!(fixture = %path.display(), "serving fixture");
        let body = tokio::fs::read(&path).await?;
        Ok(HttpResponse::new(200, "OK", body))
    }
}
