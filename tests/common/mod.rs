//! Shared helpers for the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use fifa_api::{
    ClientConfig, FifaClient, FixtureTransport, HttpRequest, HttpResponse, Transport,
    TransportError,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const FIXTURE_BASE_URL: &str = "http://fixtures.test";

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
}

pub fn fixture_value(name: &str) -> serde_json::Value {
    let path = fixture_dir().join(name);
    let raw = std::fs::read(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    serde_json::from_slice(&raw).unwrap()
}

/// Fixture transport that counts and records every request it serves.
#[derive(Debug)]
pub struct CountingTransport {
    inner: FixtureTransport,
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
}

impl CountingTransport {
    pub fn new() -> Self {
        Self {
            inner: FixtureTransport::new(fixture_dir()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_url(&self) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|request| request.url.to_string())
    }
}

#[async_trait]
impl Transport for CountingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.inner.execute(request).await
    }
}

pub fn fixture_client() -> (FifaClient, Arc<CountingTransport>) {
    let transport = Arc::new(CountingTransport::new());
    let config = ClientConfig::new().with_base_url(FIXTURE_BASE_URL);
    let client = FifaClient::from_parts(config, transport.clone());
    (client, transport)
}
