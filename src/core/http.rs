//! Request pipeline: build a GET request, send it through the transport, decode the body.

use crate::config::ClientConfig;
use crate::core::query::{IntoQueryPairs, QueryPairs};
use crate::core::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::error::{FifaError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};


/// Client for the FIFA data API.
///
/// Holds an immutable [`ClientConfig`] and a shared [`Transport`]. Cloning is
/// cheap and every clone can issue requests concurrently; no state is carried
/// from one call to the next.
#[derive(Clone)]
pub struct FifaClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for FifaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FifaClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for FifaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FifaClient {
    /// Default configuration over the `reqwest` transport.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }

    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self::from_parts(config, Arc::new(transport))
    }

    pub fn from_parts(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the GET request for `path` without sending it.
    ///
    /// `path` is appended verbatim to the configured base URL. The
    /// `User-Agent` and `Accept-Language` headers are only set when the
    /// configured values are non-empty.
    pub fn build_request(&self, path: &str, query: &QueryPairs) -> Result<HttpRequest> {
        if path.is_empty() {
            return Err(FifaError::MissingParameter { parameter: "path" });
        }

        let raw = format!("{}{}", self.config.base_url(), path);
        let mut url = Url::parse(&raw).map_err(|e| FifaError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !self.config.user_agent().is_empty() {
            headers.insert(USER_AGENT, HeaderValue::from_str(self.config.user_agent())?);
        }
        if !self.config.language().is_empty() {
            headers.insert(
                ACCEPT_LANGUAGE,
                HeaderValue::from_str(self.config.language())?,
            );
        }

        Ok(HttpRequest {
            method: Method::GET,
            url,
            headers,
        })
    }

    /// Send one GET for `path` and decode the body into `T`.
    ///
    /// `query` is any serializable options record (or `&()` for none); see
    /// [`crate::core::query`] for how it is encoded.
    pub async fn execute<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: IntoQueryPairs + ?Sized,
    {
        let pairs = query.to_query_pairs()?;
        let request = self.build_request(path, &pairs)?;

        debug!(method = %request.method, url = %request.url, "sending request");
        for (name, value) in request.headers.iter() {
            trace!(header = %name, value = ?value);
        }

        let response = self.transport.execute(request).await?;
        debug!(
            status = response.status,
            bytes = response.body.len(),
            "received response"
        );

        decode_response(response)
    }
}

/// Turn a raw response into `T`.
///
/// Any status of 400 or above is an [`FifaError::Upstream`] and the body is not
/// looked at. Otherwise the body must decode into `T` in full.
pub fn decode_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    if response.status >= 400 {
        warn!(
            status = response.status,
            status_text = %response.status_text,
            "upstream returned an error status"
        );
        return Err(FifaError::Upstream {
            status: response.status,
            status_text: response.status_text,
        });
    }
    Ok(serde_json::from_slice(&response.body)?)
}

/// Reject an empty path identifier before it is substituted into a URL.
pub(crate) fn require<'a>(parameter: &'static str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        Err(FifaError::MissingParameter { parameter })
    } else {
        Ok(value)
    }
}
