//! Static client configuration.
//!
//! A [`ClientConfig`] is resolved once, when it is constructed, and never
//! changes afterwards. Every [`FifaClient`](crate::FifaClient) holds its own
//! shared copy, so clones of a client can be used from many tasks at once.

/// Base URL every request path is appended to.
pub const DEFAULT_API_BASE_URL: &str = "https://api.fifa.com/api/v3";

/// Value sent in the `User-Agent` header unless overridden.
pub const DEFAULT_USER_AGENT: &str = "fifa-api-rs/0.1";

/// Value sent in the `Accept-Language` header unless overridden.
pub const DEFAULT_LANGUAGE: &str = "en-US,en";

pub const BASE_URL_ENV_VAR: &str = "FIFA_API_BASE_URL";
pub const USER_AGENT_ENV_VAR: &str = "FIFA_API_USER_AGENT";
pub const LANGUAGE_ENV_VAR: &str = "FIFA_API_LANGUAGE";

/// Base URL, user agent and language used to build every request.
///
/// An empty user agent or language disables the matching header; an empty
/// base URL falls back to [`DEFAULT_API_BASE_URL`].
///
/// # Examples
///
/// ```rust
/// use fifa_api::ClientConfig;
///
/// let config = ClientConfig::default().with_language("es-ES");
/// assert_eq!(config.base_url(), "https://api.fifa.com/api/v3");
/// assert_eq!(config.language(), "es-ES");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    user_agent: String,
    language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `FIFA_API_BASE_URL`, `FIFA_API_USER_AGENT`
    /// and `FIFA_API_LANGUAGE`, using the defaults for unset variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
            config = config.with_base_url(base_url);
        }
        if let Ok(user_agent) = std::env::var(USER_AGENT_ENV_VAR) {
            config = config.with_user_agent(user_agent);
        }
        if let Ok(language) = std::env::var(LANGUAGE_ENV_VAR) {
            config = config.with_language(language);
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = if base_url.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            base_url
        };
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}
