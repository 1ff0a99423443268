//! Client configuration
//!
//! Holds the base URL and bearer token for the gateway plus the transport
//! knobs applied when the client is constructed. Immutable once the client
//! is built.

use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`WhatsAppClient`](crate::WhatsAppClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway, stored without a trailing slash
    pub base_url: String,
    /// Bearer token attached to every request
    pub access_token: String,
    /// Timeout applied by the transport to each request
    pub timeout: Duration,
    /// Optional User-Agent header value
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration from a base URL and an access token.
    ///
    /// Trailing slashes are stripped from the base URL so endpoint paths
    /// can be appended verbatim.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }

    /// Set a custom request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
