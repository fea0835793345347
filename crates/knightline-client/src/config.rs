//! Client configuration.

use std::time::Duration;

use crate::Endpoints;

/// Default capacity of the record buffer between a stream reader and its
/// consumer.
pub const DEFAULT_STREAM_BUFFER: usize = 10;

/// Configuration for a [`LichessClient`](crate::LichessClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Personal API token. Sent as `Authorization: Bearer <token>` on every
    /// request, also when empty.
    pub token: String,
    /// HTTP transport. When `None`, a default client is built from
    /// `user_agent` and `connect_timeout`.
    pub http_client: Option<reqwest::Client>,
    /// Endpoint URL templates.
    pub endpoints: Endpoints,
    /// Number of decoded records a stream may hold before the reader waits.
    pub stream_buffer: usize,
    /// User agent string for the default transport.
    pub user_agent: String,
    /// Connection timeout for the default transport. There is no total
    /// request timeout: streams stay open until the server closes them.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            http_client: None,
            endpoints: Endpoints::default(),
            stream_buffer: DEFAULT_STREAM_BUFFER,
            user_agent: format!("knightline/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Sets the API token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Uses the given HTTP transport instead of building one.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replaces the endpoint table.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Points every endpoint at another host.
    #[must_use]
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.endpoints = Endpoints::with_base_url(base);
        self
    }

    /// Sets the stream buffer capacity. Zero is raised to one.
    #[must_use]
    pub fn with_stream_buffer(mut self, capacity: usize) -> Self {
        self.stream_buffer = capacity.max(1);
        self
    }
}
