//! Outbound request description.

use std::collections::BTreeMap;

use bytes::Bytes;
use reqwest::Method;

/// Everything needed to issue one HTTP request.
///
/// Built fresh for every call and consumed by
/// [`LichessClient::execute`](crate::LichessClient::execute). Headers and
/// query parameters are kept in ordered maps so the encoded request is
/// deterministic.
///
/// # Example
///
/// ```
/// use knightline_client::RequestParams;
///
/// let params = RequestParams::get("https://lichess.org/api/users/status")
///     .query("ids", "thibault,neio");
/// assert_eq!(params.query_params().get("ids").map(String::as_str), Some("thibault,neio"));
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct RequestParams {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) query: BTreeMap<String, String>,
    pub(crate) body: Option<Bytes>,
}

impl RequestParams {
    /// Creates parameters for the given method and URL.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    /// Creates parameters for a `GET` request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Creates parameters for a `POST` request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Adds a header. Names are case-insensitive and stored lowercase; a
    /// later value for the same name replaces the earlier one.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Adds a query parameter. A later value for the same key replaces the
    /// earlier one.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets the raw request body. No content type is implied.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the target URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the caller-supplied headers.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Returns the caller-supplied query parameters.
    #[must_use]
    pub const fn query_params(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Returns the request body, if any.
    #[must_use]
    pub const fn body_bytes(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}
