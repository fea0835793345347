//! Error types for the lichess.org client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while building, sending or decoding requests.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The target URL could not be parsed.
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// A path parameter cannot stand as a single URL path segment.
    #[error("Invalid value {value:?} for path parameter {name}")]
    InvalidPathSegment {
        /// Placeholder name in the endpoint template.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A header name or value is not valid HTTP.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Network, DNS or TLS failure reported by the transport.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not the expected JSON document.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// A batch lookup asked for more ids than the endpoint accepts.
    #[error("Too many requested profiles: {requested}, max is {max}")]
    TooManyIds {
        /// Number of ids passed in.
        requested: usize,
        /// Endpoint ceiling.
        max: usize,
    },
}

impl ClientError {
    /// Returns true for failures raised before any network call was made.
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. }
                | Self::InvalidPathSegment { .. }
                | Self::InvalidHeader(_)
                | Self::TooManyIds { .. }
        )
    }

    /// Returns the HTTP status code, if the error carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
