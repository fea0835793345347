//! Async Rust client for the lichess.org API.
//!
//! This is a facade crate that re-exports functionality from the knightline
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use knightline_lib::prelude::*;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LichessClient::new(ClientConfig::default().with_token("lip_xxx"))?;
//!
//!     let me = client.my_profile().await?;
//!     println!("logged in as {}", me.username);
//!
//!     let (mut followers, _cancel) = client.followers(&me.id).await?;
//!     while let Some(user) = followers.next().await {
//!         println!("{}", user.username);
//!     }
//!     if let Some(end) = followers.termination().filter(|end| !end.is_clean()) {
//!         eprintln!("stream stopped early: {end}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/knightline/knightline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export record types
pub use knightline_types::*;

// Re-export the client
#[cfg(feature = "client")]
pub use knightline_client::{
    CancelHandle, ClientConfig, ClientError, DEFAULT_STREAM_BUFFER, Endpoints, LichessClient,
    MAX_STATUS_IDS, MAX_USERS_BY_ID, RecordStream, RequestParams, Result, StreamEnd,
    decode_ndjson, endpoint, stream_response,
};

/// Prelude module for convenient imports.
///
/// ```
/// use knightline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use knightline_types::{Activity, Crosstable, DailyRating, Preferences, User};

    #[cfg(feature = "client")]
    pub use knightline_client::{
        CancelHandle, ClientConfig, ClientError, LichessClient, RecordStream, RequestParams,
        StreamEnd,
    };
}
