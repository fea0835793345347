//! HTTP client for the lichess.org API.
//!
//! This crate provides:
//!
//! - [`LichessClient`] - Authenticated request executor and resource methods
//! - [`RequestParams`] - Description of one outgoing request
//! - [`RecordStream`] - Cancellable stream of newline-delimited JSON records
//! - [`ClientError`] - Error type for every client operation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/knightline/knightline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod account;
mod batch;
mod client;
mod config;
pub mod endpoint;
mod error;
mod relations;
mod request;
mod stream;
mod users;

pub use batch::{MAX_STATUS_IDS, MAX_USERS_BY_ID};
pub use client::LichessClient;
pub use config::{ClientConfig, DEFAULT_STREAM_BUFFER};
pub use endpoint::Endpoints;
pub use error::{ClientError, Result};
pub use request::RequestParams;
pub use stream::{CancelHandle, RecordStream, StreamEnd, decode_ndjson, stream_response};
