//! Streamed user lists: follow relations and team members.
//!
//! Each method returns a [`RecordStream`] delivering users as the server
//! sends them, together with a [`CancelHandle`] to stop early.

use knightline_types::User;

use crate::endpoint::expand;
use crate::stream::{CancelHandle, RecordStream};
use crate::{LichessClient, RequestParams, Result};

impl LichessClient {
    /// Streams the users followed by `username`.
    ///
    /// # Errors
    ///
    /// Fails before any record is produced if the request cannot be sent or
    /// the server rejects it.
    pub async fn following(&self, username: &str) -> Result<(RecordStream<User>, CancelHandle)> {
        self.stream_users(&self.endpoints().relation_following, "username", username)
            .await
    }

    /// Streams the users following `username`.
    ///
    /// # Errors
    ///
    /// Fails before any record is produced if the request cannot be sent or
    /// the server rejects it.
    pub async fn followers(&self, username: &str) -> Result<(RecordStream<User>, CancelHandle)> {
        self.stream_users(&self.endpoints().relation_followers, "username", username)
            .await
    }

    /// Streams the members of team `team_id`, newest first.
    ///
    /// # Errors
    ///
    /// Fails before any record is produced if the request cannot be sent or
    /// the server rejects it.
    pub async fn team_members(&self, team_id: &str) -> Result<(RecordStream<User>, CancelHandle)> {
        self.stream_users(&self.endpoints().team_members, "team", team_id)
            .await
    }

    async fn stream_users(
        &self,
        template: &str,
        placeholder: &str,
        value: &str,
    ) -> Result<(RecordStream<User>, CancelHandle)> {
        let url = expand(template, &[(placeholder, value)])?;
        self.fetch_stream(RequestParams::get(url)).await
    }
}
