//! User lookups, leaderboards and head-to-head scores.

use std::collections::{BTreeMap, HashMap};

use knightline_types::{Activity, Crosstable, DailyRating, PerfHistory, User};
use serde::Deserialize;
use tracing::debug;

use crate::batch::{MAX_STATUS_IDS, MAX_USERS_BY_ID, join_ids};
use crate::endpoint::expand;
use crate::{LichessClient, RequestParams, Result};

/// Media type selecting the v3 JSON representation of leaderboards.
const LEADERBOARD_ACCEPT: &str = "application/vnd.lichess.v3+json";

#[derive(Deserialize)]
struct Leaderboard {
    users: Vec<User>,
}

impl LichessClient {
    /// Returns the online status of up to 50 users.
    ///
    /// An empty id list returns an empty result without a request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TooManyIds`](crate::ClientError::TooManyIds)
    /// for more than [`MAX_STATUS_IDS`] ids, before any request is sent.
    pub async fn user_status<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<User>> {
        let Some(joined) = join_ids(ids, MAX_STATUS_IDS)? else {
            debug!("empty status lookup, skipping request");
            return Ok(Vec::new());
        };

        let params = RequestParams::get(&self.endpoints().user_status).query("ids", joined);
        self.fetch_json(params).await
    }

    /// Returns the top 10 players of every performance category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn all_top(&self) -> Result<HashMap<String, Vec<User>>> {
        let params = RequestParams::get(&self.endpoints().top_all_players)
            .header("Accept", LEADERBOARD_ACCEPT);
        self.fetch_json(params).await
    }

    /// Returns the top `count` players of one performance category
    /// (`bullet`, `blitz`, `classical`, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn top(&self, perf: &str, count: u32) -> Result<Vec<User>> {
        let count = count.to_string();
        let url = expand(
            &self.endpoints().top_players,
            &[("count", count.as_str()), ("perf", perf)],
        )?;
        let params = RequestParams::get(url).header("Accept", LEADERBOARD_ACCEPT);
        let board: Leaderboard = self.fetch_json(params).await?;
        Ok(board.users)
    }

    /// Returns the public profile of a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn user(&self, username: &str) -> Result<User> {
        let url = expand(&self.endpoints().user_profile, &[("username", username)])?;
        self.fetch_json(RequestParams::get(url)).await
    }

    /// Returns the rating history of a user, keyed by category name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn user_rating_history(
        &self,
        username: &str,
    ) -> Result<BTreeMap<String, Vec<DailyRating>>> {
        let url = expand(
            &self.endpoints().user_rating_history,
            &[("username", username)],
        )?;
        let history: Vec<PerfHistory> = self.fetch_json(RequestParams::get(url)).await?;

        Ok(history
            .into_iter()
            .map(|perf| (perf.name, perf.points))
            .collect())
    }

    /// Returns the recent activity feed of a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn user_activity(&self, username: &str) -> Result<Vec<Activity>> {
        let url = expand(&self.endpoints().user_activity, &[("username", username)])?;
        self.fetch_json(RequestParams::get(url)).await
    }

    /// Returns up to 300 users by id.
    ///
    /// The ids are sent comma-separated in the request body. An empty id list
    /// returns an empty result without a request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TooManyIds`](crate::ClientError::TooManyIds)
    /// for more than [`MAX_USERS_BY_ID`] ids, before any request is sent.
    pub async fn users_by_id<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<User>> {
        let Some(joined) = join_ids(ids, MAX_USERS_BY_ID)? else {
            debug!("empty bulk lookup, skipping request");
            return Ok(Vec::new());
        };

        let params = RequestParams::post(&self.endpoints().users_by_id).body(joined);
        self.fetch_json(params).await
    }

    /// Returns the users streaming on lichess right now.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn live_streamers(&self) -> Result<Vec<User>> {
        self.fetch_json(RequestParams::get(&self.endpoints().live_streamers))
            .await
    }

    /// Returns the total score of two users against each other.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn crosstable(&self, user1: &str, user2: &str) -> Result<Crosstable> {
        let url = expand(
            &self.endpoints().crosstable,
            &[("user1", user1), ("user2", user2)],
        )?;
        self.fetch_json(RequestParams::get(url)).await
    }
}
