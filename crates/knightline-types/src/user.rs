//! User account representation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lichess.org user account.
///
/// Endpoints return different subsets of these fields. Anything missing from
/// the payload keeps its default value, so a followers stream entry carrying
/// only `id` and `username` still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Lowercase user id.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Whether the user is currently connected.
    pub online: bool,
    /// Ratings keyed by performance category (`blitz`, `puzzle`, ...).
    pub perfs: HashMap<String, Performance>,
    /// Account creation time in epoch milliseconds.
    pub created_at: i64,
    /// Whether the account is closed.
    pub disabled: bool,
    /// Whether the account was flagged for terms-of-service violations.
    pub tos_violation: bool,
    /// Whether the account was flagged for rating boosting.
    pub booster: bool,
    /// Free-form profile information.
    pub profile: Profile,
    /// Last seen time in epoch milliseconds.
    pub seen_at: i64,
    /// Whether the user is a patron.
    pub patron: bool,
    /// Time spent playing.
    pub play_time: PlayTime,
    /// Interface language tag.
    pub language: String,
    /// Chess title (`GM`, `NM`, ...), empty when untitled.
    pub title: String,
    /// Profile page URL.
    pub url: String,
    /// URL of the game currently being played, if any.
    pub playing: String,
    /// Number of users this user follows.
    pub nb_following: u32,
    /// Number of users following this user.
    pub nb_followers: u32,
    /// Percentage of games played to completion.
    pub completion_rate: u32,
    /// Game counters.
    pub count: GameCounts,
    /// Whether the user is streaming right now.
    pub streaming: bool,
    /// Whether the authenticated user may follow this user.
    pub followable: bool,
    /// Whether the authenticated user follows this user.
    pub following: bool,
    /// Whether the authenticated user blocks this user.
    pub blocking: bool,
    /// Whether this user follows the authenticated user.
    pub follows_you: bool,
}

impl User {
    /// Returns the account creation time, if the payload carried one.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.created_at)
    }

    /// Returns the last seen time, if the payload carried one.
    #[must_use]
    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.seen_at)
    }

    /// Returns the rating in the given performance category.
    #[must_use]
    pub fn rating(&self, perf: &str) -> Option<i32> {
        self.perfs.get(perf).map(|p| p.rating)
    }
}

/// Converts an epoch-millisecond timestamp, treating zero as absent.
fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

/// Rating state of a user in one performance category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Performance {
    /// Number of rated games played.
    pub games: u32,
    /// Current Glicko-2 rating.
    pub rating: i32,
    /// Rating deviation.
    pub rd: i32,
    /// Rating progression over the last games.
    pub prog: i32,
    /// Whether the rating is still provisional.
    pub prov: bool,
}

/// Free-form profile information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// ISO country code or flag id.
    pub country: String,
    /// Location text.
    pub location: String,
    /// Biography.
    pub bio: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// FIDE rating.
    pub fide_rating: u32,
    /// USCF rating.
    pub uscf_rating: u32,
    /// ECF rating.
    pub ecf_rating: u32,
    /// Newline separated links.
    pub links: String,
}

/// Time spent playing, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayTime {
    /// Total time played.
    pub total: u64,
    /// Time featured on lichess TV.
    pub tv: u64,
}

/// Game counters of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameCounts {
    /// All games.
    pub all: u32,
    /// Rated games.
    pub rated: u32,
    /// Games against the computer.
    pub ai: u32,
    /// Drawn games.
    pub draw: u32,
    /// Drawn games against humans.
    pub draw_h: u32,
    /// Lost games.
    pub loss: u32,
    /// Lost games against humans.
    pub loss_h: u32,
    /// Won games.
    pub win: u32,
    /// Won games against humans.
    pub win_h: u32,
    /// Bookmarked games.
    pub bookmark: u32,
    /// Games in progress.
    pub playing: u32,
    /// Imported games.
    pub import: u32,
    /// Games against the authenticated user.
    pub me: u32,
}
