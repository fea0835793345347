//! User activity feed.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ArenaTournament;

/// One interval (usually a day) of a user's activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    /// Covered time span.
    pub interval: Interval,
    /// Game results keyed by performance category.
    pub games: HashMap<String, GameActivity>,
    /// Puzzle results.
    pub puzzles: GameActivity,
    /// Tournament participation.
    pub tournaments: TournamentActivity,
    /// Practice lessons.
    #[serde(rename = "practice")]
    pub practices: Vec<Practice>,
    /// Correspondence games waiting for a move.
    pub correspondence_moves: CorrespondenceMoves,
    /// Correspondence games that ended.
    pub correspondence_ends: CorrespondenceEnds,
    /// Teams joined.
    pub teams: Vec<TeamActivity>,
    /// Forum posts, grouped by topic.
    pub posts: Vec<Topic>,
}

/// Time span in epoch milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interval {
    /// Start of the span.
    pub start: i64,
    /// End of the span.
    pub end: i64,
}

impl Interval {
    /// Returns the start as a UTC timestamp.
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.start)
    }

    /// Returns the end as a UTC timestamp.
    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.end)
    }
}

/// Results of finished games and the rating change they caused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameActivity {
    /// Wins.
    pub win: u32,
    /// Losses.
    pub loss: u32,
    /// Draws.
    pub draw: u32,
    /// Rating before and after.
    pub rp: RatingChange,
}

/// Rating difference over an interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingChange {
    /// Rating at the start.
    pub before: i32,
    /// Rating at the end.
    pub after: i32,
}

impl RatingChange {
    /// Returns the signed rating difference.
    #[must_use]
    pub const fn delta(&self) -> i32 {
        self.after - self.before
    }
}

/// Tournament participation over an interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentActivity {
    /// Number of tournaments played.
    pub nb: u32,
    /// Best results.
    pub best: Vec<TournamentScore>,
}

/// Result of one tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentScore {
    /// The tournament.
    pub tournament: ArenaTournament,
    /// Games played.
    pub nb_games: u32,
    /// Points scored.
    pub score: u32,
    /// Final rank.
    pub rank: u32,
    /// Rank as a percentile.
    pub rank_percent: u32,
}

/// A practice lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Practice {
    /// Lesson URL.
    pub url: String,
    /// Lesson name.
    pub name: String,
    /// Positions completed.
    pub nb_positions: u32,
}

/// Correspondence games waiting for a move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrespondenceMoves {
    /// Moves played.
    pub nb: u32,
    /// Games involved.
    pub games: Vec<GameByPlayer>,
}

/// Correspondence games that ended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrespondenceEnds {
    /// Aggregate score.
    pub score: GameActivity,
    /// Games involved.
    pub games: Vec<GameByPlayer>,
}

/// A game seen from one player's side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameByPlayer {
    /// Game id.
    pub id: String,
    /// Game id including the player suffix.
    pub full_id: String,
    /// Game id as sent by the board API.
    #[serde(rename = "gameID")]
    pub game_id: String,
    /// Side played (`white` or `black`).
    pub color: String,
    /// Game URL.
    pub url: String,
    /// Variant key.
    pub variant: String,
    /// Speed category.
    pub speed: String,
    /// Performance category.
    pub perf: String,
    /// Whether the game is rated.
    pub rated: bool,
    /// Opponent.
    pub opponent: GameOpponent,
    /// Current position.
    pub fen: String,
    /// Whether it is this player's turn.
    pub is_my_turn: bool,
}

/// Opponent in a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOpponent {
    /// Opponent id.
    pub id: String,
    /// Opponent name.
    pub user: String,
    /// Opponent rating.
    pub rating: i32,
}

/// A team joined during the interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamActivity {
    /// Team URL.
    pub url: String,
    /// Team name.
    pub name: String,
}

/// A forum topic with the user's posts in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Topic {
    /// Topic URL.
    pub topic_url: String,
    /// Topic title.
    pub topic_name: String,
    /// Posts.
    pub posts: Vec<Post>,
}

/// A forum post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Post URL.
    pub url: String,
    /// Post text.
    pub text: String,
}
