//! Arena tournament records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::User;

/// Summary of an arena tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArenaTournament {
    /// Tournament id.
    pub id: String,
    /// Id of the creator.
    pub created_by: String,
    /// Pairing system, usually `arena`.
    pub system: String,
    /// Duration in minutes.
    pub minutes: u32,
    /// Time control.
    pub clock: Clock,
    /// Whether games are rated.
    pub rated: bool,
    /// Full display name.
    pub full_name: String,
    /// Short name.
    pub name: String,
    /// Number of registered players.
    pub nb_players: u32,
    /// Chess variant.
    pub variant: Variant,
    /// Start time in epoch milliseconds.
    pub starts_at: i64,
    /// End time in epoch milliseconds.
    pub finishes_at: i64,
    /// Status code (10 created, 20 started, 30 finished).
    pub status: i32,
    /// Performance category.
    pub perf: TournamentPerf,
    /// Seconds left before the start.
    pub seconds_to_start: i64,
    /// Whether entry is limited by a maximum rating.
    pub has_max_rating: bool,
    /// Whether the tournament is private.
    pub private: bool,
    /// Custom starting position.
    pub position: Opening,
    /// Schedule information for official tournaments.
    pub schedule: Schedule,
    /// Winner, once finished.
    pub winner: Option<User>,
}

impl ArenaTournament {
    /// Returns the start time.
    #[must_use]
    pub fn start(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.starts_at)
    }

    /// Returns the finish time.
    #[must_use]
    pub fn finish(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.finishes_at)
    }
}

/// Chess clock settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Clock {
    /// Initial time in seconds.
    pub initial: u32,
    /// Increment in seconds.
    pub increment: u32,
    /// Estimated total time in seconds.
    pub total_time: u32,
}

/// Chess variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    /// Variant key (`standard`, `chess960`, ...).
    pub key: String,
    /// Short name.
    pub short: String,
    /// Display name.
    pub name: String,
}

/// Performance category of a tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentPerf {
    /// Icon glyph.
    pub icon: String,
    /// Category key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Sort position.
    pub position: i32,
}

/// Tournament schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// Frequency (`hourly`, `daily`, ...).
    pub freq: String,
    /// Speed (`bullet`, `blitz`, ...).
    pub speed: String,
}

/// Opening or starting position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Opening {
    /// ECO code.
    pub eco: String,
    /// Position in FEN.
    pub fen: String,
    /// Opening name.
    pub name: String,
    /// Half-move count.
    pub ply: u32,
    /// Wikibooks path.
    pub wiki_path: String,
}
