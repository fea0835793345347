//! Record types for the knightline lichess.org client.
//!
//! This crate provides the data structures decoded from API responses:
//!
//! - [`User`] - A user account with ratings, profile and game counts
//! - [`Preferences`] - Account UI preferences
//! - [`Activity`] - One interval of a user's activity feed
//! - [`ArenaTournament`] - Arena tournament summary
//! - [`DailyRating`] - A single rating history point
//! - [`Crosstable`] - Head-to-head score between two users

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/knightline/knightline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod activity;
mod crosstable;
mod preferences;
mod rating;
mod tournament;
mod user;

pub use activity::{
    Activity, CorrespondenceEnds, CorrespondenceMoves, GameActivity, GameByPlayer, GameOpponent,
    Interval, Post, Practice, RatingChange, TeamActivity, Topic, TournamentActivity,
    TournamentScore,
};
pub use crosstable::Crosstable;
pub use preferences::Preferences;
pub use rating::{DailyRating, PerfHistory};
pub use tournament::{ArenaTournament, Clock, Opening, Schedule, TournamentPerf, Variant};
pub use user::{GameCounts, Performance, PlayTime, Profile, User};
