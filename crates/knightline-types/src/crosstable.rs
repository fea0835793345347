//! Head-to-head scores.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Score of two users playing each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Crosstable {
    /// Points scored, keyed by user id.
    pub users: HashMap<String, f32>,
    /// Number of games played.
    pub nb_games: u32,
    /// Score of the current matchup, when the users are playing right now.
    pub matchup: Option<Box<Self>>,
}

impl Crosstable {
    /// Returns the points scored by the given user.
    #[must_use]
    pub fn score(&self, user_id: &str) -> f32 {
        self.users.get(user_id).copied().unwrap_or_default()
    }
}
