//! Rating history points.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user's rating at the end of one day.
///
/// On the wire each point is a four element array
/// `[year, month, day, rating]` where `month` is zero-based (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, u32, u32, i32)", into = "(i32, u32, u32, i32)")]
pub struct DailyRating {
    /// Calendar year.
    pub year: i32,
    /// Zero-based month, as sent by the server.
    pub month: u32,
    /// Day of the month.
    pub day: u32,
    /// Rating on that day.
    pub rating: i32,
}

impl DailyRating {
    /// Creates a new rating point with a zero-based month.
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32, rating: i32) -> Self {
        Self {
            year,
            month,
            day,
            rating,
        }
    }

    /// Returns the calendar date, or `None` if the point is out of range.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.checked_add(1)?, self.day)
    }
}

impl From<(i32, u32, u32, i32)> for DailyRating {
    fn from((year, month, day, rating): (i32, u32, u32, i32)) -> Self {
        Self::new(year, month, day, rating)
    }
}

impl From<DailyRating> for (i32, u32, u32, i32) {
    fn from(point: DailyRating) -> Self {
        (point.year, point.month, point.day, point.rating)
    }
}

/// Rating history of one performance category as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfHistory {
    /// Category display name (`Bullet`, `Blitz`, ...).
    pub name: String,
    /// Daily points in chronological order.
    pub points: Vec<DailyRating>,
}
