//! Display utilities and output formatting for the knightline CLI.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use knightline_lib::User;
use serde::Serialize;

/// Output format for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Table,
    Json,
    Ndjson,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        };
        write!(f, "{name}")
    }
}

/// Column header matching [`user_row`].
pub(crate) const USER_HEADER: &str = "USERNAME             TITLE ONLINE  RATING";

/// Formats one user as a table row. The rating column shows `perf`, or `-`.
pub(crate) fn user_row(user: &User, perf: Option<&str>) -> String {
    let name = if user.username.is_empty() {
        &user.id
    } else {
        &user.username
    };
    let rating = perf
        .and_then(|p| user.rating(p))
        .map_or_else(|| "-".to_string(), |r| r.to_string());

    format!(
        "{:<20} {:<5} {:<7} {:>6}",
        name,
        user.title,
        if user.online { "yes" } else { "no" },
        rating
    )
}

/// Prints a value as pretty JSON or as a single NDJSON line.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T, format: Format) -> Result<()> {
    let text = match format {
        Format::Ndjson => serde_json::to_string(value)?,
        Format::Json | Format::Table => serde_json::to_string_pretty(value)?,
    };
    println!("{text}");
    Ok(())
}

/// Prints a list of users in the requested format.
pub(crate) fn print_users(users: &[User], perf: Option<&str>, format: Format) -> Result<()> {
    match format {
        Format::Table => {
            println!("{USER_HEADER}");
            println!("{}", "-".repeat(USER_HEADER.len()));
            for user in users {
                println!("{}", user_row(user, perf));
            }
            println!("\nTotal: {} users", users.len());
        }
        Format::Json => print_json(users, format)?,
        Format::Ndjson => {
            for user in users {
                print_json(user, format)?;
            }
        }
    }
    Ok(())
}

/// Formats an optional timestamp as a date and time, or `-`.
pub(crate) fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

/// Formats a number of seconds as days, hours and minutes.
pub(crate) fn format_play_time(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use knightline_lib::Performance;

    use super::*;

    fn sample_user() -> User {
        User {
            id: "georges".to_string(),
            username: "Georges".to_string(),
            title: "NM".to_string(),
            online: true,
            perfs: HashMap::from([(
                "blitz".to_string(),
                Performance {
                    rating: 1609,
                    ..Performance::default()
                },
            )]),
            ..User::default()
        }
    }

    #[test]
    fn test_user_row_with_rating() {
        let row = user_row(&sample_user(), Some("blitz"));
        assert_eq!(row.len(), USER_HEADER.len());
        assert!(row.starts_with("Georges "));
        assert!(row.ends_with("  1609"));
        assert!(row.contains(" yes "));
    }

    #[test]
    fn test_user_row_falls_back_to_id() {
        let user = User {
            id: "anon".to_string(),
            ..User::default()
        };
        let row = user_row(&user, Some("bullet"));
        assert!(row.starts_with("anon "));
        assert!(row.ends_with('-'));
        assert!(row.contains(" no "));
    }

    #[test]
    fn test_format_play_time() {
        assert_eq!(format_play_time(0), "0m");
        assert_eq!(format_play_time(59), "0m");
        assert_eq!(format_play_time(3_660), "1h 1m");
        assert_eq!(format_play_time(3_296_897), "38d 3h 48m");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(None), "-");
        let time = DateTime::from_timestamp_millis(1_290_415_680_000);
        assert_eq!(format_time(time), "2010-11-22 08:48");
    }

    #[test]
    fn test_format_display() {
        assert_eq!(Format::Ndjson.to_string(), "ndjson");
        assert_eq!(Format::Table.to_string(), "table");
    }
}
