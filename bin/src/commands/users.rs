//! User lookup commands.

use anyhow::{Context, Result};
use knightline_lib::{LichessClient, User};

use crate::display::{Format, format_play_time, format_time, print_json, print_users};

/// Show one user's profile.
pub(crate) async fn user(client: &LichessClient, username: &str, format: Format) -> Result<()> {
    let user = client
        .user(username)
        .await
        .with_context(|| format!("Failed to fetch user {username}"))?;

    if format != Format::Table {
        return print_json(&user, format);
    }
    print_user_detail(&user);
    Ok(())
}

/// Print the profile fields worth reading in a terminal.
pub(crate) fn print_user_detail(user: &User) {
    println!("Username:   {}", user.username);
    if !user.title.is_empty() {
        println!("Title:      {}", user.title);
    }
    println!("Online:     {}", if user.online { "yes" } else { "no" });
    println!("Created:    {}", format_time(user.created()));
    println!("Last seen:  {}", format_time(user.last_seen()));
    println!("Play time:  {}", format_play_time(user.play_time.total));
    println!(
        "Games:      {} ({} won, {} lost, {} drawn)",
        user.count.all, user.count.win, user.count.loss, user.count.draw
    );
    if !user.url.is_empty() {
        println!("URL:        {}", user.url);
    }

    if user.perfs.is_empty() {
        return;
    }
    let mut perfs: Vec<_> = user.perfs.iter().collect();
    perfs.sort_by(|a, b| b.1.games.cmp(&a.1.games).then_with(|| a.0.cmp(b.0)));

    println!("\n{:<16} {:>6} {:>5} {:>8}", "PERF", "RATING", "PROG", "GAMES");
    println!("{}", "-".repeat(38));
    for (name, perf) in perfs {
        let rating = if perf.prov {
            format!("{}?", perf.rating)
        } else {
            perf.rating.to_string()
        };
        println!(
            "{:<16} {:>6} {:>+5} {:>8}",
            name, rating, perf.prog, perf.games
        );
    }
}

/// Show the online status of several users.
pub(crate) async fn status(client: &LichessClient, ids: &[String], format: Format) -> Result<()> {
    let users = client
        .user_status(ids)
        .await
        .context("Failed to fetch user status")?;
    print_users(&users, None, format)
}

/// Look users up by id.
pub(crate) async fn by_id(client: &LichessClient, ids: &[String], format: Format) -> Result<()> {
    let users = client
        .users_by_id(ids)
        .await
        .context("Failed to fetch users")?;
    print_users(&users, None, format)
}

/// Show one leaderboard, or the top 10 of every category.
pub(crate) async fn top(
    client: &LichessClient,
    perf: Option<&str>,
    count: u32,
    format: Format,
) -> Result<()> {
    if let Some(perf) = perf {
        let users = client
            .top(perf, count)
            .await
            .with_context(|| format!("Failed to fetch {perf} leaderboard"))?;
        return print_users(&users, Some(perf), format);
    }

    let boards = client
        .all_top()
        .await
        .context("Failed to fetch leaderboards")?;
    if format != Format::Table {
        return print_json(&boards, format);
    }

    let mut names: Vec<_> = boards.keys().collect();
    names.sort();
    for name in names {
        println!("== {name} ==");
        print_users(&boards[name], Some(name), format)?;
        println!();
    }
    Ok(())
}

/// Show a user's rating history, one line per category.
pub(crate) async fn history(client: &LichessClient, username: &str, format: Format) -> Result<()> {
    let history = client
        .user_rating_history(username)
        .await
        .with_context(|| format!("Failed to fetch rating history of {username}"))?;

    if format != Format::Table {
        return print_json(&history, format);
    }

    println!("{:<20} {:>7} {:<12} {:>7}", "PERF", "POINTS", "LAST", "RATING");
    println!("{}", "-".repeat(49));
    for (name, points) in &history {
        let Some(last) = points.last() else {
            continue;
        };
        let date = last
            .date()
            .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());
        println!(
            "{:<20} {:>7} {:<12} {:>7}",
            name,
            points.len(),
            date,
            last.rating
        );
    }
    Ok(())
}

/// Show a user's recent activity.
pub(crate) async fn activity(client: &LichessClient, username: &str, format: Format) -> Result<()> {
    let feed = client
        .user_activity(username)
        .await
        .with_context(|| format!("Failed to fetch activity of {username}"))?;

    if format != Format::Table {
        return print_json(&feed, format);
    }

    for entry in &feed {
        println!("{}", format_time(entry.interval.start_time()));
        let mut games: Vec<_> = entry.games.iter().collect();
        games.sort_by_key(|(name, _)| *name);
        for (name, games) in games {
            println!(
                "  {name}: +{} -{} ={} ({:+})",
                games.win,
                games.loss,
                games.draw,
                games.rp.delta()
            );
        }
        if entry.tournaments.nb > 0 {
            println!("  tournaments: {}", entry.tournaments.nb);
        }
        for team in &entry.teams {
            println!("  joined team {}", team.name);
        }
    }
    Ok(())
}

/// List users streaming right now.
pub(crate) async fn streamers(client: &LichessClient, format: Format) -> Result<()> {
    let users = client
        .live_streamers()
        .await
        .context("Failed to fetch live streamers")?;
    print_users(&users, None, format)
}

/// Show the score of two users against each other.
pub(crate) async fn crosstable(
    client: &LichessClient,
    user1: &str,
    user2: &str,
    format: Format,
) -> Result<()> {
    let table = client
        .crosstable(user1, user2)
        .await
        .with_context(|| format!("Failed to fetch crosstable of {user1} and {user2}"))?;

    if format != Format::Table {
        return print_json(&table, format);
    }

    let (id1, id2) = (user1.to_lowercase(), user2.to_lowercase());
    println!(
        "{user1} {} - {} {user2} in {} games",
        table.score(&id1),
        table.score(&id2),
        table.nb_games
    );
    if let Some(matchup) = &table.matchup {
        println!(
            "Current matchup: {} - {} in {} games",
            matchup.score(&id1),
            matchup.score(&id2),
            matchup.nb_games
        );
    }
    Ok(())
}
