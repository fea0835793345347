//! knightline CLI - Command-line access to the lichess.org API.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use knightline_lib::{ClientConfig, LichessClient};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "knightline")]
#[command(about = "Command-line client for the lichess.org API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Personal API token
    #[arg(long, env = "LICHESS_TOKEN", hide_env_values = true, global = true, default_value = "")]
    token: String,

    /// Base URL of the lichess server
    #[arg(long, env = "LICHESS_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    format: Format,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a user's public profile
    User {
        /// Username
        username: String,
    },

    /// Show the online status of up to 50 users
    Status {
        /// User ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Look up to 300 users by id
    Users {
        /// User ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Show leaderboards (all categories when no category is given)
    Top {
        /// Performance category (bullet, blitz, rapid, classical, ...)
        perf: Option<String>,

        /// Number of players to show for one category
        #[arg(short, long, default_value = "10")]
        count: u32,
    },

    /// Show a user's rating history
    History {
        /// Username
        username: String,
    },

    /// Show a user's recent activity
    Activity {
        /// Username
        username: String,
    },

    /// List users streaming right now
    Streamers,

    /// Show the score of two users against each other
    Crosstable {
        /// First user
        user1: String,

        /// Second user
        user2: String,
    },

    /// Stream the users following someone
    Followers {
        /// Username
        username: String,

        /// Stop after this many users
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Stream the users someone follows
    Following {
        /// Username
        username: String,

        /// Stop after this many users
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Stream the members of a team
    Team {
        /// Team id
        team: String,

        /// Stop after this many users
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Inspect the account owning the token
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
}

/// Actions on the authenticated account.
#[derive(Subcommand)]
enum AccountAction {
    /// Show the account profile
    Profile,

    /// Show the account email address
    Email,

    /// Show the account preferences
    Preferences,

    /// Show or change kid mode
    Kid {
        /// Enable (true) or disable (false) kid mode
        #[arg(long)]
        set: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut config = ClientConfig::default().with_token(cli.token);
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    let client = LichessClient::new(config).context("Failed to create lichess client")?;
    let format = cli.format;

    match command {
        Commands::User { username } => commands::users::user(&client, &username, format).await,
        Commands::Status { ids } => commands::users::status(&client, &ids, format).await,
        Commands::Users { ids } => commands::users::by_id(&client, &ids, format).await,
        Commands::Top { perf, count } => {
            commands::users::top(&client, perf.as_deref(), count, format).await
        }
        Commands::History { username } => {
            commands::users::history(&client, &username, format).await
        }
        Commands::Activity { username } => {
            commands::users::activity(&client, &username, format).await
        }
        Commands::Streamers => commands::users::streamers(&client, format).await,
        Commands::Crosstable { user1, user2 } => {
            commands::users::crosstable(&client, &user1, &user2, format).await
        }
        Commands::Followers { username, limit } => {
            let (stream, cancel) = client
                .followers(&username)
                .await
                .with_context(|| format!("Failed to list followers of {username}"))?;
            commands::relations::print_stream(stream, &cancel, limit, format).await
        }
        Commands::Following { username, limit } => {
            let (stream, cancel) = client
                .following(&username)
                .await
                .with_context(|| format!("Failed to list users followed by {username}"))?;
            commands::relations::print_stream(stream, &cancel, limit, format).await
        }
        Commands::Team { team, limit } => {
            let (stream, cancel) = client
                .team_members(&team)
                .await
                .with_context(|| format!("Failed to list members of team {team}"))?;
            commands::relations::print_stream(stream, &cancel, limit, format).await
        }
        Commands::Account { action } => match action {
            AccountAction::Profile => commands::account::profile(&client, format).await,
            AccountAction::Email => commands::account::email(&client, format).await,
            AccountAction::Preferences => commands::account::preferences(&client, format).await,
            AccountAction::Kid { set } => commands::account::kid_mode(&client, set, format).await,
        },
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins over the `-v` count when set.
fn init_tracing(verbose: u8) {
    let base_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "warn,knightline=info,knightline_client=info",
            2 => "info,knightline=debug,knightline_client=debug",
            _ => "debug,knightline=trace,knightline_client=trace",
        }
        .to_string()
    });

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
