//! Commands on the account owning the token.

use anyhow::{Context, Result, bail};
use knightline_lib::LichessClient;
use serde_json::json;

use crate::commands::users::print_user_detail;
use crate::display::{Format, print_json};

/// Show the account profile.
pub(crate) async fn profile(client: &LichessClient, format: Format) -> Result<()> {
    let me = client
        .my_profile()
        .await
        .context("Failed to fetch account profile")?;

    if format != Format::Table {
        return print_json(&me, format);
    }
    print_user_detail(&me);
    Ok(())
}

/// Show the account email address.
pub(crate) async fn email(client: &LichessClient, format: Format) -> Result<()> {
    let email = client
        .my_email()
        .await
        .context("Failed to fetch account email")?;

    match format {
        Format::Table => println!("{email}"),
        _ => print_json(&json!({ "email": email }), format)?,
    }
    Ok(())
}

/// Show the account preferences.
pub(crate) async fn preferences(client: &LichessClient, format: Format) -> Result<()> {
    let prefs = client
        .my_preferences()
        .await
        .context("Failed to fetch account preferences")?;

    if format != Format::Table {
        return print_json(&prefs, format);
    }
    println!("Dark mode:   {}", prefs.dark);
    println!("Board theme: {}", prefs.theme);
    println!("Piece set:   {}", prefs.piece_set);
    println!("Sound set:   {}", prefs.sound_set);
    println!("Zen mode:    {}", prefs.zen);
    Ok(())
}

/// Show kid mode, or change it when `set` is given.
pub(crate) async fn kid_mode(client: &LichessClient, set: Option<bool>, format: Format) -> Result<()> {
    let (kid, accepted) = match set {
        Some(enabled) => {
            let accepted = client
                .set_my_kid_mode(enabled)
                .await
                .context("Failed to change kid mode")?;
            (enabled, Some(accepted))
        }
        None => (
            client
                .my_kid_mode()
                .await
                .context("Failed to fetch kid mode")?,
            None,
        ),
    };

    match format {
        Format::Table => match accepted {
            Some(true) => println!("Kid mode set to {kid}"),
            Some(false) => bail!("Server refused to change kid mode"),
            None => println!("Kid mode: {}", if kid { "on" } else { "off" }),
        },
        _ => print_json(&json!({ "kid": kid, "ok": accepted }), format)?,
    }
    Ok(())
}
