//! Streamed user list commands.
//!
//! Records are printed as they arrive. With `--limit`, the stream is
//! cancelled as soon as enough users were shown.

use anyhow::{Result, bail};
use futures::{Stream, StreamExt};
use knightline_lib::{CancelHandle, RecordStream, StreamEnd, User};
use tracing::debug;

use crate::display::{Format, USER_HEADER, print_json, user_row};

/// Print a user stream until it ends or `limit` users were printed.
pub(crate) async fn print_stream(
    mut stream: RecordStream<User>,
    cancel: &CancelHandle,
    limit: Option<usize>,
    format: Format,
) -> Result<()> {
    if format == Format::Table {
        println!("{USER_HEADER}");
        println!("{}", "-".repeat(USER_HEADER.len()));
    }

    let shown = drain(&mut stream, limit, |user| emit(&user, format)).await?;

    if format == Format::Table {
        println!("\nTotal: {shown} users");
    }

    if limit.is_some_and(|l| shown >= l) {
        debug!(shown, "limit reached, cancelling stream");
        cancel.cancel();
        return Ok(());
    }

    check_end(stream.termination(), shown)
}

/// Pull records until the stream ends or `limit` were handled.
///
/// Returns the number of records handled.
async fn drain<S, F>(stream: &mut S, limit: Option<usize>, mut handle: F) -> Result<usize>
where
    S: Stream<Item = User> + Unpin,
    F: FnMut(User) -> Result<()>,
{
    let mut shown = 0usize;
    while limit.is_none_or(|l| shown < l) {
        let Some(user) = stream.next().await else {
            break;
        };
        handle(user)?;
        shown += 1;
    }
    Ok(shown)
}

fn emit(user: &User, format: Format) -> Result<()> {
    match format {
        Format::Table => {
            println!("{}", user_row(user, None));
            Ok(())
        }
        // Streams are emitted one record per line in both JSON formats.
        Format::Json | Format::Ndjson => print_json(user, Format::Ndjson),
    }
}

/// Turn an unclean stream ending into an error.
fn check_end(end: Option<&StreamEnd>, shown: usize) -> Result<()> {
    match end {
        Some(end) if !end.is_clean() => bail!("Stream stopped after {shown} users: {end}"),
        _ => Ok(()),
    }
}
