use clap::ArgMatches;
use tracing::{error, info};

use lifestream_core::{AppContext, events};

use super::helpers::{connect, read_body};

pub(crate) fn handle_update_command(
    ctx: &AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches
        .get_one::<String>("id")
        .ok_or("Entry id is required")?;
    let body = read_body(matches)?;
    let client = connect(ctx)?;

    info!(event = "cli.update_started", id = id);

    match client.update(id, &body) {
        Ok(entry) => {
            println!("{}", serde_json::to_string_pretty(&entry)?);
            info!(event = "cli.update_completed", id = id);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to update entry '{}': {}", id, e);

            error!(
                event = "cli.update_failed",
                id = id,
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
