use clap::ArgMatches;
use tracing::{error, info};

use lifestream_core::{AppContext, events};

use super::helpers::{connect, read_body};

pub(crate) fn handle_save_command(
    ctx: &AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = read_body(matches)?;
    let client = connect(ctx)?;

    info!(event = "cli.save_started", length = body.len());

    match client.save(&body, None) {
        Ok(entry) => {
            println!("{}", serde_json::to_string_pretty(&entry)?);
            info!(event = "cli.save_completed", id = %entry.id);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to save entry: {}", e);

            error!(
                event = "cli.save_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
