use clap::ArgMatches;
use tracing::{error, info};

use lifestream_core::{AppContext, events};

use super::helpers::connect;

pub(crate) fn handle_delete_command(
    ctx: &AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches
        .get_one::<String>("id")
        .ok_or("Entry id is required")?;
    let client = connect(ctx)?;

    info!(event = "cli.delete_started", id = id);

    match client.delete(id) {
        Ok(()) => {
            println!("Message {} was deleted", id);
            info!(event = "cli.delete_completed", id = id);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to delete entry '{}': {}", id, e);

            error!(
                event = "cli.delete_failed",
                id = id,
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
