use clap::ArgMatches;
use tracing::{error, info};

use lifestream_core::{AppContext, events};

use super::helpers::connect;
use crate::format::print_entries;

pub(crate) fn handle_show_command(
    ctx: &AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches
        .get_one::<String>("id")
        .ok_or("Entry id is required")?;
    let json_output = matches.get_flag("json");
    let client = connect(ctx)?;

    info!(event = "cli.show_started", id = id);

    match client.fetch_by_id(id) {
        Ok(entry) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                print_entries(std::slice::from_ref(&entry), true);
            }

            info!(event = "cli.show_completed", id = id);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to fetch entry '{}': {}", id, e);

            error!(
                event = "cli.show_failed",
                id = id,
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
