use clap::ArgMatches;
use tracing::{error, info};

use lifestream_core::{AppContext, events};

use super::helpers::connect;
use crate::format::format_tag_stats;

pub(crate) fn handle_stats_command(
    ctx: &AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let client = connect(ctx)?;

    info!(event = "cli.stats_started");

    match client.stats() {
        Ok(stats) => {
            match format_tag_stats(&stats).filter(|_| !json_output) {
                Some(rows) if rows.is_empty() => println!("No tags yet."),
                Some(rows) => rows.iter().for_each(|row| println!("{}", row)),
                // --json, or a shape we cannot tabulate
                None => println!("{}", serde_json::to_string_pretty(&stats)?),
            }

            info!(event = "cli.stats_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to fetch tag stats: {}", e);

            error!(
                event = "cli.stats_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
