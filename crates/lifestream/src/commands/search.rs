use clap::ArgMatches;
use tracing::{error, info};

use lifestream_core::{AppContext, FetchFilter, events};

use super::helpers::connect;
use crate::format::print_entries;

/// Window used when no subcommand is given.
const DEFAULT_SEARCH_DAYS: i64 = 7;

pub(crate) fn handle_search_command(
    ctx: &AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = FetchFilter::new(
        matches.get_one::<i64>("days").copied(),
        matches.get_one::<String>("tags").map(String::as_str),
        matches.get_one::<String>("keys").map(String::as_str),
    );

    run_search(
        ctx,
        &filter,
        matches.get_flag("show-id"),
        matches.get_flag("json"),
    )
}

pub(crate) fn run_default_search(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let filter = FetchFilter {
        days: Some(DEFAULT_SEARCH_DAYS),
        ..FetchFilter::default()
    };
    run_search(ctx, &filter, false, false)
}

fn run_search(
    ctx: &AppContext,
    filter: &FetchFilter,
    show_id: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = connect(ctx)?;

    info!(
        event = "cli.search_started",
        days = ?filter.days,
        tags = ?filter.tags,
        attrs = ?filter.attrs
    );

    match client.fetch(filter) {
        Ok(entries) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_entries(&entries, show_id);
            }

            info!(event = "cli.search_completed", count = entries.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to fetch entries: {}", e);

            error!(
                event = "cli.search_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
