use clap::ArgMatches;
use tracing::error;

use lifestream_core::{AppContext, events};

pub mod helpers;

mod completions;
mod config;
mod delete;
mod login;
mod save;
mod search;
mod show;
mod stats;
mod update;

pub fn run_command(
    ctx: &AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("login", _)) => login::handle_login_command(ctx),
        Some(("save", sub_matches)) => save::handle_save_command(ctx, sub_matches),
        Some(("update", sub_matches)) => update::handle_update_command(ctx, sub_matches),
        Some(("search", sub_matches)) => search::handle_search_command(ctx, sub_matches),
        Some(("show", sub_matches)) => show::handle_show_command(ctx, sub_matches),
        Some(("delete", sub_matches)) => delete::handle_delete_command(ctx, sub_matches),
        Some(("stats", sub_matches)) => stats::handle_stats_command(ctx, sub_matches),
        Some(("config", sub_matches)) => config::handle_config_command(ctx, sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        None => search::run_default_search(ctx),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
