use lifestream_core::{AppContext, init_logging};

mod app;
mod commands;
mod format;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Logging must be up before the context resolves the config directory
    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    let ctx = AppContext::from_env();
    commands::run_command(&ctx, &matches)?;

    Ok(())
}
