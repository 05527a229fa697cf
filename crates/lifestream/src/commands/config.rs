use clap::ArgMatches;
use serde_json::Value;
use tracing::{error, info};

use lifestream_core::{AppContext, ConfigError, events};

pub(crate) fn handle_config_command(
    ctx: &AppContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(assignment) = matches.get_one::<String>("set") {
        let Some((key, value)) = parse_assignment(assignment) else {
            eprintln!("❌ Expected KEY=VALUE, got '{}'", assignment);
            error!(event = "cli.config_invalid_assignment", assignment = assignment);
            return Err("Invalid assignment".into());
        };

        info!(event = "cli.config_set_started", key = key);
        ctx.set_param(key, value).inspect_err(|e| report("set", key, e))?;
        println!("{} = {}", key, value);
        info!(event = "cli.config_set_completed", key = key);
    } else if let Some(key) = matches.get_one::<String>("get") {
        let value = ctx.get_param(key).inspect_err(|e| report("get", key, e))?;
        match value {
            Some(value) => println!("{} = {}", key, display_value(&value)),
            None => println!("{} is not set", key),
        }
    } else if let Some(key) = matches.get_one::<String>("unset") {
        info!(event = "cli.config_unset_started", key = key);
        ctx.unset_param(key).inspect_err(|e| report("unset", key, e))?;
        println!("{} unset", key);
        info!(event = "cli.config_unset_completed", key = key);
    } else if matches.get_flag("reset") {
        ctx.reset_params().inspect_err(|e| report("reset", "", e))?;
        println!("Config reset to defaults");
        info!(event = "cli.config_reset_completed");
    } else if matches.get_flag("path") {
        let path = ctx.config.ensure().inspect_err(|e| report("path", "", e))?;
        println!("{}", path.display());
    } else {
        error!(event = "cli.config_no_operation");
        return Err("No config operation given".into());
    }

    Ok(())
}

/// Split `key=value` at the first `=`; the value may itself contain `=`.
fn parse_assignment(assignment: &str) -> Option<(&str, &str)> {
    assignment
        .split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
}

/// Strings print bare, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn report(operation: &str, key: &str, e: &ConfigError) {
    eprintln!("❌ Config {} failed: {}", operation, e);
    error!(
        event = "cli.config_failed",
        operation = operation,
        key = key,
        error = %e
    );
    events::log_app_error(e);
}
