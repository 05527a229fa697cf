use std::io::{IsTerminal, Read};

use clap::ArgMatches;
use dialoguer::Editor;
use tracing::{error, info};

use lifestream_core::{ApiClient, AppContext, events};

use super::login;

/// Client for the active profile, logged in.
///
/// Runs the interactive login when the active profile has no stored
/// credentials; fails if that login does not succeed.
pub fn connect(ctx: &AppContext) -> Result<ApiClient, Box<dyn std::error::Error>> {
    let endpoint = ctx.resolve_endpoint().inspect_err(|e| {
        eprintln!("❌ {}", e);
        events::log_app_error(e);
    })?;
    let client = ApiClient::new(&endpoint)?;

    let credentials = match ctx.active_credentials()? {
        Some(credentials) => credentials,
        None => {
            eprintln!("Please login or register first");
            info!(event = "cli.login_required", endpoint = %endpoint);
            login::interactive_login(ctx, &client)?
        }
    };

    Ok(client.with_session_token(credentials.session_token))
}

/// Entry text from `--file`, the positional words, or stdin, in that order.
///
/// An interactive stdin opens `$EDITOR` instead of waiting for EOF.
pub fn read_body(matches: &ArgMatches) -> Result<String, Box<dyn std::error::Error>> {
    let words: Option<Vec<&str>> = matches
        .get_many::<String>("words")
        .map(|words| words.map(String::as_str).collect());
    let file = matches.get_one::<String>("file").map(String::as_str);

    let stdin = std::io::stdin();
    if words.is_none() && file.is_none() && stdin.is_terminal() {
        info!(event = "cli.body_editor_opened");
        let text = Editor::new().edit("")?.unwrap_or_default();
        return finish_body(text);
    }

    read_body_from(words.as_deref(), file, stdin.lock())
}

fn read_body_from(
    words: Option<&[&str]>,
    file: Option<&str>,
    mut stdin: impl Read,
) -> Result<String, Box<dyn std::error::Error>> {
    let body = match (file, words) {
        (Some(path), _) => std::fs::read_to_string(path).inspect_err(|e| {
            error!(event = "cli.body_read_failed", path = path, error = %e);
        })?,
        (None, Some(words)) => words.join(" "),
        (None, None) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };

    finish_body(body)
}

fn finish_body(body: String) -> Result<String, Box<dyn std::error::Error>> {
    let body = body.trim_end().to_string();
    if body.trim().is_empty() {
        eprintln!("❌ Entry text is empty");
        error!(event = "cli.body_empty");
        return Err("Entry text is empty".into());
    }
    Ok(body)
}
