use dialoguer::{Input, Password};
use tracing::{error, info};

use lifestream_core::{ApiClient, AppContext, Credentials, events};

pub(crate) fn handle_login_command(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = ctx.resolve_endpoint().inspect_err(|e| {
        eprintln!("❌ {}", e);
        events::log_app_error(e);
    })?;
    let client = ApiClient::new(&endpoint)?;

    interactive_login(ctx, &client)?;
    Ok(())
}

/// Prompt for email and password, log in or register, and store the result
/// under the active profile.
pub(crate) fn interactive_login(
    ctx: &AppContext,
    client: &ApiClient,
) -> Result<Credentials, Box<dyn std::error::Error>> {
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    info!(event = "cli.login_started", endpoint = client.base_url(), email = %email);

    let token = match client.login(&email, &password)? {
        Some(token) => Some(token),
        None => {
            eprintln!("Seems you don't have an account, registering...");
            client.register(&email, &password)?
        }
    };

    let Some(token) = token else {
        eprintln!("Something terribly wrong happened, exiting");
        error!(event = "cli.login_failed", email = %email);
        return Err("Login and registration both failed".into());
    };

    let credentials = Credentials::new(email, token);
    ctx.store_active_credentials(&credentials).inspect_err(|e| {
        eprintln!("❌ Failed to store credentials: {}", e);
        events::log_app_error(e);
    })?;

    eprintln!("Success!");
    info!(event = "cli.login_completed", email = %credentials.email);

    Ok(credentials)
}
