use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging.
///
/// Logs are JSON lines on stderr so stdout stays clean for entries and config values.
/// By default only errors are emitted; `verbose` raises the level to info.
pub fn init_logging(verbose: bool) {
    let directive = if verbose {
        "lifestream=info"
    } else {
        "lifestream=error"
    };

    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
