use crate::error::CliError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset. `--verbose` only raises our own
/// crates to debug; reqwest and hyper stay at warn either way.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,capsense=debug,capsense_cli=debug,capsense_client=debug"
    } else {
        "warn,capsense=info,capsense_cli=info,capsense_client=info"
    }
}

/// Initialize logging with environment-based log level filtering
pub fn init_logging(verbose: bool) -> Result<(), CliError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .map_err(|e| CliError::Config(format!("Failed to create log filter: {}", e)))?;

    // Tables, JSON and generated types go to stdout and must stay pipeable,
    // so log lines are written to stderr.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
