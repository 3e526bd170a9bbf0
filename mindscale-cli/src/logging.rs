use crate::error::CliError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize logging with environment-based log level filtering.
///
/// Logs go to stderr so the form and report own stdout. Quiet (`warn`)
/// unless `--verbose` asks for `debug`.
pub fn init_logging(verbose: bool) -> Result<(), CliError> {
    let default_level = default_level(verbose);

    // RUST_LOG wins over the flag
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::Config(format!("Failed to create log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
