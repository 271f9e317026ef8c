use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Install the diagnostics subscriber.
///
/// Diagnostics go to stderr and never into the sync log. The level comes
/// from `verbose` alone: `warn` by default, `debug` when set.
pub fn init(verbose: bool) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .compact();

    let level = if verbose { "debug" } else { "warn" };
    let filter_layer =
        EnvFilter::try_new(level).map_err(|e| CliError::diagnostics(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::diagnostics(e.to_string()))
}
