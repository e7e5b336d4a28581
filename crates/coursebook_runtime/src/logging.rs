//! Tracing subscriber setup for the binary.
//!
//! The filter comes from `COURSEBOOK_LOG`, then `RUST_LOG`, then a default
//! derived from [`RuntimeConfig::verbose`]. Logs always go to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::RuntimeConfig;
use crate::error::Result;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "COURSEBOOK_LOG";

/// Returns the filter directives used when no environment filter is set.
#[must_use]
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,coursebook_storage=debug,coursebook_runtime=debug"
    } else {
        "warn,coursebook_storage=info,coursebook_runtime=info"
    }
}

/// Installs the global subscriber.
pub fn init(config: &RuntimeConfig) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config.verbose)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}
