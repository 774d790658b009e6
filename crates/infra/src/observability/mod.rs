//! Structured logging setup
//!
//! `RUST_LOG` wins when set; otherwise the filter from [`LoggingConfig`] is
//! used. Output goes to stderr so `classcal parse` can keep stdout for JSON.

use classcal_domain::constants::DEFAULT_LOG_FILTER;
use classcal_domain::{ClassCalError, LoggingConfig, Result};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Run `f` with a temporary stderr subscriber at the default filter.
///
/// Covers the work done before the configured subscriber can be installed,
/// such as loading the configuration itself.
pub fn with_startup_logging<T>(f: impl FnOnce() -> T) -> T {
    with_startup_logging_to(std::io::stderr, f)
}

fn with_startup_logging_to<W, T>(writer: W, f: impl FnOnce() -> T) -> T
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).finish();
    tracing::subscriber::with_default(subscriber, f)
}

/// Install the global tracing subscriber.
///
/// # Errors
/// Returns `ClassCalError::Config` if the configured filter directive is
/// invalid, or `ClassCalError::Internal` if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    installed.map_err(|e| ClassCalError::Internal(format!("failed to install tracing subscriber: {e}")))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.filter).map_err(|e| {
        ClassCalError::Config(format!("Invalid log filter {:?}: {}", config.filter, e))
    })
}
