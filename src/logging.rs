//! Structured logging setup with tracing

use tracing_subscriber::EnvFilter;

/// Error raised when the tracing subscriber cannot be installed
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter directive: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to set global subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize structured logging.
///
/// `default_level` is used when `RUST_LOG` is not set, e.g. `"info"` or
/// `"repolens=debug,info"`.
pub fn init_tracing(default_level: &str) -> Result<(), LoggingError> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(env) => EnvFilter::try_new(env)?,
        Err(_) => EnvFilter::try_new(default_level)?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
