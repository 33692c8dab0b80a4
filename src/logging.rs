use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

static INITIALIZED: OnceLock<()> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to install global tracing subscriber: {0}")]
    SetGlobal(String),
}

// Later calls are no-ops.
pub fn init(quiet: bool) -> Result<(), LoggingError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }
    fmt()
        .with_env_filter(build_env_filter(quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::SetGlobal(e.to_string()))?;
    let _ = INITIALIZED.set(());
    Ok(())
}

fn build_env_filter(quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(quiet)))
}

fn default_level(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}
