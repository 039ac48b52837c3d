//! Log setup. The board owns the terminal, so records go to a file.

use std::{fs::File, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber when a log file is requested.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init(log_file: Option<&Path>, default_filter: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let subscriber = file_subscriber(path, default_filter)?;
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;
    Ok(())
}

fn file_subscriber(
    path: &Path,
    default_filter: &str,
) -> Result<impl Subscriber + Send + Sync + use<>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("Invalid log filter {:?}", default_filter))?;

    Ok(fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .finish())
}
