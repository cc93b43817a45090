//! Logging initialization: plain-text tracing output to a log file.
//!
//! The terminal belongs to the UI, so nothing is ever written to stdout.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Default log location: <data dir>/eatwhat/eatwhat.log, or the temp dir
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("eatwhat")
        .join("eatwhat.log")
}

/// Initializes the global tracing subscriber.
///
/// Log level from `RUST_LOG` (e.g. `info`, `debug`); default `info`.
/// Returns the path of the log file.
pub fn init_tracing(log_file: Option<&Path>) -> Result<PathBuf> {
    let path = log_file.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(file))
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_name() {
        let path = default_log_path();
        assert!(path.ends_with("eatwhat/eatwhat.log"));
    }
}
