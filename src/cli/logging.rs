//! Logging initialization

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Initialize logging based on debug flag
///
/// Logs go to a temp file so the TUI keeps the terminal. Returns the log file
/// path if debug logging is enabled.
pub fn init_logging(debug: bool) -> Result<Option<PathBuf>> {
    if !debug {
        // Silent by default
        return Ok(None);
    }

    let temp_file = tempfile::Builder::new()
        .prefix("secrets9s-")
        .suffix(".log")
        .tempfile()
        .ok()
        // Keep the file after exit so it can be read
        .and_then(|f| f.keep().ok())
        .map(|(_, path)| path)
        .unwrap_or_else(|| std::env::temp_dir().join(format!("secrets9s-{}.log", std::process::id())));

    let file = std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&temp_file)
        .with_context(|| format!("Failed to open log file: {}", temp_file.display()))?;

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(temp_file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_file_outlives_setup() {
        let path = init_logging(true).unwrap().unwrap();
        tracing::debug!("logging ready");
        assert!(path.exists());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_logging_disabled_without_debug() {
        assert_eq!(init_logging(false).unwrap(), None);
    }
}
