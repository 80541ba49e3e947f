//! Logging setup and the error sink used by the connection widget.
//!
//! Logs go to a file so they never interleave with the terminal UI:
//! - Linux: `~/.local/share/walletbar/walletbar.log`
//! - macOS: `~/Library/Application Support/walletbar/walletbar.log`
//! - Windows: `%LOCALAPPDATA%/walletbar/walletbar.log`
//!
//! `RUST_LOG` overrides the default `walletbar=info` filter.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

use crate::constants::APP_NAME;

// ============================================================================
// Constants
// ============================================================================

/// Log file name.
const LOG_FILE: &str = "walletbar.log";

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "walletbar=info";

// ============================================================================
// Subscriber Setup
// ============================================================================

/// Returns the path of the log file, creating its directory.
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined or created.
pub fn log_path() -> Result<PathBuf> {
    let mut path = dirs::data_local_dir().ok_or_else(|| {
        eyre!(
            "Could not determine data directory. Expected XDG_DATA_HOME or ~/.local/share on Linux, ~/Library/Application Support on macOS, %LOCALAPPDATA% on Windows"
        )
    })?;
    path.push(APP_NAME);
    fs::create_dir_all(&path)?;
    path.push(LOG_FILE);
    Ok(path)
}

/// Installs the global `tracing` subscriber writing to the log file.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init() -> Result<PathBuf> {
    let path = log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("Failed to install log subscriber: {e}"))?;

    Ok(path)
}

// ============================================================================
// Error Sink
// ============================================================================

/// Sink for errors that are handled locally and never surfaced to the user.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Records `error` that occurred during `operation`.
    fn report(&self, operation: &'static str, error: &dyn std::error::Error);
}

/// Reports errors through `tracing::error!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, operation: &'static str, error: &dyn std::error::Error) {
        tracing::error!(operation, %error, "Failed to {operation}");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProviderError;

    #[test]
    fn test_tracing_reporter_does_not_panic_without_subscriber() {
        let reporter = TracingReporter;
        reporter.report("disconnect", &ProviderError::disconnect("rejected"));
    }

    #[test]
    fn test_log_path_has_log_extension() {
        if let Ok(path) = log_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("log"));
        }
    }

    #[test]
    fn test_default_filter_parses() {
        let _filter = EnvFilter::new(DEFAULT_FILTER);
    }
}
