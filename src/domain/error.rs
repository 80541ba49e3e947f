//! Error types for walletbar.
//!
//! [`ConfigError`] covers fatal startup conditions; [`ProviderError`] covers
//! failures reported by the wallet provider, which the connection widget
//! treats as recoverable.

use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while reading runtime configuration at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The project identifier is absent, empty or whitespace-only. `var`
    /// names the environment variable that should hold it.
    #[error("Project ID is not defined (set {var})")]
    MissingProjectId { var: &'static str },
}

// ============================================================================
// Provider Errors
// ============================================================================

/// Errors reported by a wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Session teardown failed.
    #[error("Disconnect failed: {0}")]
    Disconnect(String),

    /// The provider cannot service requests (no backend, runtime gone, ...).
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

impl ProviderError {
    /// Create a new disconnect error.
    #[must_use]
    pub fn disconnect(message: impl Into<String>) -> Self {
        Self::Disconnect(message.into())
    }

    /// Create a new unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
