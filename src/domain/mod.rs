//! Domain types for walletbar.
//!
//! Plain data shared by the provider, the connection widget and the UI.
//!
//! # Module Organization
//!
//! - [`account`] - Account snapshot, connection state and address formatting
//! - [`error`] - Error types for configuration and provider operations
//! - [`network`] - Networks handed to the wallet provider (Mainnet, Arbitrum)

// ============================================================================
// Module Declarations
// ============================================================================

pub mod account;
pub mod error;
pub mod network;

// ============================================================================
// Re-exports
// ============================================================================

pub use account::{AccountState, ConnectionState, format_address};
pub use error::{ConfigError, ProviderError};
pub use network::Network;
