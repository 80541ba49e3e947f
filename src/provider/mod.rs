//! Wallet provider abstraction.
//!
//! The wallet provider owns session negotiation and teardown. walletbar only
//! needs three things from it: a way to open the connection prompt, a
//! read-only view of the current account, and an asynchronous disconnect.
//!
//! # Example
//!
//! ```ignore
//! use crate::provider::{SimulatedProvider, SimulatedOptions, WalletProvider};
//!
//! let provider = SimulatedProvider::new(SimulatedOptions::default());
//! let mut account_rx = provider.subscribe();
//! provider.open();
//! account_rx.changed().await?;
//! ```

use std::future::Future;

use tokio::sync::watch;

use crate::domain::{AccountState, Network, ProviderError};

pub mod simulated;

// ============================================================================
// Re-exports
// ============================================================================

pub use simulated::{SimulatedOptions, SimulatedProvider};

// ============================================================================
// WalletProvider
// ============================================================================

/// Operations and state exposed by a wallet-connection provider.
pub trait WalletProvider: Send + Sync + 'static {
    /// Opens the provider's connection prompt. Fire-and-forget: the outcome
    /// is observed through [`WalletProvider::subscribe`].
    fn open(&self);

    /// Returns a receiver tracking the current account state.
    fn subscribe(&self) -> watch::Receiver<AccountState>;

    /// Tears down the current session.
    fn disconnect(&self) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Selects the network the next session is opened on.
    fn select_network(&self, network: Network);

    /// Returns the current account state.
    fn account(&self) -> AccountState {
        self.subscribe().borrow().clone()
    }
}
