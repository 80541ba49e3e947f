//! In-process wallet provider.
//!
//! Lets the template run without a wallet backend: `open()` establishes a
//! session for a fixed address after a short delay, and `disconnect()` can be
//! told to fail a number of times to exercise the widget's failure path.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::sync::watch;

use super::WalletProvider;
use crate::domain::{AccountState, Network, ProviderError};

// ============================================================================
// Constants
// ============================================================================

/// Address used when none is configured.
pub const DEFAULT_ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

/// Default simulated session latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(400);

// ============================================================================
// Options
// ============================================================================

/// Behaviour of a [`SimulatedProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedOptions {
    /// Address reported once connected.
    pub address: String,
    /// Delay applied to both connect and disconnect.
    pub latency: Duration,
    /// Network the first session is opened on.
    pub network: Network,
    /// Start with an established session.
    pub start_connected: bool,
}

impl Default for SimulatedOptions {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            latency: DEFAULT_LATENCY,
            network: Network::default(),
            start_connected: false,
        }
    }
}

// ============================================================================
// SimulatedProvider
// ============================================================================

#[derive(Debug)]
struct Inner {
    state_tx: watch::Sender<AccountState>,
    address: String,
    latency: Duration,
    failures_remaining: AtomicU32,
    network: RwLock<Network>,
}

/// Wallet provider that simulates sessions in-process.
///
/// Cloning is cheap; clones share the same session.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    inner: Arc<Inner>,
}

impl SimulatedProvider {
    /// Creates a provider with the given behaviour.
    #[must_use]
    pub fn new(options: SimulatedOptions) -> Self {
        let initial = if options.start_connected {
            AccountState::connected(options.address.clone())
        } else {
            AccountState::disconnected()
        };
        let (state_tx, _state_rx) = watch::channel(initial);

        Self {
            inner: Arc::new(Inner {
                state_tx,
                address: options.address,
                latency: options.latency,
                failures_remaining: AtomicU32::new(0),
                network: RwLock::new(options.network),
            }),
        }
    }

    /// Makes the next `count` disconnect calls fail.
    pub fn fail_next_disconnects(&self, count: u32) {
        self.inner.failures_remaining.store(count, Ordering::SeqCst);
    }

    /// Returns the network the next session is opened on.
    #[must_use]
    pub fn network(&self) -> Network {
        *self.inner.network.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn establish_session(inner: &Inner) {
        let network = *inner.network.read().unwrap_or_else(PoisonError::into_inner);
        tracing::info!(address = %inner.address, %network, "Simulated session opened");
        inner
            .state_tx
            .send_replace(AccountState::connected(inner.address.clone()));
    }

    /// Consumes one pending failure, if any.
    fn take_failure(&self) -> bool {
        self.inner
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl WalletProvider for SimulatedProvider {
    fn open(&self) {
        if self.account().is_connected {
            tracing::debug!("Connect prompt requested with an open session; ignoring");
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let inner = Arc::clone(&self.inner);
                handle.spawn(async move {
                    tokio::time::sleep(inner.latency).await;
                    Self::establish_session(&inner);
                });
            }
            Err(_) => Self::establish_session(&self.inner),
        }
    }

    fn subscribe(&self) -> watch::Receiver<AccountState> {
        self.inner.state_tx.subscribe()
    }

    async fn disconnect(&self) -> Result<(), ProviderError> {
        tokio::time::sleep(self.inner.latency).await;

        if !self.account().is_connected {
            return Err(ProviderError::unavailable("no open session"));
        }
        if self.take_failure() {
            return Err(ProviderError::disconnect("wallet rejected session teardown"));
        }

        self.inner.state_tx.send_replace(AccountState::disconnected());
        tracing::info!("Simulated session closed");
        Ok(())
    }

    fn select_network(&self, network: Network) {
        let previous = self.network();
        if previous == network {
            return;
        }
        tracing::debug!(%previous, %network, "Simulated provider network changed");
        *self
            .inner
            .network
            .write()
            .unwrap_or_else(PoisonError::into_inner) = network;
    }
}

// ============================================================================
// Tests
// ============================================================================
