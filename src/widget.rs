//! Wallet connection widget.
//!
//! Framework-independent controller behind the navbar's wallet button. It
//! shows either a connect affordance or the truncated connected address, and
//! gates disconnection behind an explicit confirmation.
//!
//! # States
//!
//! ```text
//!                 open() + provider connects
//! IdleDisconnected ─────────────────────────────▶ IdleConnected
//!        ▲                                          │      ▲
//!        │ provider reports                click   │      │ cancel
//!        │ Disconnected                            ▼      │
//!        └──────────────────────────────── ConfirmingDisconnect
//!                   confirm (dialog always closes when the call settles)
//! ```
//!
//! Connection state is never owned here: it is read through an injected
//! `watch::Receiver`, and [`ConnectionWidget::sync`] is the state-change
//! callback.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::{AccountState, ConnectionState, ProviderError, format_address};
use crate::logging::ErrorReporter;
use crate::provider::WalletProvider;

// ============================================================================
// Constants
// ============================================================================

/// Button label shown while no wallet is connected.
pub const CONNECT_LABEL: &str = "Connect Wallet";

/// Operation name passed to the error reporter.
const DISCONNECT_OPERATION: &str = "disconnect wallet";

// ============================================================================
// Widget State
// ============================================================================

/// Observable state of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// No session; the connect button is shown.
    IdleDisconnected,
    /// Session established; the address button is shown.
    IdleConnected,
    /// The disconnect confirmation dialog is open.
    ConfirmingDisconnect,
}

/// Connection flips observed by [`ConnectionWidget::sync`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionChange {
    /// A session was established for the address.
    Connected(String),
    /// The session ended.
    Disconnected,
}

// ============================================================================
// ConnectionWidget
// ============================================================================

/// Controller for the wallet connect/disconnect button.
#[derive(Debug)]
pub struct ConnectionWidget<P> {
    provider: Arc<P>,
    account_rx: watch::Receiver<AccountState>,
    reporter: Arc<dyn ErrorReporter>,
    dialog_visible: bool,
    disconnect_in_flight: bool,
    was_connected: bool,
}

impl<P: WalletProvider> ConnectionWidget<P> {
    /// Creates a widget bound to `provider`, reporting swallowed errors to
    /// `reporter`. The initial state is whatever the provider reports now.
    #[must_use]
    pub fn new(provider: Arc<P>, reporter: Arc<dyn ErrorReporter>) -> Self {
        let mut account_rx = provider.subscribe();
        let was_connected = account_rx.borrow_and_update().is_connected;

        Self {
            provider,
            account_rx,
            reporter,
            dialog_visible: false,
            disconnect_in_flight: false,
            was_connected,
        }
    }

    /// Returns the provider this widget drives.
    #[must_use]
    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Current connection state as reported by the provider.
    #[must_use]
    pub fn connection(&self) -> ConnectionState {
        self.account_rx.borrow().connection()
    }

    /// Current widget state.
    #[must_use]
    pub fn state(&self) -> WidgetState {
        match self.connection() {
            ConnectionState::Disconnected => WidgetState::IdleDisconnected,
            ConnectionState::Connected(_) if self.dialog_visible => {
                WidgetState::ConfirmingDisconnect
            }
            ConnectionState::Connected(_) => WidgetState::IdleConnected,
        }
    }

    /// Whether the disconnect confirmation dialog is visible.
    #[must_use]
    pub const fn is_dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// Whether a disconnect call is awaiting its outcome.
    #[must_use]
    pub const fn is_disconnect_in_flight(&self) -> bool {
        self.disconnect_in_flight
    }

    /// Text for the wallet button: the formatted address when connected,
    /// [`CONNECT_LABEL`] otherwise.
    #[must_use]
    pub fn label(&self) -> String {
        self.connection()
            .address()
            .map_or_else(|| CONNECT_LABEL.to_string(), format_address)
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Opens the provider's connection prompt. Only acts while disconnected;
    /// never touches the dialog.
    pub fn request_connect(&self) {
        if self.connection().is_connected() {
            tracing::debug!("Connect requested while connected; ignoring");
            return;
        }
        tracing::debug!("Opening wallet connection prompt");
        self.provider.open();
    }

    /// Shows the disconnect confirmation dialog. Only acts while connected.
    pub fn request_disconnect_confirmation(&mut self) {
        if !self.connection().is_connected() {
            tracing::debug!("Disconnect requested while disconnected; ignoring");
            return;
        }
        self.dialog_visible = true;
    }

    /// Hides the confirmation dialog without calling the provider.
    ///
    /// Ignored while a disconnect is in flight; the dialog closes when the
    /// call settles.
    pub fn cancel_disconnect(&mut self) {
        if self.disconnect_in_flight {
            return;
        }
        self.dialog_visible = false;
    }

    /// Marks a confirmed disconnect as in flight.
    ///
    /// Returns `false` (and does nothing) if the dialog is not showing or a
    /// disconnect is already running. Also returns `false` if the provider
    /// already reports no session, closing the dialog since there is nothing
    /// left to confirm. On `true` the caller must issue the provider's
    /// disconnect and hand its outcome to
    /// [`ConnectionWidget::finish_disconnect`].
    pub fn begin_disconnect(&mut self) -> bool {
        if !self.dialog_visible || self.disconnect_in_flight {
            return false;
        }
        if !self.connection().is_connected() {
            tracing::debug!("Session ended before confirm; closing dialog");
            self.dialog_visible = false;
            return false;
        }
        self.disconnect_in_flight = true;
        true
    }

    /// Settles a disconnect attempt. The dialog is hidden whatever the
    /// outcome; failures go to the error reporter and are not returned.
    pub fn finish_disconnect(&mut self, result: Result<(), ProviderError>) {
        if let Err(error) = result {
            self.reporter.report(DISCONNECT_OPERATION, &error);
        }
        self.disconnect_in_flight = false;
        self.dialog_visible = false;
    }

    /// Confirms the disconnect and returns the provider call to await.
    ///
    /// Returns `None` when [`begin_disconnect`](Self::begin_disconnect)
    /// refuses. The returned future owns its provider handle, so it can be
    /// spawned; its outcome goes to [`finish_disconnect`](Self::finish_disconnect),
    /// which closes the dialog.
    pub fn confirm_disconnect(
        &mut self,
    ) -> Option<impl Future<Output = Result<(), ProviderError>> + Send + use<P>> {
        if !self.begin_disconnect() {
            return None;
        }
        let provider = Arc::clone(&self.provider);
        Some(async move { provider.disconnect().await })
    }

    /// Applies the latest provider state.
    ///
    /// Returns the connection flip since the previous call, if any. If the
    /// session ended on its own while the dialog was open (and no disconnect
    /// is pending), the dialog is closed.
    pub fn sync(&mut self) -> Option<ConnectionChange> {
        let account = self.account_rx.borrow_and_update().clone();

        if !account.is_connected && self.dialog_visible && !self.disconnect_in_flight {
            self.dialog_visible = false;
        }

        if account.is_connected == self.was_connected {
            return None;
        }
        self.was_connected = account.is_connected;

        let change = match account.connection() {
            ConnectionState::Connected(address) => ConnectionChange::Connected(address),
            ConnectionState::Disconnected => ConnectionChange::Disconnected,
        };
        tracing::debug!(?change, "Wallet connection changed");
        Some(change)
    }
}

// ============================================================================
// Tests
// ============================================================================
