//! Shared test utilities.
//!
//! Provides a scriptable in-memory wallet provider, an error reporter that
//! records what it is given, and factories for widgets, apps and terminals.
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;
use tokio::sync::watch;

use crate::config::RuntimeConfig;
use crate::domain::{AccountState, Network, ProviderError};
use crate::logging::ErrorReporter;
use crate::provider::WalletProvider;
use crate::state::{App, AppConfig};
use crate::widget::ConnectionWidget;

// ============================================================================
// Mock Provider
// ============================================================================

/// In-memory provider whose state and disconnect outcomes are set by tests.
///
/// `open()` only counts calls; tests decide when a session appears with
/// [`MockProvider::set_account`]. A successful disconnect clears the session.
#[derive(Debug)]
pub struct MockProvider {
    state_tx: watch::Sender<AccountState>,
    open_calls: AtomicUsize,
    disconnect_calls: AtomicUsize,
    disconnect_results: Mutex<VecDeque<Result<(), ProviderError>>>,
    selected_network: Mutex<Option<Network>>,
}

impl MockProvider {
    #[must_use]
    pub fn new(account: AccountState) -> Self {
        let (state_tx, _) = watch::channel(account);
        Self {
            state_tx,
            open_calls: AtomicUsize::new(0),
            disconnect_calls: AtomicUsize::new(0),
            disconnect_results: Mutex::new(VecDeque::new()),
            selected_network: Mutex::new(None),
        }
    }

    /// Publishes a new account state to every subscriber.
    pub fn set_account(&self, account: AccountState) {
        self.state_tx.send_replace(account);
    }

    /// Queues the outcome of the next `disconnect()`; unqueued calls succeed.
    pub fn push_disconnect_result(&self, result: Result<(), ProviderError>) {
        self.disconnect_results.lock().unwrap().push_back(result);
    }

    pub fn open_calls(&self) -> usize {
        self.open_calls.load(Ordering::SeqCst)
    }

    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls.load(Ordering::SeqCst)
    }

    pub fn selected_network(&self) -> Option<Network> {
        *self.selected_network.lock().unwrap()
    }
}

impl WalletProvider for MockProvider {
    fn open(&self) {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn subscribe(&self) -> watch::Receiver<AccountState> {
        self.state_tx.subscribe()
    }

    async fn disconnect(&self) -> Result<(), ProviderError> {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
        let result = self
            .disconnect_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()));

        if result.is_ok() {
            self.state_tx.send_replace(AccountState::disconnected());
        }
        result
    }

    fn select_network(&self, network: Network) {
        *self.selected_network.lock().unwrap() = Some(network);
    }
}

// ============================================================================
// Recording Reporter
// ============================================================================

/// Error reporter that keeps `"{operation}: {error}"` entries for assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    entries: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, operation: &'static str, error: &dyn std::error::Error) {
        self.entries
            .lock()
            .unwrap()
            .push(format!("{operation}: {error}"));
    }
}

// ============================================================================
// Factories
// ============================================================================

/// Builds a widget over a fresh [`MockProvider`] in `account` state.
pub fn widget_with(
    account: AccountState,
) -> (
    ConnectionWidget<MockProvider>,
    Arc<MockProvider>,
    Arc<RecordingReporter>,
) {
    let provider = Arc::new(MockProvider::new(account));
    let reporter = Arc::new(RecordingReporter::default());
    let widget = ConnectionWidget::new(Arc::clone(&provider), reporter.clone());
    (widget, provider, reporter)
}

/// Builds an app over a fresh [`MockProvider`] with default preferences and
/// no config file.
pub fn test_app(
    account: AccountState,
) -> (App<MockProvider>, Arc<MockProvider>, Arc<RecordingReporter>) {
    let provider = Arc::new(MockProvider::new(account));
    let reporter = Arc::new(RecordingReporter::default());
    let runtime = RuntimeConfig {
        project_id: "test-project".to_string(),
        region: None,
    };
    let app = App::new(
        Arc::clone(&provider),
        runtime,
        AppConfig::default(),
        reporter.clone(),
    );
    (app, provider, reporter)
}

// ============================================================================
// Terminal Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// Flattens a buffer into text, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            result.push('\n');
        }
    }
    result
}
