//! State management for walletbar.
//!
//! The application state is split into:
//!
//! - [`ConnectionWidget`](crate::widget::ConnectionWidget) - wallet button and disconnect confirmation
//! - [`UiState`] - presentation concerns (popups, toasts, viewport)
//! - [`AppConfig`] - persisted preferences
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                    App                      │
//! ├──────────────────┬──────────────┬───────────┤
//! │ ConnectionWidget │   UiState    │ AppConfig │
//! │  - dialog        │  - popup     │  - network│
//! │  - in flight     │  - toast     │           │
//! └──────────────────┴──────────────┴───────────┘
//! ```

use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::config::RuntimeConfig;
use crate::domain::ProviderError;
use crate::widget::ConnectionWidget;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use ui_state::{PopupState, Toast, ToastKind, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A spawned disconnect call settled.
    DisconnectSettled(Result<(), ProviderError>),
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App<P> {
    /// Wallet connect/disconnect controller.
    pub widget: ConnectionWidget<P>,

    /// UI state - popups, toasts, viewport.
    pub ui: UiState,

    /// Persisted preferences.
    pub config: AppConfig,

    /// Values injected by the deployment environment.
    pub runtime: RuntimeConfig,

    /// Whether the application should exit.
    pub exit: bool,

    /// Where preference changes are saved; `None` keeps them in memory.
    pub(crate) config_path: Option<PathBuf>,

    // NOTE: `let _ = tx.send(...)` is used for fire-and-forget sends; the
    // receiver lives as long as the App.
    /// Sender for app messages (cloned into background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing, provider sync
mod app_messages;

// Command execution, input handling
mod app_commands;

// ============================================================================
// Tests
// ============================================================================
