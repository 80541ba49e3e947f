//! Key event to command mapping.
//!
//! Key input is translated into an [`AppCommand`] for the current
//! [`InputContext`], so keybindings can be tested without an [`App`].
//!
//! [`App`]: crate::state::App

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The page with the navbar, no overlay.
    Main,
    /// The disconnect confirmation dialog is open.
    ConfirmDisconnect,
    /// The quit confirmation popup is open.
    ConfirmQuit,
}

// ============================================================================
// App Commands
// ============================================================================

/// Everything the user can ask the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Open the wallet provider's connection prompt.
    Connect,
    /// Show the disconnect confirmation dialog.
    RequestDisconnect,
    /// Confirm the pending disconnect.
    ConfirmDisconnect,
    /// Cancel the pending disconnect.
    CancelDisconnect,
    /// Press the wallet button: connect or request disconnect, by state.
    ActivateWalletButton,
    /// Cycle to the next network.
    CycleNetwork,
    /// Ask before quitting.
    RequestQuit,
    /// Quit.
    ConfirmQuit,
    /// Close the current popup.
    Dismiss,
    /// Nothing to do.
    Noop,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Maps a key event to a command for the given context.
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return AppCommand::ConfirmQuit;
    }

    match context {
        InputContext::Main => map_main_key(key),
        InputContext::ConfirmDisconnect => map_confirm_disconnect_key(key),
        InputContext::ConfirmQuit => map_confirm_quit_key(key),
    }
}

fn map_main_key(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('c') => AppCommand::Connect,
        KeyCode::Char('d') => AppCommand::RequestDisconnect,
        KeyCode::Enter | KeyCode::Char(' ') => AppCommand::ActivateWalletButton,
        KeyCode::Char('n') => AppCommand::CycleNetwork,
        KeyCode::Char('q') | KeyCode::Esc => AppCommand::RequestQuit,
        _ => AppCommand::Noop,
    }
}

fn map_confirm_disconnect_key(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => AppCommand::ConfirmDisconnect,
        KeyCode::Char('n') | KeyCode::Esc => AppCommand::CancelDisconnect,
        _ => AppCommand::Noop,
    }
}

fn map_confirm_quit_key(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('q') => AppCommand::ConfirmQuit,
        KeyCode::Char('n') | KeyCode::Esc => AppCommand::Dismiss,
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================
