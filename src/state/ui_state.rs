//! UI state management for walletbar.
//!
//! Presentation concerns only: the active popup, the toast overlay and the
//! last rendered viewport (used to hit-test mouse clicks). The disconnect
//! dialog is owned by the connection widget, not by this state.

use ratatui::layout::Rect;

// ============================================================================
// Popup State
// ============================================================================

/// Popups owned by the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// Quit confirmation popup.
    ConfirmQuit,
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// ============================================================================
// Toast
// ============================================================================

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Something completed.
    Success,
    /// Neutral information.
    Info,
}

/// A non-blocking notification with a tick countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub ticks_remaining: u8,
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: popup, toast and viewport.
#[derive(Debug, Default)]
pub struct UiState {
    /// Current popup.
    pub popup_state: PopupState,
    /// Toast overlay, if one is showing.
    pub toast: Option<Toast>,
    /// Area of the last rendered frame.
    pub viewport: Rect,
}

impl UiState {
    /// Creates a new `UiState` with no popup and no toast.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    /// Returns `true` if a popup is active.
    #[must_use]
    pub const fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    /// Opens the quit confirmation popup.
    pub fn open_confirm_quit(&mut self) {
        self.popup_state = PopupState::ConfirmQuit;
    }

    /// Dismisses the current popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast for `ticks` redraw ticks, replacing any current toast.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind, ticks: u8) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            ticks_remaining: ticks,
        });
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        let Some(toast) = self.toast.as_mut() else {
            return false;
        };

        if toast.ticks_remaining > 1 {
            toast.ticks_remaining -= 1;
            false
        } else {
            self.toast = None;
            true
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
