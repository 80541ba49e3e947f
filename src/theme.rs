//! Theme and styling constants for walletbar.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Destructive action color (disconnect).
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Title style for the navbar and headings.
pub const TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Wallet button while disconnected (solid, like a primary button).
pub const CONNECT_BUTTON_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD);

/// Wallet button while connected (outlined look, turns red when confirming).
pub const ADDRESS_BUTTON_STYLE: Style = Style::new().fg(PRIMARY_COLOR).bg(Color::DarkGray);

/// Wallet button while the disconnect dialog is open.
pub const ADDRESS_BUTTON_ARMED_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(ERROR_COLOR)
    .add_modifier(Modifier::BOLD);

/// Key hint style in dialogs and the footer.
pub const KEY_HINT_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);
