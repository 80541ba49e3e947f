//! Application constants for walletbar.

use std::time::Duration;

/// Directory name used under the platform config and data dirs.
pub const APP_NAME: &str = "walletbar";

// ============================================================================
// Timing
// ============================================================================

/// Interval between redraw ticks.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// How many ticks a toast stays on screen (two seconds at [`TICK_RATE`]).
pub const TOAST_TICKS: u8 = 20;

// ============================================================================
// Page Content
// ============================================================================

/// Title shown in the navbar and as the page heading.
pub const APP_TITLE: &str = "Web3 Boilerplate";

/// One-line description under the page heading.
pub const APP_DESCRIPTION: &str =
    "A simple boilerplate for building wallet-connected applications in the terminal.";

/// Footer credit line.
pub const FOOTER_CREDIT: &str = "Built with Rust, ratatui and tokio";

// ============================================================================
// Toast Messages
// ============================================================================

/// Toast shown when a session is established.
pub const TOAST_CONNECTED: &str = "[+] Wallet connected";

/// Toast shown when a session ends.
pub const TOAST_DISCONNECTED: &str = "Wallet disconnected";

/// Toast shown when switching networks with an open session.
pub const TOAST_NETWORK_LOCKED: &str = "Disconnect before switching networks";
