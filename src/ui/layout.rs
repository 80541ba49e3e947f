//! Layout calculations for walletbar.
//!
//! Rendering and mouse hit-testing both go through these functions, so a
//! click lands on exactly the cells the button was drawn in.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the navbar in terminal rows.
pub const NAVBAR_HEIGHT: u16 = 3;

/// Height of the footer in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Horizontal padding inside the wallet button (each side).
const BUTTON_PADDING: u16 = 2;

/// Gap between the wallet button and the navbar's right border.
const BUTTON_MARGIN_RIGHT: u16 = 2;

/// Size of confirmation popups (quit prompt, disconnect dialog).
const CONFIRM_POPUP_WIDTH: u16 = 56;
const CONFIRM_POPUP_HEIGHT: u16 = 7;

/// Smallest popup height that still has room for the action row.
const CONFIRM_POPUP_MIN_HEIGHT: u16 = 4;

/// Gap between the two dialog actions.
const ACTION_GAP: u16 = 2;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Navbar (title, wallet button).
    pub navbar: Rect,
    /// Page body.
    pub body: Rect,
    /// Footer (credit, network, key hints).
    pub footer: Rect,
}

impl AppLayout {
    /// Splits the terminal area into navbar, body and footer.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAVBAR_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        Self {
            navbar: chunks[0],
            body: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Clickable actions on the bottom row of a confirmation popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogActions {
    /// Dismisses the popup.
    pub cancel: Rect,
    /// Accepts the popup.
    pub confirm: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Area of the wallet button inside the navbar, right-aligned on the middle
/// row and sized to fit `label`.
///
/// Returns an empty rect when the navbar is too small to hold a button.
#[must_use]
pub fn wallet_button_area(navbar: Rect, label: &str) -> Rect {
    if navbar.height < NAVBAR_HEIGHT {
        return Rect::default();
    }

    let label_width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
    let width = label_width
        .saturating_add(BUTTON_PADDING * 2)
        .min(navbar.width.saturating_sub(BUTTON_MARGIN_RIGHT + 1));
    let x = navbar.right().saturating_sub(BUTTON_MARGIN_RIGHT + width);

    Rect::new(x, navbar.y + 1, width, 1)
}

/// Area of a confirmation popup centered in `area`.
///
/// Returns an empty rect when the terminal is too small to draw one.
#[must_use]
pub fn confirm_popup_area(area: Rect) -> Rect {
    let popup = centered_popup_area(area, CONFIRM_POPUP_WIDTH, CONFIRM_POPUP_HEIGHT);
    if popup.height < CONFIRM_POPUP_MIN_HEIGHT || popup.width < 3 {
        return Rect::default();
    }
    popup
}

/// Row inside `popup` that holds the key hints or actions.
#[must_use]
pub fn confirm_action_row(popup: Rect) -> Rect {
    if popup.is_empty() {
        return Rect::default();
    }
    Rect::new(
        popup.x + 1,
        popup.bottom().saturating_sub(2),
        popup.width.saturating_sub(2),
        1,
    )
}

/// Places a cancel and a confirm action of the given widths side by side,
/// centered on the action row of `popup`.
#[must_use]
pub fn dialog_action_areas(popup: Rect, cancel_width: u16, confirm_width: u16) -> DialogActions {
    let row = confirm_action_row(popup);
    if row.is_empty() {
        return DialogActions::default();
    }

    let total = cancel_width
        .saturating_add(ACTION_GAP)
        .saturating_add(confirm_width);
    let start = row.x + row.width.saturating_sub(total) / 2;
    let confirm_x = start.saturating_add(cancel_width + ACTION_GAP);

    DialogActions {
        cancel: Rect::new(start, row.y, cancel_width, 1).intersection(row),
        confirm: Rect::new(confirm_x, row.y, confirm_width, 1).intersection(row),
    }
}

/// Calculate a centered popup area within a parent area.
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
