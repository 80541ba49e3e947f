//! Confirmation popup rendering.
//!
//! One layout serves both the quit prompt and the disconnect dialog: a
//! centered message, a separator, and an action row below it.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph},
};

use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::{confirm_action_row, confirm_popup_area};

// ============================================================================
// Constants
// ============================================================================

const QUIT_TITLE: &str = "Confirm Quit";
const QUIT_MESSAGE: &str = "Are you sure you want to quit?";

// ============================================================================
// Public API
// ============================================================================

/// Renders the quit confirmation popup.
pub fn render(frame: &mut Frame, area: Rect) {
    let Some(action_row) = render_confirm(frame, area, QUIT_TITLE, Line::from(QUIT_MESSAGE))
    else {
        return;
    };
    frame.render_widget(
        Paragraph::new(key_hints(&[("y", "Yes"), ("n/Esc", "No")])).alignment(Alignment::Center),
        action_row,
    );
}

/// Renders a centered confirmation popup with `message`.
///
/// Returns the empty action row for the caller to fill, or `None` when the
/// terminal is too small to draw the popup.
pub(crate) fn render_confirm(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: Line<'_>,
) -> Option<Rect> {
    let popup_area = confirm_popup_area(area);
    if popup_area.is_empty() {
        return None;
    }

    let popup_block = create_popup_block(title);
    let inner_area = popup_block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    // Message
    let message_area = Rect::new(inner_area.x, inner_area.y + 1, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new(message).alignment(Alignment::Center),
        message_area,
    );

    // Separator
    let separator = "─".repeat(usize::from(popup_area.width.saturating_sub(2)));
    let separator_area = Rect::new(
        popup_area.x + 1,
        popup_area.bottom().saturating_sub(3),
        popup_area.width - 2,
        1,
    );
    frame.render_widget(
        Paragraph::new(separator)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        separator_area,
    );

    Some(confirm_action_row(popup_area))
}

// ============================================================================
// Tests
// ============================================================================
