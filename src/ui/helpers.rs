//! UI helper functions for creating styled blocks and text.

use ratatui::{
    layout::Alignment,
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, KEY_HINT_STYLE, MUTED_COLOR};

// ============================================================================
// Block Helpers
// ============================================================================

/// Creates the plain rounded block used for the navbar and page body.
#[must_use]
pub fn create_border_block(title: &str) -> Block<'_> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE);

    if title.is_empty() {
        block
    } else {
        block.title(format!(" {title} "))
    }
}

/// Creates a popup-style block with centered title and rounded borders.
///
/// # Example
///
/// ```ignore
/// let popup = create_popup_block("Disconnect Wallet");
/// ```
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Text Helpers
// ============================================================================

/// Builds a line of `key:label` hints with highlighted keys.
///
/// ```text
/// y:Yes  n/Esc:No
/// ```
#[must_use]
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let muted = Style::default().fg(MUTED_COLOR);
    let mut spans = Vec::with_capacity(hints.len() * 2);

    for (i, (key, label)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, KEY_HINT_STYLE));
        let separator = if i + 1 == hints.len() { "" } else { "  " };
        spans.push(Span::styled(format!(":{label}{separator}"), muted));
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
