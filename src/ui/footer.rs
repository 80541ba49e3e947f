//! Footer rendering: credit, key hints and the active network.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::constants::FOOTER_CREDIT;
use crate::domain::Network;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};
use crate::ui::helpers::key_hints;

const KEY_HINTS: [(&str, &str); 4] = [
    ("c", "Connect"),
    ("d", "Disconnect"),
    ("n", "Network"),
    ("q", "Quit"),
];

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, network: Network, region: Option<&str>) {
    let chain_id = network.chain_id();
    let status = match region {
        Some(region) => format!("Network: {network} ({chain_id})  Region: {region} "),
        None => format!("Network: {network} ({chain_id}) "),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(width_of(FOOTER_CREDIT) + 1),
            Constraint::Min(0),
            Constraint::Length(width_of(&status)),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(format!(" {FOOTER_CREDIT}")).style(Style::default().fg(MUTED_COLOR)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(key_hints(&KEY_HINTS)).alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(status)
            .style(Style::default().fg(PRIMARY_COLOR))
            .alignment(Alignment::Right),
        chunks[2],
    );
}

fn width_of(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

// ============================================================================
// Tests
// ============================================================================
