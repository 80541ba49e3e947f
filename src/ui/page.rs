//! Page body: heading, description and getting-started steps.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::config::PROJECT_ID_VAR;
use crate::constants::{APP_DESCRIPTION, APP_TITLE};
use crate::theme::{KEY_HINT_STYLE, MUTED_COLOR, TITLE_STYLE};
use crate::ui::helpers::create_border_block;

/// Renders the page body into `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    let block = create_border_block("Getting Started");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(page_lines()).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner.inner(Margin::new(2, 1)));
}

fn page_lines() -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_COLOR);
    let step = |n: u8, spans: Vec<Span<'static>>| {
        let mut line = vec![Span::styled(format!("{n}. "), muted.add_modifier(Modifier::BOLD))];
        line.extend(spans);
        Line::from(line)
    };

    vec![
        Line::styled(APP_TITLE, TITLE_STYLE),
        Line::styled(APP_DESCRIPTION, muted),
        Line::default(),
        step(
            1,
            vec![
                Span::raw("Set "),
                Span::styled(PROJECT_ID_VAR, KEY_HINT_STYLE),
                Span::raw(" to your wallet project id."),
            ],
        ),
        step(
            2,
            vec![
                Span::raw("Press "),
                Span::styled("c", KEY_HINT_STYLE),
                Span::raw(" or click the button in the top right to connect."),
            ],
        ),
        step(
            3,
            vec![
                Span::raw("Press "),
                Span::styled("d", KEY_HINT_STYLE),
                Span::raw(" or click your address to disconnect."),
            ],
        ),
        step(
            4,
            vec![
                Span::raw("Press "),
                Span::styled("n", KEY_HINT_STYLE),
                Span::raw(" while disconnected to switch networks."),
            ],
        ),
    ]
}
