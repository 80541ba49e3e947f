//! Navbar rendering: application title on the left, wallet button on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::constants::APP_TITLE;
use crate::theme::{
    ADDRESS_BUTTON_ARMED_STYLE, ADDRESS_BUTTON_STYLE, CONNECT_BUTTON_STYLE, TITLE_STYLE,
};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::wallet_button_area;
use crate::widget::WidgetState;

/// Renders the navbar for the widget in `state` showing `label`.
pub fn render(frame: &mut Frame, area: Rect, label: &str, state: WidgetState) {
    let block = create_border_block("");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let title_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1);
    frame.render_widget(Paragraph::new(APP_TITLE).style(TITLE_STYLE), title_area);

    let button_area = wallet_button_area(area, label);
    if button_area.is_empty() {
        return;
    }

    let button = Paragraph::new(label)
        .style(button_style(state))
        .alignment(Alignment::Center);
    frame.render_widget(button, button_area);
}

#[must_use]
const fn button_style(state: WidgetState) -> Style {
    match state {
        WidgetState::IdleDisconnected => CONNECT_BUTTON_STYLE,
        WidgetState::IdleConnected => ADDRESS_BUTTON_STYLE,
        WidgetState::ConfirmingDisconnect => ADDRESS_BUTTON_ARMED_STYLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::ui::layout::NAVBAR_HEIGHT;
    use crate::widget::CONNECT_LABEL;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(label: &str, state: WidgetState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, NAVBAR_HEIGHT)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), label, state))
            .unwrap();
        terminal
    }

    #[test]
    fn test_navbar_shows_title_and_connect_button() {
        let terminal = draw(CONNECT_LABEL, WidgetState::IdleDisconnected);
        let content = buffer_to_string(terminal.backend().buffer());

        assert!(content.contains(APP_TITLE));
        assert!(content.contains(CONNECT_LABEL));
    }

    #[test]
    fn test_snapshot_navbar_disconnected() {
        let terminal = draw(CONNECT_LABEL, WidgetState::IdleDisconnected);
        insta::assert_snapshot!("navbar_disconnected", terminal.backend());
    }

    #[test]
    fn test_snapshot_navbar_connected() {
        let terminal = draw("0xABCD...7890", WidgetState::IdleConnected);
        insta::assert_snapshot!("navbar_connected", terminal.backend());
    }

    #[test]
    fn test_button_styled_by_state() {
        let label = "0xABCD...7890";
        let area = Rect::new(0, 0, 80, NAVBAR_HEIGHT);
        let button = wallet_button_area(area, label);

        for (state, style) in [
            (WidgetState::IdleDisconnected, CONNECT_BUTTON_STYLE),
            (WidgetState::IdleConnected, ADDRESS_BUTTON_STYLE),
            (WidgetState::ConfirmingDisconnect, ADDRESS_BUTTON_ARMED_STYLE),
        ] {
            let terminal = draw(label, state);
            let cell = &terminal.backend().buffer()[(button.x, button.y)];
            assert_eq!(cell.bg, style.bg.unwrap(), "{state:?}");
        }
    }
}
