//! Disconnect confirmation dialog.
//!
//! The Cancel and Disconnect actions are drawn at [`action_areas`], which
//! mouse hit-testing uses as well.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use super::confirm::render_confirm;
use crate::theme::{ERROR_COLOR, MUTED_COLOR};
use crate::ui::helpers::key_hints;
use crate::ui::layout::{DialogActions, confirm_popup_area, dialog_action_areas};

pub const DIALOG_TITLE: &str = "Disconnect Wallet";
pub const DIALOG_MESSAGE: &str = "Are you sure you want to disconnect your wallet?";
pub const DISCONNECTING_MESSAGE: &str = "Disconnecting...";

const CANCEL_HINT: (&str, &str) = ("n/Esc", "Cancel");
const CONFIRM_HINT: (&str, &str) = ("y/Enter", "Disconnect");

/// Where the Cancel and Disconnect actions sit when the dialog is drawn
/// over `area`.
#[must_use]
pub fn action_areas(area: Rect) -> DialogActions {
    dialog_action_areas(
        confirm_popup_area(area),
        hint_width(CANCEL_HINT),
        hint_width(CONFIRM_HINT),
    )
}

/// Renders the dialog. While a disconnect is pending the actions are
/// replaced by a progress line, since confirm and cancel are both inert.
pub fn render(frame: &mut Frame, area: Rect, in_flight: bool) {
    let message = Line::styled(DIALOG_MESSAGE, Style::default().fg(ERROR_COLOR));
    let Some(action_row) = render_confirm(frame, area, DIALOG_TITLE, message) else {
        return;
    };

    if in_flight {
        let progress = Line::styled(
            DISCONNECTING_MESSAGE,
            Style::default()
                .fg(MUTED_COLOR)
                .add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(
            Paragraph::new(progress).alignment(Alignment::Center),
            action_row,
        );
        return;
    }

    let actions = action_areas(area);
    frame.render_widget(Paragraph::new(key_hints(&[CANCEL_HINT])), actions.cancel);
    frame.render_widget(Paragraph::new(key_hints(&[CONFIRM_HINT])), actions.confirm);
}

fn hint_width((key, label): (&str, &str)) -> u16 {
    u16::try_from(key.chars().count() + 1 + label.chars().count()).unwrap_or(u16::MAX)
}
