//! UI rendering module for walletbar.
//!
//! # Module Structure
//!
//! - `layout` - Layout calculations shared by rendering and mouse hit-testing
//! - `navbar` - Title and wallet button
//! - `page` - Getting-started body
//! - `footer` - Credit, key hints and network
//! - `popups` - Disconnect dialog and quit prompt
//! - `components` - Toast notifications
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod helpers;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod popups;

use ratatui::Frame;

use crate::provider::WalletProvider;
use crate::state::{App, PopupState};

use layout::AppLayout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draw order: navbar, page and footer, then the disconnect dialog or the
/// quit prompt, then the toast on top of everything.
pub fn render<P: WalletProvider>(app: &App<P>, frame: &mut Frame) {
    let size = frame.area();
    let layout = AppLayout::new(size);

    navbar::render(frame, layout.navbar, &app.widget.label(), app.widget.state());
    page::render(frame, layout.body);
    footer::render(
        frame,
        layout.footer,
        app.config.network,
        app.runtime.region.as_deref(),
    );

    if app.widget.is_dialog_visible() {
        popups::render_disconnect_dialog(frame, size, app.widget.is_disconnect_in_flight());
    } else if app.ui.popup_state == PopupState::ConfirmQuit {
        popups::render_confirm_quit(frame, size);
    }

    if let Some(toast) = &app.ui.toast {
        components::render_toast(frame, size, toast);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountState;
    use crate::state::ToastKind;
    use crate::test_utils::{buffer_to_string, test_app, test_terminal};
    use crate::ui::popups::disconnect::{DIALOG_MESSAGE, DISCONNECTING_MESSAGE};
    use crate::widget::CONNECT_LABEL;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw<P: WalletProvider>(terminal: &mut Terminal<TestBackend>, app: &App<P>) -> String {
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[rstest]
    fn test_disconnected_page(mut test_terminal: Terminal<TestBackend>) {
        let (app, _, _) = test_app(AccountState::disconnected());
        let content = draw(&mut test_terminal, &app);

        assert!(content.contains(CONNECT_LABEL));
        assert!(content.contains("Getting Started"));
        assert!(!content.contains(DIALOG_MESSAGE));
    }

    #[rstest]
    fn test_snapshot_page_disconnected(mut test_terminal: Terminal<TestBackend>) {
        let (app, _, _) = test_app(AccountState::disconnected());
        test_terminal.draw(|frame| render(&app, frame)).unwrap();
        insta::assert_snapshot!("page_disconnected", test_terminal.backend());
    }

    #[rstest]
    fn test_connected_shows_truncated_address(mut test_terminal: Terminal<TestBackend>) {
        let (app, _, _) = test_app(AccountState::connected("0xABCDEF1234567890"));
        let content = draw(&mut test_terminal, &app);

        assert!(content.contains("0xABCD...7890"));
        assert!(!content.contains(CONNECT_LABEL));
    }

    #[rstest]
    fn test_dialog_rendered_when_confirming(mut test_terminal: Terminal<TestBackend>) {
        let (mut app, _, _) = test_app(AccountState::connected("0xABCDEF1234567890"));
        app.widget.request_disconnect_confirmation();

        let content = draw(&mut test_terminal, &app);
        assert!(content.contains(DIALOG_MESSAGE));
        assert!(!content.contains(DISCONNECTING_MESSAGE));

        assert!(app.widget.begin_disconnect());
        let content = draw(&mut test_terminal, &app);
        assert!(content.contains(DISCONNECTING_MESSAGE));
    }

    #[rstest]
    fn test_quit_prompt_and_toast(mut test_terminal: Terminal<TestBackend>) {
        let (mut app, _, _) = test_app(AccountState::disconnected());
        app.ui.open_confirm_quit();
        app.ui.show_toast("Wallet disconnected", ToastKind::Info, 5);

        let content = draw(&mut test_terminal, &app);
        assert!(content.contains("Are you sure you want to quit?"));
        assert!(content.contains("Wallet disconnected"));
    }
}
