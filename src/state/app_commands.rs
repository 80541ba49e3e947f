//! Command execution and input handling.
//!
//! Keyboard and mouse input is mapped to [`AppCommand`]s, which mutate the
//! application state. Provider calls that suspend are spawned onto tokio and
//! report back through the message channel.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::{App, AppMessage, ToastKind};
use crate::commands::{AppCommand, InputContext, map_key};
use crate::constants::{TOAST_NETWORK_LOCKED, TOAST_TICKS};
use crate::provider::WalletProvider;
use crate::ui::layout::{AppLayout, wallet_button_area};
use crate::ui::popups::disconnect;

impl<P: WalletProvider> App<P> {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Maps a left click to the command under the cursor.
    ///
    /// Returns `true` when a command ran and the screen needs a redraw.
    pub(crate) fn handle_mouse_input(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        let command = self.command_at(Position::new(mouse.column, mouse.row));
        if command == AppCommand::Noop {
            return false;
        }
        self.execute_command(command);
        true
    }

    /// Hit-tests `position` against the clickable areas of the current context.
    fn command_at(&self, position: Position) -> AppCommand {
        match self.get_input_context() {
            InputContext::Main => {
                let layout = AppLayout::new(self.ui.viewport);
                let button = wallet_button_area(layout.navbar, &self.widget.label());
                if button.contains(position) {
                    AppCommand::ActivateWalletButton
                } else {
                    AppCommand::Noop
                }
            }
            InputContext::ConfirmDisconnect => {
                let actions = disconnect::action_areas(self.ui.viewport);
                if actions.cancel.contains(position) {
                    AppCommand::CancelDisconnect
                } else if actions.confirm.contains(position) {
                    AppCommand::ConfirmDisconnect
                } else {
                    AppCommand::Noop
                }
            }
            InputContext::ConfirmQuit => AppCommand::Noop,
        }
    }

    /// Determines which keybindings are active.
    ///
    /// The disconnect dialog takes precedence over shell popups.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.widget.is_dialog_visible() {
            return InputContext::ConfirmDisconnect;
        }
        if self.ui.has_active_popup() {
            return InputContext::ConfirmQuit;
        }
        InputContext::Main
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Wallet ===
            AppCommand::Connect => {
                self.widget.request_connect();
            }
            AppCommand::RequestDisconnect => {
                self.widget.request_disconnect_confirmation();
            }
            AppCommand::ActivateWalletButton => {
                if self.widget.connection().is_connected() {
                    self.widget.request_disconnect_confirmation();
                } else {
                    self.widget.request_connect();
                }
            }
            AppCommand::ConfirmDisconnect => {
                self.spawn_disconnect();
            }
            AppCommand::CancelDisconnect => {
                self.widget.cancel_disconnect();
            }
            AppCommand::CycleNetwork => {
                self.cycle_network();
            }

            // === Application Control ===
            AppCommand::RequestQuit => {
                self.ui.open_confirm_quit();
            }
            AppCommand::ConfirmQuit => {
                self.exit = true;
            }
            AppCommand::Dismiss => {
                self.ui.dismiss_popup();
            }
            AppCommand::Noop => {}
        }
    }

    /// Issues the provider's disconnect in the background.
    ///
    /// The outcome comes back as [`AppMessage::DisconnectSettled`]; the
    /// widget refuses a second confirm while one is pending.
    fn spawn_disconnect(&mut self) {
        let Some(call) = self.widget.confirm_disconnect() else {
            return;
        };
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = call.await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::DisconnectSettled(result));
        });
    }

    /// Switches to the next network and saves the preference.
    ///
    /// Sessions are bound to a network, so this is refused while connected.
    pub(crate) fn cycle_network(&mut self) {
        if self.widget.connection().is_connected() {
            self.ui
                .show_toast(TOAST_NETWORK_LOCKED, ToastKind::Info, TOAST_TICKS);
            return;
        }

        let network = self.config.network.next();
        self.config.network = network;
        self.widget.provider().select_network(network);
        tracing::info!(%network, "Network selected");

        if let Some(path) = &self.config_path
            && let Err(err) = self.config.save_to(path)
        {
            tracing::warn!("Failed to save config: {err}");
        }

        self.ui.show_toast(
            format!("Network: {network}"),
            ToastKind::Info,
            TOAST_TICKS,
        );
    }
}
