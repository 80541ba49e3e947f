//! Message processing and provider state sync.

use super::{App, AppMessage, ToastKind};
use crate::constants::{TOAST_CONNECTED, TOAST_DISCONNECTED, TOAST_TICKS};
use crate::provider::WalletProvider;
use crate::widget::ConnectionChange;

impl<P: WalletProvider> App<P> {
    /// Drains pending messages, then applies the latest provider state.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                AppMessage::DisconnectSettled(result) => {
                    self.widget.finish_disconnect(result);
                }
            }
        }

        self.sync_connection();
    }

    /// Applies provider state changes to the widget, announcing flips.
    pub(crate) fn sync_connection(&mut self) {
        match self.widget.sync() {
            Some(ConnectionChange::Connected(_)) => {
                self.ui
                    .show_toast(TOAST_CONNECTED, ToastKind::Success, TOAST_TICKS);
            }
            Some(ConnectionChange::Disconnected) => {
                self.ui
                    .show_toast(TOAST_DISCONNECTED, ToastKind::Info, TOAST_TICKS);
            }
            None => {}
        }
    }
}
