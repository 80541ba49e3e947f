//! Application lifecycle management.
//!
//! - `new()` - wires the widget to the provider
//! - `run()` - main event loop

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::config::RuntimeConfig;
use crate::constants::TICK_RATE;
use crate::logging::ErrorReporter;
use crate::provider::WalletProvider;
use crate::tui::Tui;
use crate::ui;
use crate::widget::ConnectionWidget;

use super::{App, AppConfig, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl<P: WalletProvider> App<P> {
    /// Creates a new App bound to `provider`.
    ///
    /// The provider is pointed at the configured network before the widget
    /// reads its initial state.
    #[must_use]
    pub fn new(
        provider: Arc<P>,
        runtime: RuntimeConfig,
        config: AppConfig,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        provider.select_network(config.network);
        let widget = ConnectionWidget::new(provider, reporter);

        Self {
            widget,
            ui: UiState::new(),
            config,
            runtime,
            exit: false,
            config_path: None,
            message_tx,
            message_rx,
        }
    }

    /// Persists preference changes to `path`.
    #[must_use]
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        self.draw(terminal)?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        self.draw(terminal)?;
                    }
                    Event::Mouse(mouse) => {
                        if self.handle_mouse_input(mouse) {
                            self.draw(terminal)?;
                        }
                    }
                    Event::Resize(_, _) => {
                        self.draw(terminal)?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.ui.tick_toast();
                self.draw(terminal)?;
                last_tick = Instant::now();
            }

            // Yield so spawned provider tasks make progress between polls.
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    fn draw(&mut self, terminal: &mut Tui) -> Result<()> {
        let completed = terminal.draw(|frame| ui::render(self, frame))?;
        self.ui.viewport = completed.area;
        Ok(())
    }
}
