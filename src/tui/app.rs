use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::{
    event::{AppEvent, EventHandler},
    state::AppState,
    ui::draw_ui,
};
use crate::{
    core::shell::{Shell, ShellOutcome},
    domain::{config::SwitchCfgConfig, error::SwitchCfgError},
};

pub struct App {
    state: AppState,
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    events: EventHandler,
    tick_rate: Duration,
    shell: Arc<Shell>,
    outcome_tx: mpsc::UnboundedSender<ShellOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<ShellOutcome>,
}

impl App {
    pub fn new(shell: Arc<Shell>, config: &SwitchCfgConfig, discovered_ports: Vec<String>) -> Result<Self, SwitchCfgError> {
        let state = AppState::new(shell.catalog(), config, discovered_ports);

        // Setup terminal
        enable_raw_mode().map_err(|e| SwitchCfgError::Tui(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| SwitchCfgError::Tui(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| SwitchCfgError::Tui(e.to_string()))?;

        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Ok(Self {
            state,
            terminal,
            events: EventHandler::new(),
            tick_rate: Duration::from_millis(100),
            shell,
            outcome_tx,
            outcome_rx,
        })
    }

    pub async fn run(&mut self) -> Result<(), SwitchCfgError> {
        info!("TUI started");

        loop {
            // Draw UI
            let state = &self.state;
            self.terminal
                .draw(|f| draw_ui(f, state))
                .map_err(|e| SwitchCfgError::Tui(e.to_string()))?;

            // Finished exchanges
            while let Ok(outcome) = self.outcome_rx.try_recv() {
                self.state.finish_exchange(outcome);
            }

            // Handle events
            if event::poll(self.tick_rate).map_err(|e| SwitchCfgError::Tui(e.to_string()))? {
                if let Event::Key(key) = event::read().map_err(|e| SwitchCfgError::Tui(e.to_string()))? {
                    if let Some(app_event) = self.events.handle_key_event(key, &mut self.state) {
                        if self.handle_app_event(app_event) {
                            break;
                        }
                    }
                }
            }

            // Let spawned exchanges make progress
            tokio::task::yield_now().await;
        }

        info!("TUI stopped");
        Ok(())
    }

    /// Returns true when the app should quit
    fn handle_app_event(&mut self, app_event: AppEvent) -> bool {
        match app_event {
            AppEvent::Quit => return true,
            AppEvent::Execute => self.start_exchange(),
            AppEvent::CopyOutput => {
                let notice = if self.shell.copy_output(&self.state.output) {
                    "Output copied to clipboard."
                } else {
                    "Failed to copy output to clipboard."
                };
                self.state.set_status_message(notice.to_string());
            }
            AppEvent::SaveOutput => {
                let report = self.shell.save_output_to(&self.state.output, &self.state.output_file);
                self.state.set_status_message(report.notice());
            }
        }
        false
    }

    fn start_exchange(&mut self) {
        if let Some(port) = &self.state.running {
            let notice = format!("An exchange is already running on {}.", port);
            self.state.set_status_message(notice);
            return;
        }

        let prepared = match self.shell.prepare(&self.state.request()) {
            Ok(prepared) => prepared,
            Err(e) => {
                warn!("Rejected request: {}", e);
                self.state.set_status_message(e.to_string());
                return;
            }
        };

        self.state.begin_exchange(&prepared.params.port);

        let shell = Arc::clone(&self.shell);
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = shell.run(prepared).await;
            if outcome_tx.send(outcome).is_err() {
                warn!("Exchange finished after the TUI closed");
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
