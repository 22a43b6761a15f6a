use std::path::PathBuf;

use crate::{
    core::shell::{ExchangeRequest, ShellOutcome},
    domain::{catalog::Catalog, config::SwitchCfgConfig},
};

use super::input::InputBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePanel {
    Configure,
    Version,
    Help,
}

impl ActivePanel {
    pub const ALL: [ActivePanel; 3] = [ActivePanel::Configure, ActivePanel::Version, ActivePanel::Help];

    pub fn index(self) -> usize {
        match self {
            ActivePanel::Configure => 0,
            ActivePanel::Version => 1,
            ActivePanel::Help => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ActivePanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivePanel::Configure => write!(f, "Configure"),
            ActivePanel::Version => write!(f, "Version"),
            ActivePanel::Help => write!(f, "Help"),
        }
    }
}

/// Focusable fields of the Configure panel, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Port,
    Baud,
    Command,
    Macro,
    Input,
    Output,
}

impl Field {
    const ORDER: [Field; 6] = [Field::Port, Field::Baud, Field::Command, Field::Macro, Field::Input, Field::Output];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_selector(self) -> bool {
        matches!(self, Field::Port | Field::Baud | Field::Command | Field::Macro)
    }
}

/// A dropdown-like list with one selected entry
#[derive(Debug, Clone)]
pub struct Selector {
    options: Vec<String>,
    selected: usize,
}

impl Selector {
    pub fn new(options: Vec<String>) -> Self {
        Self { options, selected: 0 }
    }

    /// Options preceded by an empty "nothing selected" entry
    pub fn with_blank(options: Vec<String>) -> Self {
        let mut all = Vec::with_capacity(options.len() + 1);
        all.push(String::new());
        all.extend(options);
        Self::new(all)
    }

    pub fn value(&self) -> &str {
        self.options.get(self.selected).map(String::as_str).unwrap_or("")
    }

    pub fn select_value(&mut self, value: &str) {
        if let Some(index) = self.options.iter().position(|o| o == value) {
            self.selected = index;
        }
    }

    pub fn cycle(&mut self, delta: isize) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }
}

#[derive(Debug)]
pub struct AppState {
    pub active_panel: ActivePanel,
    pub focus: Field,
    pub port: Selector,
    pub baud: Selector,
    pub command: Selector,
    pub macros: Selector,
    pub input: InputBuffer,
    /// Raw text of the last exchange, or its failure message
    pub output: String,
    pub output_scroll: u16,
    pub status_message: Option<String>,
    /// Port of the exchange in flight
    pub running: Option<String>,
    pub output_file: PathBuf,
}

impl AppState {
    /// `discovered` holds the ports the OS reports, listed after the defaults
    pub fn new(catalog: &Catalog, config: &SwitchCfgConfig, discovered: Vec<String>) -> Self {
        let default_port = &config.serial.default_port;
        let mut ports = catalog.ports_with(discovered);
        if !default_port.is_empty() && !ports.contains(default_port) {
            ports.push(default_port.clone());
        }

        let mut port = Selector::with_blank(ports);
        if !default_port.is_empty() {
            port.select_value(default_port);
        }

        let mut baud = Selector::new(catalog.baud_rates.iter().map(|b| b.to_string()).collect());
        baud.select_value(&config.serial.default_baud.to_string());

        Self {
            active_panel: ActivePanel::Configure,
            focus: Field::Port,
            port,
            baud,
            command: Selector::with_blank(catalog.commands.clone()),
            macros: Selector::with_blank(catalog.macros.iter().map(|m| m.name.clone()).collect()),
            input: InputBuffer::new(),
            output: String::new(),
            output_scroll: 0,
            status_message: Some("Select a port and a command, then press Enter. F3 for help.".to_string()),
            running: None,
            output_file: PathBuf::from(&config.global.output_file),
        }
    }

    /// Cycle the focused selector; catalog picks replace the command text
    pub fn cycle_focused(&mut self, delta: isize) {
        match self.focus {
            Field::Port => self.port.cycle(delta),
            Field::Baud => self.baud.cycle(delta),
            Field::Command => {
                self.command.cycle(delta);
                if !self.command.value().is_empty() {
                    self.input.set(self.command.value());
                }
            }
            Field::Macro => {
                self.macros.cycle(delta);
                if !self.macros.value().is_empty() {
                    self.input.set(self.macros.value());
                }
            }
            Field::Input | Field::Output => {}
        }
    }

    pub fn request(&self) -> ExchangeRequest {
        ExchangeRequest {
            port: self.port.value().to_string(),
            baud: self.baud.value().parse().unwrap_or(0),
            command_text: self.input.content().to_string(),
        }
    }

    pub fn begin_exchange(&mut self, port: &str) {
        self.running = Some(port.to_string());
        self.status_message = Some(format!("Running exchange on {}...", port));
    }

    pub fn finish_exchange(&mut self, outcome: ShellOutcome) {
        self.running = None;
        self.output_scroll = 0;

        let status = match (&outcome.result, &outcome.saved) {
            (Err(_), _) => "Exchange failed.".to_string(),
            (Ok(_), Some(report)) => report.notice(),
            (Ok(text), None) => format!("Received {} bytes.", text.len()),
        };

        self.output = outcome.display;
        self.status_message = Some(status);
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Output lines as drawn; carriage returns from the switch are dropped
    pub fn output_lines(&self) -> impl Iterator<Item = &str> {
        self.output.lines().map(|line| line.trim_end_matches('\r'))
    }

    pub fn scroll_output(&mut self, delta: i32) {
        let max = self.output_lines().count().saturating_sub(1).min(u16::MAX as usize) as i32;
        self.output_scroll = (self.output_scroll as i32 + delta).clamp(0, max) as u16;
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
