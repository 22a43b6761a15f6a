use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::core::exchange::{CommandBatch, ExchangeRunner};
use crate::domain::{
    catalog::Catalog,
    config::{BaudRate, ConnectionParameters, SwitchCfgConfig, TimingPolicy},
    error::{ExchangeResult, ValidationError},
};
use crate::infrastructure::{artifact, clipboard};

/// What the operator asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequest {
    pub port: String,
    pub baud: u32,
    /// Free-form command, or the name of a macro
    pub command_text: String,
}

/// A validated request, ready to hand to the runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedExchange {
    pub params: ConnectionParameters,
    pub batch: CommandBatch,
    pub macro_name: Option<String>,
    pub autosave: bool,
}

/// Result of a best-effort save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub path: PathBuf,
    pub saved: bool,
}

impl SaveReport {
    pub fn notice(&self) -> String {
        if self.saved {
            format!("Output saved to {}.", self.path.display())
        } else {
            "Failed to save output to file.".to_string()
        }
    }
}

#[derive(Debug)]
pub struct ShellOutcome {
    /// Text to render: the switch output, or the failure message
    pub display: String,
    pub result: ExchangeResult,
    pub macro_name: Option<String>,
    /// Present when a macro asked for its output to be saved
    pub saved: Option<SaveReport>,
}

impl ShellOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Turns operator input into exchanges and renders their outcome
pub struct Shell {
    runner: Arc<dyn ExchangeRunner>,
    catalog: Catalog,
    timing: TimingPolicy,
    output_file: PathBuf,
}

impl Shell {
    pub fn new(runner: Arc<dyn ExchangeRunner>, catalog: Catalog, timing: TimingPolicy, output_file: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            catalog,
            timing,
            output_file: output_file.into(),
        }
    }

    pub fn from_config(runner: Arc<dyn ExchangeRunner>, config: &SwitchCfgConfig) -> Self {
        Self::new(
            runner,
            Catalog::from_config(config),
            config.timing.clone(),
            &config.global.output_file,
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validate a request without touching the serial port
    pub fn prepare(&self, request: &ExchangeRequest) -> Result<PreparedExchange, ValidationError> {
        let port = request.port.trim();
        if port.is_empty() {
            return Err(ValidationError::MissingPort);
        }

        let command = request.command_text.trim();
        if command.is_empty() {
            return Err(ValidationError::EmptyCommand);
        }

        let baud_rate = BaudRate::try_from(request.baud)?;
        let params = ConnectionParameters::new(port, baud_rate, &self.timing);

        let prepared = match self.catalog.find_macro(command) {
            Some(macro_def) => PreparedExchange {
                params,
                batch: CommandBatch::from(macro_def),
                macro_name: Some(macro_def.name.clone()),
                autosave: macro_def.autosave,
            },
            None => PreparedExchange {
                params,
                batch: CommandBatch::single(command),
                macro_name: None,
                autosave: false,
            },
        };

        Ok(prepared)
    }

    /// Validate, run the exchange and apply macro post-processing.
    ///
    /// Exchange failures are not errors here: they come back as the
    /// displayable text of the outcome.
    pub async fn execute(&self, request: &ExchangeRequest) -> Result<ShellOutcome, ValidationError> {
        let prepared = self.prepare(request)?;
        Ok(self.run(prepared).await)
    }

    pub async fn run(&self, prepared: PreparedExchange) -> ShellOutcome {
        info!(
            "Running {} command(s) on {} at {} baud",
            prepared.batch.len(),
            prepared.params.port,
            prepared.params.baud_rate
        );

        let result = self.runner.run(prepared.params, prepared.batch).await;

        let display = match &result {
            Ok(text) => text.clone(),
            Err(e) => e.to_string(),
        };

        let saved = match (&result, prepared.autosave) {
            (Ok(text), true) => Some(self.save_output(text)),
            _ => None,
        };

        ShellOutcome {
            display,
            result,
            macro_name: prepared.macro_name,
            saved,
        }
    }

    /// Save to the configured output file
    pub fn save_output(&self, text: &str) -> SaveReport {
        self.save_output_to(text, &self.output_file)
    }

    pub fn save_output_to(&self, text: &str, path: &Path) -> SaveReport {
        let saved = artifact::save_to_file(text, path);
        if !saved {
            warn!("Could not save output to {}", path.display());
        }
        SaveReport {
            path: path.to_path_buf(),
            saved,
        }
    }

    pub fn copy_output(&self, text: &str) -> bool {
        clipboard::copy_to_clipboard(text)
    }

    /// Copy through a specific terminal stream, leaving stdout to the switch output
    pub fn copy_output_to<W: Write>(&self, text: &str, terminal: &mut W) -> bool {
        clipboard::copy_with(terminal, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::SHOW_RUN_MACRO;
    use async_trait::async_trait;

    struct NeverRunner;

    #[async_trait]
    impl ExchangeRunner for NeverRunner {
        async fn run(&self, _params: ConnectionParameters, _batch: CommandBatch) -> ExchangeResult {
            unreachable!("prepare never runs exchanges")
        }
    }

    fn shell() -> Shell {
        Shell::new(Arc::new(NeverRunner), Catalog::builtin(), TimingPolicy::default(), "switch_config.log")
    }

    fn request(port: &str, baud: u32, command: &str) -> ExchangeRequest {
        ExchangeRequest {
            port: port.to_string(),
            baud,
            command_text: command.to_string(),
        }
    }

    #[test]
    fn test_validation_order() {
        let shell = shell();
        assert_eq!(shell.prepare(&request("", 9600, "")), Err(ValidationError::MissingPort));
        assert_eq!(shell.prepare(&request("  ", 9600, "show arp")), Err(ValidationError::MissingPort));
        assert_eq!(shell.prepare(&request("COM1", 9600, " \n")), Err(ValidationError::EmptyCommand));
        assert_eq!(
            shell.prepare(&request("COM1", 1200, "show arp")),
            Err(ValidationError::UnsupportedBaud("1200".to_string()))
        );
    }

    #[test]
    fn test_free_text_is_single_command() {
        let prepared = shell().prepare(&request("COM4", 19200, " show vlan brief\n")).unwrap();
        assert_eq!(prepared.batch, CommandBatch::single("show vlan brief"));
        assert_eq!(prepared.params.port, "COM4");
        assert_eq!(prepared.params.baud_rate, BaudRate::B19200);
        assert!(prepared.macro_name.is_none());
        assert!(!prepared.autosave);
    }

    #[test]
    fn test_macro_name_selects_macro_batch() {
        let prepared = shell().prepare(&request("COM1", 9600, SHOW_RUN_MACRO)).unwrap();
        assert_eq!(prepared.batch, CommandBatch::new(["term len 0", "show run"]));
        assert_eq!(prepared.macro_name.as_deref(), Some(SHOW_RUN_MACRO));
        assert!(prepared.autosave);
    }

    #[test]
    fn test_save_report_notice() {
        let ok = SaveReport { path: PathBuf::from("switch_config.log"), saved: true };
        assert_eq!(ok.notice(), "Output saved to switch_config.log.");
        let failed = SaveReport { path: PathBuf::from("x"), saved: false };
        assert_eq!(failed.notice(), "Failed to save output to file.");
    }
}
