use crate::cli::args::OutputFormat;
use crate::domain::catalog::Catalog;
use crate::domain::config::SwitchCfgConfig;
use serde::Serialize;
use std::io::{self, Write};
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_ports(&self, ports: &[PortEntry]) -> Result<(), OutputError>;
    fn write_catalog(&self, catalog: &Catalog) -> Result<(), OutputError>;
    fn write_config(&self, config: &SwitchCfgConfig) -> Result<(), OutputError>;
    /// Switch output, written as-is
    fn write_exchange(&self, text: &str) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    /// Status notices go to stderr so they never mix with switch output
    fn write_notice(&self, notice: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("TOML serialization error: {0}")]
    TomlError(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::SwitchCfgError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// A serial port and where it came from
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct PortEntry {
    pub port: String,
    pub source: &'static str,
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_ports(&self, ports: &[PortEntry]) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                println!("Serial ports:");
                for entry in ports {
                    println!("  {} ({})", entry.port, entry.source);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(ports)?);
            }
            OutputFormat::Table => {
                if !ports.is_empty() {
                    println!("{}", Table::new(ports.to_vec()));
                }
            }
        }
        Ok(())
    }

    fn write_catalog(&self, catalog: &Catalog) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                println!("Commands:");
                for command in &catalog.commands {
                    println!("  {}", command);
                }
                println!();
                println!("Macros:");
                for macro_def in &catalog.macros {
                    let save = if macro_def.autosave { " [saves output]" } else { "" };
                    println!("  {}{}", macro_def.name, save);
                    for command in &macro_def.commands {
                        println!("    > {}", command);
                    }
                }
                println!();
                let rates: Vec<String> = catalog.baud_rates.iter().map(|b| b.to_string()).collect();
                println!("BAUD rates: {}", rates.join(", "));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(catalog)?);
            }
            OutputFormat::Table => {
                let rows: Vec<CatalogRow> = catalog
                    .commands
                    .iter()
                    .map(|c| CatalogRow {
                        kind: "command",
                        name: c.clone(),
                        sends: c.clone(),
                        autosave: false,
                    })
                    .chain(catalog.macros.iter().map(|m| CatalogRow {
                        kind: "macro",
                        name: m.name.clone(),
                        sends: m.commands.join(" ; "),
                        autosave: m.autosave,
                    }))
                    .collect();
                println!("{}", Table::new(rows));
            }
        }
        Ok(())
    }

    fn write_config(&self, config: &SwitchCfgConfig) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                println!("SwitchCfg Configuration:");
                println!("  Log level: {}", config.global.log_level);
                println!("  Output file: {}", config.global.output_file);
                let port = if config.serial.default_port.is_empty() {
                    "(none)"
                } else {
                    config.serial.default_port.as_str()
                };
                println!("  Default port: {}", port);
                println!("  Default BAUD rate: {}", config.serial.default_baud);
                println!("  Settle delay: {}ms", config.timing.settle_delay.as_millis());
                println!("  Command delay: {}ms", config.timing.command_delay.as_millis());
                println!("  Read timeout: {}ms", config.timing.read_timeout.as_millis());
                println!("  Chunk size: {} bytes", config.timing.chunk_size);
                if !config.macros.is_empty() {
                    println!("  Macros:");
                    for macro_def in &config.macros {
                        println!("    {}: {}", macro_def.name, macro_def.commands.join(" ; "));
                    }
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(config)?);
            }
            OutputFormat::Table => {
                println!("{}", toml::to_string_pretty(config)?);
            }
        }
        Ok(())
    }

    fn write_exchange(&self, text: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({ "output": text });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                if !text.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                println!("{}", message);
            }
        }
        Ok(())
    }

    fn write_notice(&self, notice: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "notice": notice,
                    "level": "info"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                eprintln!("{}", notice);
            }
        }
        Ok(())
    }
}

/// Table row for the command catalog
#[derive(Tabled)]
struct CatalogRow {
    kind: &'static str,
    name: String,
    sends: String,
    autosave: bool,
}
