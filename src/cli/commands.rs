use crate::cli::args::{Args, Command, ConfigCommand, ConnectArgs};
use crate::cli::output::{ConsoleWriter, OutputWriter, PortEntry};
use crate::core::exchange::{BlockingRunner, ExchangeDriver, ThreadPacer};
use crate::core::shell::{ExchangeRequest, Shell};
use crate::domain::about::{version_banner, CHANGELOG};
use crate::domain::config::SwitchCfgConfig;
use crate::domain::error::{SwitchCfgError, ValidationError};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::{default_log_file, init_logging, LogTarget};
use crate::infrastructure::serial::{discover_ports, SerialConnector};
use crate::tui::app::App;
use std::path::Path;
use std::sync::Arc;

/// Execute CLI command
pub async fn execute_command(args: Args) -> Result<(), SwitchCfgError> {
    let writer = ConsoleWriter::new(args.output.clone());

    // Load configuration using ConfigManager
    let config_manager = ConfigManager::new()?;
    let config = if let Some(config_path) = &args.config {
        config_manager.load_config_from_path(config_path.as_ref())?
    } else {
        config_manager.load_config()?
    };

    // Initialize logging
    if !args.quiet {
        let target = match args.command {
            Command::Tui => LogTarget::File(default_log_file()),
            _ => LogTarget::Stderr,
        };
        init_logging(&config.global.log_level, args.verbose, target)?;
    }

    let shell = build_shell(&config);

    match args.command {
        Command::Send(send_args) => {
            let command_text = send_args.command.join(" ");
            execute_exchange(&shell, &config, &send_args.connect, command_text, &writer).await
        }
        Command::Macro(macro_args) => {
            if shell.catalog().find_macro(&macro_args.name).is_none() {
                return Err(ValidationError::UnknownMacro(macro_args.name).into());
            }
            execute_exchange(&shell, &config, &macro_args.connect, macro_args.name, &writer).await
        }
        Command::Ports => {
            let defaults = shell.catalog().ports.clone();
            let entries: Vec<PortEntry> = shell
                .catalog()
                .ports_with(discover_ports())
                .into_iter()
                .map(|port| {
                    let source = if defaults.contains(&port) { "default" } else { "detected" };
                    PortEntry { port, source }
                })
                .collect();
            writer.write_ports(&entries)?;
            Ok(())
        }
        Command::Commands => {
            writer.write_catalog(shell.catalog())?;
            Ok(())
        }
        Command::Config(config_args) => {
            execute_config_command(config_args.command, &writer, &config, &config_manager)
        }
        Command::Tui => {
            let mut app = App::new(Arc::new(shell), &config, discover_ports())?;
            app.run().await
        }
        Command::Version => {
            writer.write_message(&version_banner())?;
            writer.write_message(CHANGELOG)?;
            Ok(())
        }
    }
}

/// Shell wired to real serial ports
pub fn build_shell(config: &SwitchCfgConfig) -> Shell {
    let driver = ExchangeDriver::new(
        Arc::new(SerialConnector),
        Arc::new(ThreadPacer),
        config.timing.clone(),
    );
    Shell::from_config(Arc::new(BlockingRunner::new(driver)), config)
}

async fn execute_exchange(
    shell: &Shell,
    config: &SwitchCfgConfig,
    connect: &ConnectArgs,
    command_text: String,
    writer: &ConsoleWriter,
) -> Result<(), SwitchCfgError> {
    let request = ExchangeRequest {
        port: connect
            .port
            .clone()
            .unwrap_or_else(|| config.serial.default_port.clone()),
        baud: connect.baud.unwrap_or_else(|| config.serial.default_baud.as_u32()),
        command_text,
    };

    let prepared = shell.prepare(&request)?;
    writer.write_notice(&format!(
        "Running on {} at {} baud...",
        prepared.params.port, prepared.params.baud_rate
    ))?;

    let outcome = shell.run(prepared).await;
    let text = outcome.result?;

    writer.write_exchange(&text)?;

    if let Some(report) = &outcome.saved {
        writer.write_notice(&report.notice())?;
    }

    if let Some(path) = &connect.save {
        let report = shell.save_output_to(&text, Path::new(path));
        writer.write_notice(&report.notice())?;
    }

    if connect.copy {
        // Stdout may be redirected to a file; the escape goes to the terminal on stderr
        let notice = if shell.copy_output_to(&text, &mut std::io::stderr().lock()) {
            "Output copied to clipboard."
        } else {
            "Failed to copy output to clipboard."
        };
        writer.write_notice(notice)?;
    }

    Ok(())
}

fn execute_config_command(
    command: ConfigCommand,
    writer: &ConsoleWriter,
    config: &SwitchCfgConfig,
    config_manager: &ConfigManager,
) -> Result<(), SwitchCfgError> {
    match command {
        ConfigCommand::Show => {
            writer.write_config(config)?;
            Ok(())
        }
        ConfigCommand::Init { dir, global } => {
            if global {
                let global_path = config_manager.get_global_config_path_ref();
                config_manager.save_config_to_path(global_path, &SwitchCfgConfig::default())?;
                writer.write_message(&format!("Global configuration initialized at '{}'", global_path.display()))?;
            } else {
                let project_dir = match dir {
                    Some(dir) => dir.into(),
                    None => std::env::current_dir()?,
                };
                let path = config_manager.init_project_config(&project_dir)?;
                writer.write_message(&format!("Project configuration initialized at '{}'", path.display()))?;
            }
            Ok(())
        }
        ConfigCommand::Path => {
            writer.write_message(&format!(
                "Global: {}",
                config_manager.get_global_config_path_ref().display()
            ))?;
            match config_manager.get_project_config_path() {
                Some(path) => writer.write_message(&format!("Project: {}", path.display()))?,
                None => writer.write_message("Project: (none)")?,
            }
            Ok(())
        }
    }
}
