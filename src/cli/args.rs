use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Command line arguments for SwitchCfg
#[derive(Parser, Debug)]
#[command(
    name = "switchcfg",
    version = env!("CARGO_PKG_VERSION"),
    about = "Cisco switch serial console tool",
    long_about = "Runs Cisco CLI commands over a serial console connection and shows, copies or saves what the switch sends back."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format for listings
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send one command (or a macro by name) and print the switch output
    Send(SendArgs),
    /// Run a named macro
    Macro(MacroArgs),
    /// List serial ports
    Ports,
    /// List diagnostic commands and macros
    Commands,
    /// Configuration management commands
    Config(ConfigArgs),
    /// Interactive TUI mode
    Tui,
    /// Display version information and changelog
    Version,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
}

/// Serial connection arguments
#[derive(ClapArgs, Debug, Clone)]
pub struct ConnectArgs {
    /// Serial port (e.g. COM3 or /dev/ttyUSB0); falls back to the configured default
    #[arg(short, long)]
    pub port: Option<String>,

    /// Baud rate (9600, 19200, 38400, 57600, 115200); falls back to the configured default
    #[arg(short, long)]
    pub baud: Option<u32>,

    /// Also save the output to this file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Also copy the output to the terminal clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Arguments for `send`
#[derive(ClapArgs, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Command text; words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub command: Vec<String>,
}

/// Arguments for `macro`
#[derive(ClapArgs, Debug)]
pub struct MacroArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Macro name as listed by `switchcfg commands`
    pub name: String,
}

/// Configuration management arguments
#[derive(ClapArgs, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show effective configuration
    Show,
    /// Create default configuration
    Init {
        /// Project directory (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<String>,
        /// Write the global configuration instead
        #[arg(short, long)]
        global: bool,
    },
    /// Print configuration file locations
    Path,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_joins_words() {
        let args = Args::try_parse_from([
            "switchcfg", "send", "--port", "COM3", "--baud", "115200", "show", "ip", "interface", "brief",
        ])
        .unwrap();

        match args.command {
            Command::Send(send) => {
                assert_eq!(send.connect.port.as_deref(), Some("COM3"));
                assert_eq!(send.connect.baud, Some(115200));
                assert_eq!(send.command.join(" "), "show ip interface brief");
                assert!(!send.connect.copy);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_send_requires_command() {
        assert!(Args::try_parse_from(["switchcfg", "send", "--port", "COM3"]).is_err());
    }

    #[test]
    fn test_global_output_flag() {
        let args = Args::try_parse_from(["switchcfg", "commands", "--output", "json"]).unwrap();
        assert!(matches!(args.output, OutputFormat::Json));
        assert!(matches!(args.command, Command::Commands));
    }

    #[test]
    fn test_config_init_dir() {
        let args = Args::try_parse_from(["switchcfg", "-o", "json", "config", "init", "--dir", "lab"]).unwrap();
        match args.command {
            Command::Config(ConfigArgs {
                command: ConfigCommand::Init { dir, global },
            }) => {
                assert_eq!(dir.as_deref(), Some("lab"));
                assert!(!global);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_macro_args() {
        let args = Args::try_parse_from(["switchcfg", "macro", "-p", "COM1", "--save", "run.log", "Dump"]).unwrap();
        match args.command {
            Command::Macro(m) => {
                assert_eq!(m.name, "Dump");
                assert_eq!(m.connect.save.as_deref(), Some("run.log"));
                assert_eq!(m.connect.baud, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
