// Logging module - Logging infrastructure
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::domain::error::{SwitchCfgError, SwitchCfgResult};

/// Where log records go
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    /// The TUI owns the terminal, so it logs to a file
    File(PathBuf),
}

/// Initialize logging system.
///
/// `RUST_LOG` wins over `level`; `verbose` forces debug.
pub fn init_logging(level: &str, verbose: bool, target: LogTarget) -> SwitchCfgResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { level };
        EnvFilter::new(format!("switchcfg={},warn", level))
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match target {
        LogTarget::Stderr => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .with_level(true),
            )
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        }
    };

    result.map_err(|e| SwitchCfgError::Config {
        message: format!("Failed to initialize logging: {}", e),
    })?;

    tracing::debug!("SwitchCfg logging system initialized");
    Ok(())
}

/// Default log file for the TUI
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("switchcfg")
        .join("switchcfg.log")
}
