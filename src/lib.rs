//! SwitchCfg Library
//!
//! Runs Cisco CLI commands over a serial console: one blocking
//! open-write-read-close exchange per request, driven from a CLI or a TUI.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use crate::core::exchange::{CommandBatch, ExchangeDriver, ExchangeRunner};
pub use crate::core::shell::{ExchangeRequest, Shell, ShellOutcome};
pub use crate::domain::config::{BaudRate, ConnectionParameters, SwitchCfgConfig, TimingPolicy};
pub use crate::domain::error::{ExchangeError, ExchangeResult, SwitchCfgError, SwitchCfgResult, ValidationError};
