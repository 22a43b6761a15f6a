// Core module - Exchange driver and presentation shell
pub mod exchange;
pub mod shell;

pub use exchange::{CommandBatch, ExchangeDriver, ExchangeRunner};
pub use shell::{ExchangeRequest, SaveReport, Shell, ShellOutcome};
