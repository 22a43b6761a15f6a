use thiserror::Error;

/// Failure of one serial exchange.
///
/// Every variant keeps the underlying cause and renders a message that can be
/// shown in place of the switch output.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Failed to open serial port {port}: {source}")]
    PortOpen {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("Failed to write to serial port: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read from serial port after {captured} bytes: {source}")]
    Read {
        captured: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Switch output is not valid UTF-8: {source}")]
    Decode {
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Operator input rejected before any serial port is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a COM Port.")]
    MissingPort,

    #[error("Please enter a command.")]
    EmptyCommand,

    #[error("Unsupported BAUD rate: {0}")]
    UnsupportedBaud(String),

    #[error("Unknown macro: {0}")]
    UnknownMacro(String),
}

/// SwitchCfg unified error type
#[derive(Error, Debug)]
pub enum SwitchCfgError {
    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(String),

    #[error("TUI error: {0}")]
    Tui(String),
}

pub type SwitchCfgResult<T> = Result<T, SwitchCfgError>;

/// Outcome of one exchange: captured text or a typed failure, never both.
pub type ExchangeResult = Result<String, ExchangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingPort.to_string(), "Please select a COM Port.");
        assert_eq!(ValidationError::EmptyCommand.to_string(), "Please enter a command.");
        assert!(ValidationError::UnsupportedBaud("1200".to_string())
            .to_string()
            .contains("1200"));
    }

    #[test]
    fn test_exchange_error_wraps_transparently() {
        let err: SwitchCfgError = ExchangeError::Write {
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"),
        }
        .into();

        assert_eq!(err.to_string(), "Failed to write to serial port: gone");
    }
}
