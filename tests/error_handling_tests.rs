use std::error::Error;
use std::io;
use switchcfg::{ExchangeError, SwitchCfgError, SwitchCfgResult, ValidationError};

/// Error handling tests
#[cfg(test)]
mod error_handling_tests {
    use super::*;

    fn exchange_errors() -> Vec<ExchangeError> {
        vec![
            ExchangeError::PortOpen {
                port: "COM3".to_string(),
                source: serialport::Error::new(serialport::ErrorKind::NoDevice, "Access is denied"),
            },
            ExchangeError::Write {
                source: io::Error::new(io::ErrorKind::BrokenPipe, "cable unplugged"),
            },
            ExchangeError::Read {
                captured: 128,
                source: io::Error::new(io::ErrorKind::Other, "framing error"),
            },
            ExchangeError::Decode {
                source: String::from_utf8(vec![0xff, 0xfe]).unwrap_err(),
            },
        ]
    }

    #[test]
    fn test_exchange_errors_keep_their_cause() {
        for error in exchange_errors() {
            let display = error.to_string();
            assert!(!display.is_empty(), "Error display should not be empty");
            assert!(error.source().is_some(), "{} lost its cause", display);
        }

        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<ExchangeError>();
        assert_send_sync::<SwitchCfgError>();
    }

    #[test]
    fn test_exchange_error_messages() {
        let messages: Vec<String> = exchange_errors().iter().map(ToString::to_string).collect();
        assert!(messages[0].contains("COM3"));
        assert!(messages[0].contains("Access is denied"));
        assert!(messages[1].contains("cable unplugged"));
        assert!(messages[2].contains("128"));
        assert!(messages[3].contains("UTF-8"));
    }

    #[test]
    fn test_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: SwitchCfgError = io_error.into();
        assert!(matches!(err, SwitchCfgError::Io(_)));

        let err: SwitchCfgError = ValidationError::MissingPort.into();
        assert!(matches!(err, SwitchCfgError::Validation(ValidationError::MissingPort)));
        assert_eq!(err.to_string(), "Please select a COM Port.");

        let err: SwitchCfgError = ExchangeError::Read {
            captured: 0,
            source: io::Error::new(io::ErrorKind::Other, "device reset"),
        }
        .into();
        assert!(matches!(err, SwitchCfgError::Exchange(ExchangeError::Read { .. })));
    }

    #[test]
    fn test_result_type() {
        fn parse_baud(text: &str) -> SwitchCfgResult<u32> {
            let baud: u32 = text
                .parse()
                .map_err(|_| ValidationError::UnsupportedBaud(text.to_string()))?;
            Ok(baud)
        }

        assert_eq!(parse_baud("9600").unwrap(), 9600);
        let err = parse_baud("fast").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported BAUD rate: fast");
    }

    #[test]
    fn test_config_error_display() {
        let error = SwitchCfgError::Config {
            message: "invalid type: string \"fast\", expected u32".to_string(),
        };
        assert!(error.to_string().starts_with("Configuration error"));
    }
}
