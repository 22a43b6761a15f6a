use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::error::ValidationError;

/// SwitchCfg configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwitchCfgConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Serial defaults
    #[serde(default)]
    pub serial: SerialDefaults,
    /// Exchange timing policy
    #[serde(default)]
    pub timing: TimingPolicy,
    /// Extra named command sequences
    #[serde(default)]
    pub macros: Vec<MacroConfig>,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// File written by macro autosave and on-demand saves
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

/// Values preselected in the CLI and TUI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialDefaults {
    /// Port to preselect; empty means none
    #[serde(default)]
    pub default_port: String,
    #[serde(default)]
    pub default_baud: BaudRate,
}

/// Fixed waits used by an exchange.
///
/// The switch gives no completion signal, so every exchange is paced by
/// these constants. Longer delays capture slow output more reliably at the
/// cost of latency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingPolicy {
    /// Pause after opening the port so the prompt can settle
    #[serde(default = "default_settle_delay", with = "millis", rename = "settle_delay_ms")]
    pub settle_delay: Duration,
    /// Pause after every command line
    #[serde(default = "default_command_delay", with = "millis", rename = "command_delay_ms")]
    pub command_delay: Duration,
    /// Per-chunk read timeout; a read that times out ends the capture
    #[serde(default = "default_read_timeout", with = "millis", rename = "read_timeout_ms")]
    pub read_timeout: Duration,
    /// Bytes requested per read
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

/// A named command sequence declared in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub commands: Vec<String>,
    /// Save the output to `global.output_file` after a successful run
    #[serde(default)]
    pub autosave: bool,
}

/// Supported serial line rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BaudRate {
    #[default]
    B9600,
    B19200,
    B38400,
    B57600,
    B115200,
}

impl BaudRate {
    pub const ALL: [BaudRate; 5] = [
        BaudRate::B9600,
        BaudRate::B19200,
        BaudRate::B38400,
        BaudRate::B57600,
        BaudRate::B115200,
    ];

    pub fn as_u32(self) -> u32 {
        match self {
            BaudRate::B9600 => 9600,
            BaudRate::B19200 => 19200,
            BaudRate::B38400 => 38400,
            BaudRate::B57600 => 57600,
            BaudRate::B115200 => 115200,
        }
    }
}

impl TryFrom<u32> for BaudRate {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        BaudRate::ALL
            .into_iter()
            .find(|rate| rate.as_u32() == value)
            .ok_or_else(|| ValidationError::UnsupportedBaud(value.to_string()))
    }
}

impl From<BaudRate> for u32 {
    fn from(rate: BaudRate) -> Self {
        rate.as_u32()
    }
}

impl FromStr for BaudRate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::UnsupportedBaud(s.trim().to_string()))?;
        BaudRate::try_from(value)
    }
}

impl fmt::Display for BaudRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Serial settings for exactly one exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParameters {
    pub port: String,
    pub baud_rate: BaudRate,
    pub read_timeout: Duration,
}

impl ConnectionParameters {
    pub fn new(port: impl Into<String>, baud_rate: BaudRate, timing: &TimingPolicy) -> Self {
        Self {
            port: port.into(),
            baud_rate,
            read_timeout: timing.read_timeout,
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_file() -> String {
    "switch_config.log".to_string()
}

fn default_settle_delay() -> Duration {
    Duration::from_millis(2000)
}

fn default_command_delay() -> Duration {
    Duration::from_millis(2000)
}

fn default_read_timeout() -> Duration {
    Duration::from_millis(1000)
}

fn default_chunk_size() -> usize {
    4096
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_file: default_output_file(),
        }
    }
}

impl Default for SerialDefaults {
    fn default() -> Self {
        Self {
            default_port: String::new(),
            default_baud: BaudRate::default(),
        }
    }
}

impl Default for TimingPolicy {
    fn default() -> Self {
        Self {
            settle_delay: default_settle_delay(),
            command_delay: default_command_delay(),
            read_timeout: default_read_timeout(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl TimingPolicy {
    /// Policy with no waits, for simulated devices
    pub fn immediate() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            command_delay: Duration::ZERO,
            read_timeout: Duration::from_millis(10),
            chunk_size: default_chunk_size(),
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
