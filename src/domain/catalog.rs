use serde::Serialize;

use crate::domain::config::{BaudRate, MacroConfig, SwitchCfgConfig};

/// Read-only diagnostic commands offered for quick selection
pub const CISCO_COMMANDS: &[&str] = &[
    "show version",
    "show interfaces",
    "show ip interface brief",
    "show interfaces status",
    "show running-config",
    "show vlan brief",
    "show mac address-table",
    "show spanning-tree",
    "show arp",
    "show cdp neighbors",
    "show logging",
];

pub const DEFAULT_PORTS: &[&str] = &[
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9", "COM10",
];

pub const SHOW_RUN_MACRO: &str = "Execute term len 0 and show run";

/// A named batch of commands with optional post-processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Macro {
    pub name: String,
    pub description: String,
    pub commands: Vec<String>,
    /// Persist the output after a successful run
    pub autosave: bool,
}

impl From<MacroConfig> for Macro {
    fn from(config: MacroConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            commands: config.commands,
            autosave: config.autosave,
        }
    }
}

/// Fixed selection lists, built once at start-up
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub ports: Vec<String>,
    pub baud_rates: Vec<BaudRate>,
    pub commands: Vec<String>,
    pub macros: Vec<Macro>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            ports: DEFAULT_PORTS.iter().map(|p| p.to_string()).collect(),
            baud_rates: BaudRate::ALL.to_vec(),
            commands: CISCO_COMMANDS.iter().map(|c| c.to_string()).collect(),
            macros: vec![Macro {
                name: SHOW_RUN_MACRO.to_string(),
                description: "Disable paging, dump the running configuration and save it".to_string(),
                commands: vec!["term len 0".to_string(), "show run".to_string()],
                autosave: true,
            }],
        }
    }

    /// Built-in lists plus the macros declared in configuration.
    ///
    /// A configured macro never replaces a built-in one with the same name.
    pub fn from_config(config: &SwitchCfgConfig) -> Self {
        let mut catalog = Self::builtin();
        for macro_config in &config.macros {
            if catalog.find_macro(&macro_config.name).is_some() {
                tracing::warn!("Ignoring configured macro '{}': name already taken", macro_config.name);
                continue;
            }
            catalog.macros.push(macro_config.clone().into());
        }
        catalog
    }

    pub fn find_macro(&self, name: &str) -> Option<&Macro> {
        let name = name.trim();
        self.macros.iter().find(|m| m.name == name)
    }

    /// Default ports followed by discovered ports not already listed
    pub fn ports_with(&self, discovered: impl IntoIterator<Item = String>) -> Vec<String> {
        let mut ports = self.ports.clone();
        for port in discovered {
            if !ports.contains(&port) {
                ports.push(port);
            }
        }
        ports
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
