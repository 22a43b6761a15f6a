use std::path::Path;
use std::process::{Command, Output};
use std::str;
use tempfile::TempDir;

/// CLI interface tests
#[cfg(test)]
mod cli_tests {
    use super::*;

    const TEST_CONFIG: &str = r#"
[global]
log_level = "warn"

[serial]
default_port = ""
default_baud = 9600

[timing]
settle_delay_ms = 0
command_delay_ms = 0
read_timeout_ms = 10
chunk_size = 4096

[[macros]]
name = "Interface summary"
description = "Brief interface and VLAN status"
commands = ["term len 0", "show ip int brief", "show vlan brief"]
"#;

    fn write_config(dir: &Path) -> String {
        let path = dir.join("config.toml");
        std::fs::write(&path, TEST_CONFIG).expect("Failed to write test config");
        path.to_string_lossy().into_owned()
    }

    fn switchcfg(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_switchcfg"))
            .args(args)
            .output()
            .expect("Failed to execute command")
    }

    #[test]
    fn test_cli_help() {
        let output = switchcfg(&["--help"]);
        let stdout = str::from_utf8(&output.stdout).expect("Invalid UTF-8");

        assert!(output.status.success());
        assert!(stdout.contains("Usage:"));
        assert!(stdout.contains("Commands:"));
        for command in ["send", "macro", "ports", "commands", "config", "tui", "version"] {
            assert!(stdout.contains(command), "help is missing '{}'", command);
        }
    }

    #[test]
    fn test_cli_version() {
        let output = switchcfg(&["version"]);
        let stdout = str::from_utf8(&output.stdout).expect("Invalid UTF-8");

        assert!(output.status.success());
        assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
        assert!(stdout.contains("1.6"));
    }

    #[test]
    fn test_cli_commands_lists_catalog() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path());

        let output = switchcfg(&["--config", &config, "commands"]);
        let stdout = str::from_utf8(&output.stdout).expect("Invalid UTF-8");

        assert!(output.status.success());
        assert!(stdout.contains("show version"));
        assert!(stdout.contains("show ip int brief"));
        assert!(stdout.contains("Execute term len 0 and show run"));
        assert!(stdout.contains("Interface summary"));
    }

    #[test]
    fn test_cli_commands_json() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path());

        let output = switchcfg(&["--config", &config, "--output", "json", "commands"]);
        let stdout = str::from_utf8(&output.stdout).expect("Invalid UTF-8");

        assert!(output.status.success());
        let parsed: serde_json::Value = serde_json::from_str(stdout).expect("Invalid JSON");
        assert!(parsed.is_object() || parsed.is_array());
    }

    #[test]
    fn test_cli_send_without_port() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path());

        let output = switchcfg(&["--quiet", "--config", &config, "send", "show", "version"]);
        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");

        assert!(!output.status.success());
        assert!(stderr.contains("Please select a COM Port."));
    }

    #[test]
    fn test_cli_send_unsupported_baud() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path());

        let output = switchcfg(&[
            "--quiet", "--config", &config, "send", "--port", "COM1", "--baud", "1200", "show", "arp",
        ]);
        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");

        assert!(!output.status.success());
        assert!(stderr.contains("1200"));
    }

    #[test]
    fn test_cli_send_to_missing_port() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path());
        let port = dir.path().join("ttyUSB-missing");
        let port = port.to_string_lossy();

        let output = switchcfg(&["--quiet", "--config", &config, "send", "--port", &port, "show", "arp"]);
        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");

        assert!(!output.status.success());
        assert!(stderr.contains("ttyUSB-missing"));
    }

    #[test]
    fn test_cli_unknown_macro() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path());

        let output = switchcfg(&["--quiet", "--config", &config, "macro", "--port", "COM1", "Reload switch"]);
        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");

        assert!(!output.status.success());
        assert!(stderr.contains("Reload switch"));
    }

    #[test]
    fn test_cli_config_init_creates_project_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().to_string_lossy().into_owned();

        let output = switchcfg(&["--quiet", "config", "init", "--dir", &target]);

        assert!(output.status.success());
        assert!(dir.path().join(".switchcfg").join("config.toml").exists());

        let again = switchcfg(&["--quiet", "config", "init", "--dir", &target]);
        assert!(!again.status.success());
    }
}
