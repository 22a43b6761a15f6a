// Static text shown by `switchcfg version` and the Version/Help tabs

pub const APP_TITLE: &str = "Cisco Switch Configurator";

pub const CHANGELOG: &str = "\
Changelog:
- Version 1.6:
  - Custom commands can be typed and sent with Enter.
  - Macro that runs \"term len 0\" and \"show run\" and saves the output to a log file.
  - Clearer error messages.
  - BAUD rate selection.
  - Macro selector for predefined command sequences.
  - A carriage return is sent before and after the commands.
- Version 1.5:
  - COM port selector with default COM ports.
  - Layout and readability improvements.
- Version 1.4:
  - Progress notice while an exchange is running.
- Version 1.3:
  - Larger outputs are captured in full.
- Version 1.2:
  - Interface improvements.
- Version 1.1:
  - Initial release.
";

pub const HELP_TEXT: &str = "\
Runs Cisco CLI commands over a serial console connection.

Features
- Serial communication with the switch on the selected port and BAUD rate.
- Single commands or predefined macros.
- Output shown on screen, copied to the clipboard or saved to a file.
- Validation and connection errors reported in place of the output.

Usage
1. Select the COM port and BAUD rate.
2. Pick a command from the list, pick a macro, or type a command.
3. Press Enter to run it on the switch.
4. Read the output below. Ctrl+Y copies it, Ctrl+S saves it.

Keys
  F1 / F2 / F3         Configure / Version / Help tab
  Tab / Shift+Tab      Move between fields
  Left / Right         Change the selected port, BAUD rate, command or macro
  Enter                Run
  Up / Down, PgUp/PgDn Scroll output
  Ctrl+Y               Copy output to clipboard
  Ctrl+S               Save output to the configured output file
  Esc / Ctrl+C         Quit
";

pub fn version_banner() -> String {
    format!("{} Version {}", APP_TITLE, env!("CARGO_PKG_VERSION"))
}
