// Clipboard - Terminal clipboard access through OSC 52
use base64::Engine;
use std::io::{self, Write};

use tracing::{debug, warn};

/// Copy `text` to the system clipboard of the controlling terminal
pub fn copy_to_clipboard(text: &str) -> bool {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    copy_with(&mut handle, text)
}

/// Emit the OSC 52 "set clipboard" sequence to `out`
pub fn copy_with<W: Write>(out: &mut W, text: &str) -> bool {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());

    let result = write!(out, "\x1b]52;c;{}\x07", payload).and_then(|_| out.flush());
    match result {
        Ok(()) => {
            debug!("Copied {} bytes to clipboard", text.len());
            true
        }
        Err(e) => {
            warn!("Clipboard copy failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenTerminal;

    impl Write for BrokenTerminal {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_osc52_sequence() {
        let mut out = Vec::new();
        assert!(copy_with(&mut out, "show arp"));
        assert_eq!(out, b"\x1b]52;c;c2hvdyBhcnA=\x07");
    }

    #[test]
    fn test_copy_failure_is_false() {
        assert!(!copy_with(&mut BrokenTerminal, "text"));
    }
}
