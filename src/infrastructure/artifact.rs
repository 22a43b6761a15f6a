// Output artifact - Plain text files holding captured switch output
use std::fs;
use std::path::Path;

use tracing::{debug, error};

/// Write `text` to `path`, replacing any existing file.
///
/// Returns `false` instead of an error; the caller only shows a notice.
pub fn save_to_file(text: &str, path: &Path) -> bool {
    match fs::write(path, text) {
        Ok(()) => {
            debug!("Wrote {} bytes to {}", text.len(), path.display());
            true
        }
        Err(e) => {
            error!("Failed to write {}: {}", path.display(), e);
            false
        }
    }
}
