// src/output/writer.rs

//! Writes the artifact and its historical copy, then hands the text to the clipboard.

use super::clipboard::ClipboardSink;
use crate::config::Config;
use crate::core_types::RunArtifact;
use crate::errors::{write_error_with_path, ClipboardError, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Writes `text` to the primary output, then the same bytes to the historical copy.
///
/// Parent directories are created as needed. A failure of either write is an
/// `Error::Write`; the primary is always written first.
pub(super) fn persist(text: &str, config: &Config) -> Result<()> {
    let output_path = config.output_path();
    write_creating_parent(&output_path, text)?;
    debug!("Wrote {} bytes to {}", text.len(), output_path.display());

    let history_path = config.history_path();
    write_creating_parent(&history_path, text)?;
    debug!("Wrote historical copy to {}", history_path.display());
    Ok(())
}

/// Offers `text` to the clipboard sink; returns whether it was accepted.
pub(super) fn offer_to_clipboard(text: &str, clipboard: &dyn ClipboardSink) -> bool {
    match clipboard.copy(text) {
        Ok(()) => {
            info!("Copied {} bytes to the clipboard", text.len());
            true
        }
        Err(ClipboardError::Disabled) => {
            debug!("Clipboard disabled, not copying");
            false
        }
        Err(e) => {
            warn!("{}", e);
            false
        }
    }
}

fn write_creating_parent(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_error_with_path(e, parent))?;
    }
    fs::write(path, text).map_err(|e| write_error_with_path(e, path))
}

/// Assembles the [`RunArtifact`] record for a written run.
pub(super) fn artifact_record(text: String, config: &Config, clipboard_copied: bool) -> RunArtifact {
    RunArtifact {
        text,
        output_path: config.output_path(),
        history_path: config.history_path(),
        clipboard_copied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use tempfile::tempdir;

    struct RefusingClipboard;

    impl ClipboardSink for RefusingClipboard {
        fn copy(&self, _text: &str) -> std::result::Result<(), ClipboardError> {
            Err(ClipboardError::Initialization("no display".to_string()))
        }
    }

    #[test]
    fn test_persist_writes_identical_primary_and_history() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let config = Config::new_for_test(temp.path());

        persist("hello\n", &config)?;

        let primary = fs::read(config.output_path())?;
        let history = fs::read(config.history_path())?;
        assert_eq!(primary, b"hello\n");
        assert_eq!(primary, history);
        assert!(config
            .history_path()
            .ends_with("history/test_code_2024-01-01_00-00-00.txt"));
        Ok(())
    }

    #[test]
    fn test_persist_failure_is_a_write_error() -> anyhow::Result<()> {
        let temp = tempdir()?;
        // A regular file where the data directory should be.
        let blocker = temp.path().join("data");
        fs::write(&blocker, "not a directory")?;
        let config = Config::new_for_test(temp.path());

        let err = persist("x", &config).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        Ok(())
    }

    #[test]
    fn test_clipboard_refusal_is_not_fatal() {
        assert!(!offer_to_clipboard("x", &RefusingClipboard));
        assert!(!offer_to_clipboard("x", &crate::output::NoClipboard));
    }
}
