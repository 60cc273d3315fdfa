// src/output/clipboard.rs

//! The clipboard collaborator.

use crate::errors::ClipboardError;

/// Receives the finished artifact text.
pub trait ClipboardSink {
    /// Places `text` on the clipboard.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, through `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    #[cfg(feature = "clipboard")]
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        use arboard::Clipboard;
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Initialization(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::SetContent(e.to_string()))?;
        Ok(())
    }

    #[cfg(not(feature = "clipboard"))]
    fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

/// A sink that declines every copy; used with `--no-clipboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardSink for NoClipboard {
    fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Disabled)
    }
}
