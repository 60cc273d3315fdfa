// src/output/mod.rs

//! Assembles rendered blocks into the artifact and delivers it.
//!
//! The artifact is an optional tree header followed by one block per file:
//!
//! ````text
//! pkg/main.py
//! ```py
//! print("hi")
//! ```
//!
//! ````
//!
//! It is written to the data directory, copied byte for byte into the history
//! directory under a timestamped name, and offered to a [`ClipboardSink`].

use crate::config::Config;
use crate::constants::FENCE;
use crate::core_types::{posix_path, RenderedBlock, RunArtifact};
use crate::errors::Result;
use log::info;
use tracing::instrument;

pub mod clipboard;
pub mod naming;
pub mod tree;
mod writer;

pub use clipboard::{ClipboardSink, NoClipboard, SystemClipboard};

/// Formats one block: path, opening fence with language, content, closing fence.
///
/// A newline is appended to content that lacks one so the closing fence starts
/// its own line.
///
/// # Examples
///
/// ```
/// use promptctx::core_types::{RenderStatus, RenderedBlock};
/// use promptctx::output::format_block;
///
/// let block = RenderedBlock {
///     relative_path: "a.py".into(),
///     language: "py",
///     content: "x = 1".to_string(),
///     status: RenderStatus::Rendered,
/// };
/// assert_eq!(format_block(&block), "a.py\n```py\nx = 1\n```\n\n");
/// ```
pub fn format_block(block: &RenderedBlock) -> String {
    let mut out = String::with_capacity(block.content.len() + 32);
    out.push_str(&posix_path(&block.relative_path));
    out.push('\n');
    out.push_str(FENCE);
    out.push_str(block.language);
    out.push('\n');
    out.push_str(&block.content);
    if !block.content.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(FENCE);
    out.push_str("\n\n");
    out
}

/// Concatenates the optional header and all blocks, in order.
pub fn assemble(blocks: &[RenderedBlock], tree_header: Option<&str>) -> String {
    let mut text = String::new();
    if let Some(header) = tree_header {
        text.push_str(header);
    }
    for block in blocks {
        text.push_str(&format_block(block));
    }
    text
}

/// Writes the artifact and its historical copy, then offers it to `clipboard`.
///
/// # Errors
/// Returns `Error::Write` if the primary output or the historical copy cannot be
/// written. Clipboard failures are logged and reported through
/// [`RunArtifact::clipboard_copied`].
#[instrument(level = "debug", skip_all, fields(blocks = blocks.len()))]
pub fn write_artifact(
    blocks: &[RenderedBlock],
    config: &Config,
    tree_header: Option<&str>,
    clipboard: &dyn ClipboardSink,
) -> Result<RunArtifact> {
    let text = assemble(blocks, tree_header);
    writer::persist(&text, config)?;
    let copied = writer::offer_to_clipboard(&text, clipboard);
    info!(
        "Wrote {} blocks ({} bytes) to {}",
        blocks.len(),
        text.len(),
        config.output_path().display()
    );
    Ok(writer::artifact_record(text, config, copied))
}
