//! Defines core data structures used throughout the application pipeline.
//!
//! `CandidateFile` flows from discovery into rendering, `RenderedBlock` from
//! rendering into the artifact writer, and `RunArtifact` is what a run leaves
//! behind.

use std::path::{Path, PathBuf};

/// A file that passed every selection filter.
///
/// # Examples
///
/// ```
/// use promptctx::core_types::CandidateFile;
/// use std::path::PathBuf;
///
/// let file = CandidateFile {
///     relative_path: PathBuf::from("pkg/main.py"),
///     absolute_path: PathBuf::from("/project/pkg/main.py"),
///     extension: ".py".to_string(),
///     size: 12,
/// };
///
/// assert_eq!(file.display_path(), "pkg/main.py");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// The path relative to the scan root.
    pub relative_path: PathBuf,
    /// The absolute path on disk.
    pub absolute_path: PathBuf,
    /// The extension including its leading dot (`".py"`), or empty.
    pub extension: String,
    /// File size in bytes, from metadata.
    pub size: u64,
}

impl CandidateFile {
    /// The relative path with forward slashes regardless of host.
    pub fn display_path(&self) -> String {
        posix_path(&self.relative_path)
    }
}

/// How a block's content came to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    /// Content rendered as intended.
    Rendered,
    /// A transformation failed and the raw text was embedded instead.
    RawFallback,
    /// Rendering failed; the content is an inline failure marker.
    Failed(String),
}

/// One fenced block of the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// The path relative to the scan root, shown above the fence.
    pub relative_path: PathBuf,
    /// The fence's language tag.
    pub language: &'static str,
    /// The text placed inside the fence.
    pub content: String,
    /// Whether the content is what was asked for.
    pub status: RenderStatus,
}

/// The result of a completed run.
#[derive(Debug, Clone)]
pub struct RunArtifact {
    /// The full artifact text.
    pub text: String,
    /// Where the artifact was written.
    pub output_path: PathBuf,
    /// Where the timestamped copy was written.
    pub history_path: PathBuf,
    /// Whether the clipboard sink accepted the text.
    pub clipboard_copied: bool,
}

/// Renders a path with `/` separators.
pub fn posix_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
