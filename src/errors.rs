//! Defines application-specific error types.
//!
//! The top-level [`Error`] enum mirrors the failure taxonomy of a run: most
//! variants are contained at the file boundary by the pipeline (ignore rules,
//! unreadable files, failed notebook conversions, clipboard problems), and only
//! [`Error::Write`] and [`Error::Config`] abort a run.

use std::path::Path;
use thiserror::Error;

/// Errors related to building a [`Config`](crate::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The target directory could not be resolved.
    #[error("Failed to resolve target directory '{path}': {source}")]
    UnresolvableTarget {
        /// The path as given by the user.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The target exists but is not a directory.
    #[error("Target '{0}' is not a directory")]
    NotADirectory(String),

    /// A value failed validation.
    #[error("Invalid value for '{option}': {reason}")]
    InvalidValue {
        /// The offending option.
        option: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors related to clipboard operations.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The clipboard could not be opened.
    #[error("Failed to initialize clipboard: {0}")]
    Initialization(String),
    /// The clipboard refused the text.
    #[error("Failed to set clipboard content: {0}")]
    SetContent(String),
    /// The binary was built without the `clipboard` feature.
    #[error("Clipboard support is not compiled in")]
    Unsupported,
    /// Copying was turned off for this run.
    #[error("Clipboard disabled")]
    Disabled,
}

/// Application-specific errors used throughout `promptctx`.
#[derive(Error, Debug)]
pub enum Error {
    /// A malformed ignore rule. The rule is skipped.
    #[error("Invalid ignore pattern '{pattern}': {reason}")]
    Pattern {
        /// The rule as written in its ignore file.
        pattern: String,
        /// The glob compiler's complaint.
        reason: String,
    },

    /// A candidate file that could not be read or decoded. The file is skipped.
    #[error("Failed to read '{path}': {source}")]
    FileRead {
        /// The offending file.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The external notebook converter failed. The file gets a failure marker.
    #[error("Notebook conversion failed for '{path}': {reason}")]
    Converter {
        /// The notebook being converted.
        path: String,
        /// What went wrong.
        reason: String,
    },

    /// The primary output (or its historical copy) could not be written. Fatal.
    #[error("Failed to write '{path}': {source}")]
    Write {
        /// The output path.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// No file listing could be obtained for the tree header. The header degrades to a placeholder.
    #[error("Failed to list files for the project tree: {0}")]
    Listing(String),

    /// Clipboard failure. Logged, never fatal.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// Invalid configuration. Fatal at startup.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Any other I/O failure with path context.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized `Result` type for `promptctx` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `Error::Write` with path context.
pub fn write_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Write {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `Error::FileRead` with path context.
pub fn read_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::FileRead {
        path: path.as_ref().display().to_string(),
        source,
    }
}
