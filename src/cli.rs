// src/cli.rs

use crate::config::TreeSource;
use crate::constants::{DEFAULT_CONVERTER_PROGRAM, DEFAULT_CONVERTER_TIMEOUT_SECS, DEFAULT_TARGET_DIR};
use clap::Parser;

/// Packs a project directory into a single pasteable context file.
///
/// promptctx walks the target directory, keeps files with accepted extensions that
/// are not ignored by .gitignore rules or explicit exclusions, and concatenates them
/// as fenced blocks into one text file. Notebooks are converted to scripts and JSON
/// is pretty-printed. The result is copied to the clipboard and a timestamped copy
/// is kept in the history directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to scan.
    #[arg(default_value = DEFAULT_TARGET_DIR)]
    pub target_directory: String,

    // --- Selection Options ---
    /// Exclude these relative paths (prefix match) or globs (matched at any depth).
    /// Repeatable; comma-separated lists are accepted.
    #[arg(short = 'x', long = "exclude", value_name = "PATH|GLOB", value_delimiter = ',')]
    pub exclude_paths: Option<Vec<String>>,

    /// Accepted file extensions (leading dot optional). Repeatable; comma-separated lists are accepted.
    #[arg(short = 'e', long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub file_types: Option<Vec<String>>,

    /// Include zero-byte files (skipped by default).
    #[arg(short = 'E', long, action = clap::ArgAction::SetTrue)]
    pub include_empty: bool,

    /// Do not read .gitignore files.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_gitignore: bool,

    // --- Tree Header ---
    /// Prepend a project structure tree to the output.
    #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
    pub tree: bool,

    /// Limit the tree to this many levels below the target directory.
    #[arg(long, value_name = "DEPTH", requires = "tree")]
    pub tree_depth: Option<usize>,

    /// Which file listing the tree is built from.
    #[arg(long, value_enum, default_value_t = TreeSource::default(), requires = "tree")]
    pub tree_source: TreeSource,

    // --- Locations ---
    /// Project root; artifact names are derived from the target's path below it.
    #[arg(long, value_name = "DIR", env = "PROMPTCTX_PROJECT_ROOT")]
    pub project_root: Option<String>,

    /// Directory receiving the artifact, its history and converted notebooks.
    /// Defaults to `<project-root>/data`.
    #[arg(long, value_name = "DIR", env = "PROMPTCTX_DATA_DIR")]
    pub data_dir: Option<String>,

    // --- Collaborators ---
    /// Do not copy the output to the system clipboard.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_clipboard: bool,

    /// Program used to convert notebooks (invoked as `<PROGRAM> nbconvert --to script ...`).
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_CONVERTER_PROGRAM)]
    pub converter: String,

    /// Seconds to wait for a single notebook conversion before giving up.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_CONVERTER_TIMEOUT_SECS)]
    pub converter_timeout: u64,
}
