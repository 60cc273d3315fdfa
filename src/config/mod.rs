//! Defines the core `Config` struct and related types for application configuration.
//!
//! A `Config` is built once per run (see [`ConfigBuilder`]) and passed by reference
//! to every stage. Nothing in it changes after `build()`, including the timestamp
//! used for the historical copy.

use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
pub mod path_resolve;
mod validation;

/// Everything the file selector needs to decide whether a file qualifies.
#[derive(Debug, Clone)]
pub struct SelectionCriteria {
    /// The absolute, canonicalized scan root.
    pub root: PathBuf,
    /// Accepted extensions with a leading dot (`".py"`), in the order given.
    pub extensions: Vec<String>,
    /// Explicit exclusions: relative paths (prefix match) or globs.
    pub exclusions: Vec<String>,
    /// Whether zero-byte files qualify.
    pub include_empty: bool,
    /// Whether `.gitignore` files under the root are honored.
    pub use_gitignore: bool,
    /// The data directory when it lies under the root. It is never scanned.
    pub output_dir: Option<PathBuf>,
}

impl SelectionCriteria {
    /// Criteria for `root` with the default extension set and no exclusions.
    #[doc(hidden)]
    pub fn new_for_test(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: crate::constants::DEFAULT_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclusions: Vec::new(),
            include_empty: false,
            use_gitignore: true,
            output_dir: None,
        }
    }
}

/// Where a run's files go.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    /// Holds the latest artifact per (target, extension set).
    pub data_dir: PathBuf,
    /// Holds timestamped snapshots.
    pub history_dir: PathBuf,
    /// Holds converted notebook scripts.
    pub scratch_dir: PathBuf,
    /// File name of the artifact, e.g. `pkg_code_with_notebooks_no_empty_py_ipynb.txt`.
    pub file_name: String,
}

impl ArtifactPaths {
    /// Lays out the three directories under `data_dir`.
    pub fn under(data_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        let data_dir = data_dir.into();
        Self {
            history_dir: data_dir.join(crate::constants::HISTORY_DIR_NAME),
            scratch_dir: data_dir.join(crate::constants::SCRATCH_DIR_NAME),
            data_dir,
            file_name: file_name.into(),
        }
    }

    /// Path of the primary artifact.
    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// Path of the historical copy for a given run stamp: `<stem>_<stamp>.txt`.
    pub fn history_path(&self, stamp: &str) -> PathBuf {
        let stem = std::path::Path::new(&self.file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_name.clone());
        self.history_dir.join(format!("{}_{}.txt", stem, stamp))
    }
}

/// Which listing the project tree is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TreeSource {
    /// Files tracked in the enclosing git repository.
    #[default]
    Git,
    /// The files selected for this run.
    Selection,
}

/// Options for the project tree header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    /// The listing to draw.
    pub source: TreeSource,
    /// Maximum depth below the root; `None` draws everything.
    pub max_depth: Option<usize>,
}

/// Options for the external notebook converter.
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// Program to invoke (`jupyter` by default).
    pub program: String,
    /// How long a single conversion may take.
    pub timeout: Duration,
}

/// The configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// File selection settings.
    pub selection: SelectionCriteria,
    /// The project root, used to name the artifact.
    pub project_root: PathBuf,
    /// Output locations.
    pub paths: ArtifactPaths,
    /// Tree header settings; `None` disables the header.
    pub tree: Option<TreeOptions>,
    /// Notebook converter settings.
    pub converter: ConverterOptions,
    /// Whether to hand the artifact to the system clipboard.
    pub clipboard: bool,
    /// Timestamp suffix of the historical copy, captured once when the config is built.
    pub run_stamp: String,
}

impl Config {
    /// Path of the primary artifact.
    pub fn output_path(&self) -> PathBuf {
        self.paths.output_path()
    }

    /// Path of this run's historical copy.
    pub fn history_path(&self) -> PathBuf {
        self.paths.history_path(&self.run_stamp)
    }

    /// Creates a config rooted at `root` with everything under `root/data`.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut selection = SelectionCriteria::new_for_test(root.clone());
        selection.output_dir = Some(root.join("data"));
        Self {
            selection,
            project_root: root.clone(),
            paths: ArtifactPaths::under(root.join("data"), "test_code.txt"),
            tree: None,
            converter: ConverterOptions {
                program: crate::constants::DEFAULT_CONVERTER_PROGRAM.to_string(),
                timeout: Duration::from_secs(crate::constants::DEFAULT_CONVERTER_TIMEOUT_SECS),
            },
            clipboard: false,
            run_stamp: "2024-01-01_00-00-00".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_artifact_paths_layout() {
        let paths = ArtifactPaths::under("/work/data", "src_code_no_notebooks_no_empty_py.txt");
        assert_eq!(paths.history_dir, Path::new("/work/data/history"));
        assert_eq!(paths.scratch_dir, Path::new("/work/data/notebooks"));
        assert_eq!(
            paths.output_path(),
            Path::new("/work/data/src_code_no_notebooks_no_empty_py.txt")
        );
        assert_eq!(
            paths.history_path("2024-05-06_07-08-09"),
            Path::new("/work/data/history/src_code_no_notebooks_no_empty_py_2024-05-06_07-08-09.txt")
        );
    }
}
