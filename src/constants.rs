// src/constants.rs

/// Target directory used when none is given on the command line.
pub const DEFAULT_TARGET_DIR: &str = "Python/";

/// Extensions accepted when none are given on the command line.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".md", ".ipynb", ".js", ".html", ".css", ".json", ".yaml",
];

/// Name of the per-directory ignore file.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Directory never descended into.
pub const VCS_DIR_NAME: &str = ".git";

/// Subdirectory of the data directory holding timestamped snapshots.
pub const HISTORY_DIR_NAME: &str = "history";

/// Subdirectory of the data directory holding converted notebook scripts.
pub const SCRATCH_DIR_NAME: &str = "notebooks";

/// Default data directory, relative to the project root.
pub const DEFAULT_DATA_DIR_NAME: &str = "data";

/// `strftime` format of the historical copy suffix.
pub const HISTORY_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Fence used around every block.
pub const FENCE: &str = "```";

/// Heading of the tree block.
pub const TREE_HEADER_TITLE: &str = "Project Structure:";

/// Written instead of a tree when no listing is obtainable.
pub const TREE_UNAVAILABLE: &str = "Project Structure: Unable to generate tree structure.\n\n";

/// Default program invoked for notebook conversion.
pub const DEFAULT_CONVERTER_PROGRAM: &str = "jupyter";

/// Default notebook conversion timeout, in seconds.
pub const DEFAULT_CONVERTER_TIMEOUT_SECS: u64 = 120;

/// JSON indentation used when canonicalizing `.json` files.
pub const JSON_INDENT: &[u8] = b"    ";
