//! The `promptctx` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `promptctx` library.
//!
//! # Example
//!
//! ```
//! use promptctx::prelude::*;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().to_str().unwrap();
//! let config = ConfigBuilder::new()
//!     .target_directory(root)
//!     .project_root(root)
//!     .build()?;
//! let files = select(&config)?;
//! assert!(files.is_empty());
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder, SelectionCriteria, TreeOptions, TreeSource};
pub use crate::core_types::{CandidateFile, RenderStatus, RenderedBlock, RunArtifact};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{
    is_explicitly_excluded, passes_emptiness_filter, passes_extension_filter, ExclusionSet,
};
pub use crate::ignore_rules::{load_ignore_rules, IgnoreRule, PatternMatcher};
pub use crate::output::tree::{FileLister, SelectionLister};
pub use crate::output::{ClipboardSink, NoClipboard, SystemClipboard};
pub use crate::rendering::{NbconvertConverter, NotebookConverter};
pub use crate::{render, run, select, tree_header, write_artifact};

#[cfg(feature = "git")]
pub use crate::output::tree::GitLister;
