//! `promptctx` is a library and command-line tool for packing a project directory
//! into one pasteable text file of fenced source blocks.
//!
//! A run is a three-stage pipeline:
//! 1.  **Select**: walk the target directory and keep files with an accepted
//!     extension that no `.gitignore` rule or explicit exclusion removes.
//! 2.  **Render**: read each file into a fenced block. JSON is pretty-printed and
//!     notebooks are converted to scripts by an external converter.
//! 3.  **Write**: concatenate the blocks (optionally behind a project tree), write
//!     the artifact and a timestamped historical copy, and copy it to the clipboard.
//!
//! Each stage is exposed on its own, and the collaborators that reach outside the
//! process ([`NotebookConverter`], [`FileLister`](output::tree::FileLister) and
//! [`ClipboardSink`]) are traits so they can be replaced.
//!
//! # Example: Library Usage
//!
//! ```
//! use promptctx::output::NoClipboard;
//! use promptctx::rendering::NbconvertConverter;
//! use promptctx::{run, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a project with an ignore file.
//! let temp_dir = tempdir().unwrap();
//! let root = temp_dir.path();
//! fs::write(root.join(".gitignore"), "b.py\n").unwrap();
//! fs::write(root.join("a.py"), "print('a')\n").unwrap();
//! fs::write(root.join("b.py"), "print('b')\n").unwrap();
//!
//! // 2. Build a config. The artifact lands in `<root>/data`.
//! let config = ConfigBuilder::new()
//!     .target_directory(root.to_str().unwrap())
//!     .project_root(root.to_str().unwrap())
//!     .extensions(vec!["py".to_string()])
//!     .clipboard(false)
//!     .build()
//!     .unwrap();
//!
//! // 3. Run the pipeline.
//! let converter = NbconvertConverter::from_options(&config.converter);
//! let artifact = run(&config, &converter, &NoClipboard).unwrap();
//!
//! assert_eq!(artifact.text, "a.py\n```py\nprint('a')\n```\n\n");
//! assert!(artifact.output_path.exists());
//! assert!(artifact.history_path.exists());
//! assert!(!artifact.clipboard_copied);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod ignore_rules;
pub mod output;
pub mod prelude;
pub mod rendering;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::{CandidateFile, RenderStatus, RenderedBlock, RunArtifact};
pub use output::ClipboardSink;
pub use rendering::NotebookConverter;

use crate::config::SelectionCriteria;
use crate::errors::Result;
use crate::ignore_rules::{load_ignore_rules, PatternMatcher};
use log::{info, warn};
use tracing::instrument;

/// Builds the ignore matcher for `criteria`.
///
/// Loads every `.gitignore` below the scan root, or returns an empty matcher when
/// ignore files are disabled.
pub fn ignore_matcher(criteria: &SelectionCriteria) -> PatternMatcher {
    if !criteria.use_gitignore {
        return PatternMatcher::empty();
    }
    PatternMatcher::compile(&load_ignore_rules(&criteria.root))
}

/// Selects the files of a run.
///
/// This is the first stage of the pipeline. The returned files are sorted by
/// relative path and have not been read yet.
///
/// # Errors
/// Returns an error if the scan root cannot be read. Problems with individual
/// entries are logged and skipped.
#[instrument(level = "info", skip_all, fields(root = %config.selection.root.display()))]
pub fn select(config: &Config) -> Result<Vec<CandidateFile>> {
    let matcher = ignore_matcher(&config.selection);
    let files = discovery::select_files(&config.selection, &matcher)?;
    info!("Selected {} files", files.len());
    Ok(files)
}

/// Renders the selected files into blocks.
///
/// This is the second stage of the pipeline. Files that cannot be read are logged
/// and left out; notebooks that fail to convert keep a block with a failure marker.
pub fn render(
    files: &[CandidateFile],
    config: &Config,
    converter: &dyn NotebookConverter,
) -> Vec<RenderedBlock> {
    rendering::render_all(files, config, converter)
}

/// Builds the tree header for this run, if the config asks for one.
pub fn tree_header(config: &Config, selected: &[CandidateFile]) -> Option<String> {
    let options = config.tree.as_ref()?;
    let lister = output::tree::lister_for(options.source, selected);
    Some(output::tree::build_tree_header(
        options,
        &config.selection.root,
        lister.as_ref(),
    ))
}

pub use output::write_artifact;

/// Executes the complete pipeline: select, render, and write.
///
/// # Returns
/// The [`RunArtifact`] describing what was written. An empty selection still
/// produces an artifact (containing at most the tree header).
///
/// # Errors
/// Returns an error if the scan root cannot be read or if the artifact or its
/// historical copy cannot be written.
#[instrument(level = "debug", skip_all)]
pub fn run(
    config: &Config,
    converter: &dyn NotebookConverter,
    clipboard: &dyn ClipboardSink,
) -> Result<RunArtifact> {
    let files = select(config)?;
    if files.is_empty() {
        warn!("No files matched the selection criteria");
    }

    let header = tree_header(config, &files);
    let blocks = render(&files, config, converter);
    let artifact = write_artifact(&blocks, config, header.as_deref(), clipboard)?;

    info!(
        "Run complete: {} blocks, output {}, history {}",
        blocks.len(),
        artifact.output_path.display(),
        artifact.history_path.display()
    );
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TreeOptions, TreeSource};
    use crate::errors::{ClipboardError, Error};
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    struct StubConverter(&'static str);

    impl NotebookConverter for StubConverter {
        fn convert(&self, _notebook: &Path, _scratch_dir: &Path) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    /// Leaves `<scratch>/<stem>.py` behind like nbconvert does.
    struct ScratchWritingConverter;

    impl NotebookConverter for ScratchWritingConverter {
        fn convert(&self, notebook: &Path, scratch_dir: &Path) -> Result<String> {
            let script = "print('nb')\n";
            let stem = notebook.file_stem().unwrap_or_default().to_string_lossy();
            fs::create_dir_all(scratch_dir).map_err(|e| crate::errors::io_error_with_path(e, scratch_dir))?;
            let path = scratch_dir.join(format!("{}.py", stem));
            fs::write(&path, script).map_err(|e| crate::errors::io_error_with_path(e, &path))?;
            Ok(script.to_string())
        }
    }

    struct BrokenConverter;

    impl NotebookConverter for BrokenConverter {
        fn convert(&self, notebook: &Path, _scratch_dir: &Path) -> Result<String> {
            Err(Error::Converter {
                path: notebook.display().to_string(),
                reason: "jupyter not found".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct RecordingClipboard(RefCell<Vec<String>>);

    impl ClipboardSink for RecordingClipboard {
        fn copy(&self, text: &str) -> std::result::Result<(), ClipboardError> {
            self.0.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_run_basic_success() -> anyhow::Result<()> {
        // 1. Setup
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::write(root.join("b.md"), "# B\n")?;
        fs::write(root.join("a.py"), "x = 1")?;
        fs::write(root.join("c.json"), r#"{"k":[1]}"#)?;
        let config = Config::new_for_test(root);
        let clipboard = RecordingClipboard::default();

        // 2. Execute
        let artifact = run(&config, &StubConverter(""), &clipboard)?;

        // 3. Assert
        let expected = "a.py\n```py\nx = 1\n```\n\n\
                        b.md\n```markdown\n# B\n```\n\n\
                        c.json\n```plaintext\n{\n    \"k\": [\n        1\n    ]\n}\n```\n\n";
        assert_eq!(artifact.text, expected);
        assert_eq!(fs::read_to_string(config.output_path())?, expected);
        assert_eq!(fs::read_to_string(config.history_path())?, expected);
        assert_eq!(clipboard.0.borrow().as_slice(), &[expected.to_string()]);
        assert!(artifact.clipboard_copied);
        Ok(())
    }

    #[test]
    fn test_run_ignores_its_own_data_dir_when_gitignored() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::write(root.join(".gitignore"), "data/\n")?;
        fs::write(root.join("a.py"), "a\n")?;
        let config = Config::new_for_test(root);

        run(&config, &StubConverter(""), &RecordingClipboard::default())?;
        // A second run must not pick up the first run's artifact or history.
        let artifact = run(&config, &StubConverter(""), &RecordingClipboard::default())?;

        assert_eq!(artifact.text, "a.py\n```py\na\n```\n\n");
        Ok(())
    }

    #[test]
    fn test_rerun_does_not_pick_up_converted_notebooks() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::write(root.join("nb.ipynb"), "{}")?;
        let config = Config::new_for_test(root);

        let first = run(&config, &ScratchWritingConverter, &RecordingClipboard::default())?;
        assert!(config.paths.scratch_dir.join("nb.py").exists());
        let second = run(&config, &ScratchWritingConverter, &RecordingClipboard::default())?;

        assert_eq!(first.text, "nb.ipynb\n```ipynb\nprint('nb')\n```\n\n");
        assert_eq!(second.text, first.text);
        Ok(())
    }

    #[test]
    fn test_run_marks_failed_notebook_and_continues() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::write(root.join("nb.ipynb"), "{}")?;
        fs::write(root.join("z.py"), "z\n")?;
        let config = Config::new_for_test(root);

        let artifact = run(&config, &BrokenConverter, &RecordingClipboard::default())?;

        assert!(artifact.text.starts_with("nb.ipynb\n```ipynb\n[notebook conversion failed: "));
        assert!(artifact.text.contains("jupyter not found"));
        assert!(artifact.text.ends_with("z.py\n```py\nz\n```\n\n"));
        Ok(())
    }

    #[test]
    fn test_run_with_converted_notebook() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::write(root.join("nb.ipynb"), "{}")?;
        let config = Config::new_for_test(root);

        let artifact = run(&config, &StubConverter("print(1)\n"), &RecordingClipboard::default())?;

        assert_eq!(artifact.text, "nb.ipynb\n```ipynb\nprint(1)\n```\n\n");
        Ok(())
    }

    #[test]
    fn test_run_with_selection_tree() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("pkg"))?;
        fs::write(root.join("pkg/a.py"), "a\n")?;
        let mut config = Config::new_for_test(root);
        config.tree = Some(TreeOptions {
            source: TreeSource::Selection,
            max_depth: None,
        });

        let artifact = run(&config, &StubConverter(""), &RecordingClipboard::default())?;

        assert!(artifact.text.starts_with(
            "Project Structure:\n```\n.\n└── pkg\n    └── a.py\n\n1 directory, 1 file\n```\n\n"
        ));
        assert!(artifact.text.ends_with("pkg/a.py\n```py\na\n```\n\n"));
        Ok(())
    }

    #[test]
    fn test_run_without_gitignore_includes_ignored_files() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::write(root.join(".gitignore"), "b.py\n")?;
        fs::write(root.join("b.py"), "b\n")?;
        let mut config = Config::new_for_test(root);

        assert!(select(&config)?.is_empty());
        config.selection.use_gitignore = false;
        let files = select(&config)?;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].display_path(), "b.py");
        Ok(())
    }

    #[test]
    fn test_run_with_empty_selection_still_writes() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let config = Config::new_for_test(temp_dir.path());

        let artifact = run(&config, &StubConverter(""), &RecordingClipboard::default())?;

        assert_eq!(artifact.text, "");
        assert!(config.output_path().exists());
        assert!(config.history_path().exists());
        Ok(())
    }
}
