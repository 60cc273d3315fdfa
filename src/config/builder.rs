// src/config/builder.rs

use super::{
    parsing::{normalize_exclusions, normalize_extensions},
    path_resolve::{resolve_output_dir, resolve_target_dir},
    validation::validate_builder_options,
    ArtifactPaths, Config, ConverterOptions, SelectionCriteria, TreeOptions, TreeSource,
};
use crate::cli::Cli;
use crate::constants::{
    DEFAULT_CONVERTER_PROGRAM, DEFAULT_CONVERTER_TIMEOUT_SECS, DEFAULT_DATA_DIR_NAME,
    DEFAULT_EXTENSIONS, DEFAULT_TARGET_DIR, HISTORY_STAMP_FORMAT,
};
use crate::errors::{ConfigError, Result};
use crate::output::naming::artifact_file_name;
use log::debug;
use std::time::Duration;

/// A builder for creating a `Config` programmatically.
///
/// Unset options fall back to the CLI defaults. The project root defaults to the
/// current directory and the data directory to `<project root>/data`.
///
/// # Examples
///
/// ```
/// use promptctx::ConfigBuilder;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// let config = ConfigBuilder::new()
///     .target_directory(temp.path().to_str().unwrap())
///     .project_root(temp.path().to_str().unwrap())
///     .extensions(vec!["py".to_string()])
///     .clipboard(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.selection.extensions, vec![".py".to_string()]);
/// assert_eq!(config.paths.file_name, "all_project_code_no_notebooks_no_empty_py.txt");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) target_directory: Option<String>,
    pub(super) exclusions: Option<Vec<String>>,
    pub(super) extensions: Option<Vec<String>>,
    pub(super) include_empty: Option<bool>,
    pub(super) use_gitignore: Option<bool>,
    pub(super) tree: Option<bool>,
    pub(super) tree_depth: Option<usize>,
    pub(super) tree_source: Option<TreeSource>,
    pub(super) project_root: Option<String>,
    pub(super) data_dir: Option<String>,
    pub(super) clipboard: Option<bool>,
    pub(super) converter_program: Option<String>,
    pub(super) converter_timeout_secs: Option<u64>,
    pub(super) run_stamp: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new builder with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            target_directory: Some(cli.target_directory),
            exclusions: cli.exclude_paths,
            extensions: cli.file_types,
            include_empty: Some(cli.include_empty),
            use_gitignore: Some(!cli.no_gitignore),
            tree: Some(cli.tree),
            tree_depth: cli.tree_depth,
            tree_source: Some(cli.tree_source),
            project_root: cli.project_root,
            data_dir: cli.data_dir,
            clipboard: Some(!cli.no_clipboard),
            converter_program: Some(cli.converter),
            converter_timeout_secs: Some(cli.converter_timeout),
            run_stamp: None,
        }
    }

    /// Sets the directory to scan.
    pub fn target_directory(mut self, path: impl Into<String>) -> Self {
        self.target_directory = Some(path.into());
        self
    }

    /// Sets the explicit exclusions (relative paths or globs).
    pub fn exclusions(mut self, paths: Vec<String>) -> Self {
        self.exclusions = Some(paths);
        self
    }

    /// Sets the accepted extensions; a leading dot is optional.
    pub fn extensions(mut self, exts: Vec<String>) -> Self {
        self.extensions = Some(exts);
        self
    }

    /// Whether zero-byte files are selected.
    pub fn include_empty(mut self, include: bool) -> Self {
        self.include_empty = Some(include);
        self
    }

    /// Whether `.gitignore` files are honored.
    pub fn use_gitignore(mut self, use_gitignore: bool) -> Self {
        self.use_gitignore = Some(use_gitignore);
        self
    }

    /// Whether the tree header is written.
    pub fn tree(mut self, tree: bool) -> Self {
        self.tree = Some(tree);
        self
    }

    /// Maximum tree depth.
    pub fn tree_depth(mut self, depth: usize) -> Self {
        self.tree_depth = Some(depth);
        self
    }

    /// Listing used for the tree.
    pub fn tree_source(mut self, source: TreeSource) -> Self {
        self.tree_source = Some(source);
        self
    }

    /// Project root used for naming the artifact.
    pub fn project_root(mut self, path: impl Into<String>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Directory receiving the artifact, history and scratch files.
    pub fn data_dir(mut self, path: impl Into<String>) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    /// Whether the artifact is handed to the system clipboard.
    pub fn clipboard(mut self, clipboard: bool) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Program used for notebook conversion.
    pub fn converter_program(mut self, program: impl Into<String>) -> Self {
        self.converter_program = Some(program.into());
        self
    }

    /// Timeout of a single notebook conversion, in seconds.
    pub fn converter_timeout_secs(mut self, secs: u64) -> Self {
        self.converter_timeout_secs = Some(secs);
        self
    }

    /// Overrides the timestamp suffix of the historical copy.
    pub fn run_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.run_stamp = Some(stamp.into());
        self
    }

    /// Validates the options and builds the immutable `Config`.
    ///
    /// # Errors
    /// Returns an error if the target directory does not resolve to a directory,
    /// or if a value fails validation.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let target = self
            .target_directory
            .as_deref()
            .unwrap_or(DEFAULT_TARGET_DIR);
        let root = resolve_target_dir(target)?;

        let project_root = match self.project_root.as_deref() {
            Some(p) => resolve_target_dir(p)?,
            None => std::env::current_dir()
                .and_then(|d| d.canonicalize())
                .map_err(|source| ConfigError::UnresolvableTarget {
                    path: ".".to_string(),
                    source,
                })?,
        };

        let data_dir = match self.data_dir.as_deref() {
            Some(d) => resolve_output_dir(d)?,
            None => project_root.join(DEFAULT_DATA_DIR_NAME),
        };

        let extensions = normalize_extensions(self.extensions.unwrap_or_else(|| {
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        }));
        let include_empty = self.include_empty.unwrap_or(false);

        let file_name = artifact_file_name(&root, &project_root, &extensions, include_empty);
        let output_dir = data_dir.starts_with(&root).then(|| data_dir.clone());
        let paths = ArtifactPaths::under(data_dir, file_name);

        let tree = if self.tree.unwrap_or(false) {
            Some(TreeOptions {
                source: self.tree_source.unwrap_or_default(),
                max_depth: self.tree_depth,
            })
        } else {
            None
        };

        let run_stamp = self
            .run_stamp
            .unwrap_or_else(|| chrono::Local::now().format(HISTORY_STAMP_FORMAT).to_string());

        let config = Config {
            selection: SelectionCriteria {
                root,
                extensions,
                exclusions: normalize_exclusions(self.exclusions.unwrap_or_default()),
                include_empty,
                use_gitignore: self.use_gitignore.unwrap_or(true),
                output_dir,
            },
            project_root,
            paths,
            tree,
            converter: ConverterOptions {
                program: self
                    .converter_program
                    .unwrap_or_else(|| DEFAULT_CONVERTER_PROGRAM.to_string()),
                timeout: Duration::from_secs(
                    self.converter_timeout_secs
                        .unwrap_or(DEFAULT_CONVERTER_TIMEOUT_SECS),
                ),
            },
            clipboard: self.clipboard.unwrap_or(true),
            run_stamp,
        };
        debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}

impl TryFrom<Cli> for Config {
    type Error = crate::errors::Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        ConfigBuilder::from_cli(cli).build()
    }
}
