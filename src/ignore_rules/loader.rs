// src/ignore_rules/loader.rs

use super::IgnoreRule;
use crate::constants::{IGNORE_FILE_NAME, VCS_DIR_NAME};
use crate::core_types::posix_path;
use crate::errors::read_error_with_path;
use log::{debug, trace, warn};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;
use walkdir::WalkDir;

/// Finds every ignore file below `root` and returns their rules in precedence order.
///
/// Ignore files are ordered by depth and then by path, so rules from deeper files
/// come later and override shallower ones. The `.git` directory is never searched.
/// An unreadable ignore file is logged and skipped.
#[instrument(level = "debug", skip_all, fields(root = %root.display()))]
pub fn load_ignore_rules(root: &Path) -> Vec<IgnoreRule> {
    let mut ignore_files: Vec<(usize, String, PathBuf)> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != VCS_DIR_NAME)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry while looking for ignore files: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == IGNORE_FILE_NAME)
        .filter_map(|entry| {
            let dir = entry.path().parent()?.strip_prefix(root).ok()?;
            let base = posix_path(dir);
            Some((entry.depth(), base, entry.into_path()))
        })
        .collect();
    ignore_files.sort();

    let mut rules = Vec::new();
    for (_, base, path) in ignore_files {
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let parsed = parse_ignore_file(&contents, &path, &base);
                debug!("Loaded {} rules from {}", parsed.len(), path.display());
                rules.extend(parsed);
            }
            Err(e) => warn!("{}", read_error_with_path(e, &path)),
        }
    }
    rules
}

/// Parses the contents of one ignore file located in directory `base`.
///
/// Blank lines and `#` comments are skipped and trailing whitespace is dropped.
pub fn parse_ignore_file(contents: &str, source: &Path, base: &str) -> Vec<IgnoreRule> {
    contents
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .inspect(|line| trace!("Ignore rule '{}' from {}", line, source.display()))
        .map(|line| IgnoreRule::new(line, source, base))
        .collect()
}
