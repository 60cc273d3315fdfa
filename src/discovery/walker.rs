// src/discovery/walker.rs

use crate::config::SelectionCriteria;
use crate::constants::VCS_DIR_NAME;
use crate::core_types::posix_path;
use crate::ignore_rules::PatternMatcher;
use log::debug;
use walkdir::{DirEntry, WalkDir};

/// Builds the recursive walk over the scan root.
///
/// The `.git` directory and the run's own data directory are never entered, and
/// directories the matcher ignores are pruned, so nothing below them is visited. Entries come back in file-name
/// order within each directory.
pub(super) fn build_walker<'a>(
    criteria: &'a SelectionCriteria,
    matcher: &'a PatternMatcher,
) -> impl Iterator<Item = walkdir::Result<DirEntry>> + 'a {
    debug!(
        "Configuring walk of {} ({} ignore rules)",
        criteria.root.display(),
        matcher.len()
    );
    WalkDir::new(&criteria.root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| keep_entry(entry, criteria, matcher))
}

fn keep_entry(entry: &DirEntry, criteria: &SelectionCriteria, matcher: &PatternMatcher) -> bool {
    if !entry.file_type().is_dir() || entry.depth() == 0 {
        return true;
    }
    if entry.file_name() == VCS_DIR_NAME {
        debug!("Skipping VCS directory: {}", entry.path().display());
        return false;
    }
    if criteria.output_dir.as_deref() == Some(entry.path()) {
        debug!("Skipping data directory: {}", entry.path().display());
        return false;
    }
    let Ok(relative) = entry.path().strip_prefix(&criteria.root) else {
        return true;
    };
    let relative = posix_path(relative);
    if matcher.matches_dir(&relative) {
        debug!("Pruning ignored directory: {}", relative);
        return false;
    }
    true
}
