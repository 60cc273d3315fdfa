//! Discovers the files of a run by walking the scan root and applying filters.
use crate::config::SelectionCriteria;
use crate::core_types::CandidateFile;
use crate::errors::{io_error_with_path, Result};
use crate::filtering::ExclusionSet;
use crate::ignore_rules::PatternMatcher;
use log::{debug, warn};

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Selects every file under the scan root that satisfies all selection filters.
///
/// A file is selected when its extension is accepted, `matcher` does not ignore it
/// (or any directory above it), no explicit exclusion matches it, and it is
/// non-empty unless `criteria.include_empty` is set. Unreadable entries are logged
/// and skipped.
///
/// # Returns
/// The selected files sorted by their POSIX relative path, so the same tree always
/// yields the same order.
///
/// # Errors
/// Returns `Error::Io` if the scan root itself cannot be read.
///
/// # Examples
///
/// ```
/// use promptctx::config::SelectionCriteria;
/// use promptctx::discovery::select_files;
/// use promptctx::ignore_rules::PatternMatcher;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("b.py"), "print('b')")?;
/// fs::write(temp.path().join("a.py"), "print('a')")?;
/// fs::write(temp.path().join("notes.txt"), "not selected")?;
///
/// let criteria = SelectionCriteria::new_for_test(temp.path());
/// let files = select_files(&criteria, &PatternMatcher::empty())?;
/// let names: Vec<String> = files.iter().map(|f| f.display_path()).collect();
/// assert_eq!(names, vec!["a.py", "b.py"]);
/// # Ok(())
/// # }
/// ```
pub fn select_files(
    criteria: &SelectionCriteria,
    matcher: &PatternMatcher,
) -> Result<Vec<CandidateFile>> {
    // Fail early with path context instead of a walker warning.
    std::fs::read_dir(&criteria.root).map_err(|e| io_error_with_path(e, &criteria.root))?;

    let exclusions = ExclusionSet::new(&criteria.exclusions);
    let mut files = Vec::new();

    for entry_result in build_walker(criteria, matcher) {
        match process_direntry(entry_result, criteria, matcher, &exclusions) {
            Ok(Some(file)) => files.push(file),
            Ok(None) => {}
            Err(e) => warn!("{}", e),
        }
    }

    files.sort_by_cached_key(|f| f.display_path());
    debug!("Selected {} files under {}", files.len(), criteria.root.display());
    Ok(files)
}
