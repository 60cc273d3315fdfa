// src/discovery/entry_processor.rs

use crate::config::SelectionCriteria;
use crate::core_types::{posix_path, CandidateFile};
use crate::errors::{read_error_with_path, Error};
use crate::filtering::{passes_emptiness_filter, passes_extension_filter, ExclusionSet};
use crate::ignore_rules::PatternMatcher;
use log::{debug, trace, warn};
use std::fs;
use walkdir::DirEntry;

/// Processes a single directory entry from the walk.
///
/// Returns `Ok(Some(CandidateFile))` if the entry is a file that passes every filter,
/// `Ok(None)` if it is filtered out or is not a regular file, and `Err` when its
/// metadata cannot be read.
pub(super) fn process_direntry(
    entry_result: walkdir::Result<DirEntry>,
    criteria: &SelectionCriteria,
    matcher: &PatternMatcher,
    exclusions: &ExclusionSet,
) -> Result<Option<CandidateFile>, Error> {
    // --- 1. Handle Walker Errors ---
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(walk_error) => {
            warn!("Walker error: {}", walk_error);
            return Ok(None);
        }
    };
    if entry.file_type().is_dir() {
        return Ok(None);
    }

    let absolute_path = entry.path().to_path_buf();
    trace!("Processing entry: {}", absolute_path.display());

    // --- 2. Calculate Relative Path ---
    let relative_path = match absolute_path.strip_prefix(&criteria.root) {
        Ok(p) => p.to_path_buf(),
        Err(_) => {
            warn!(
                "Entry '{}' is outside the scan root, skipping",
                absolute_path.display()
            );
            return Ok(None);
        }
    };
    let display = posix_path(&relative_path);

    // --- 3. Filter by Extension ---
    if !passes_extension_filter(&relative_path, &criteria.extensions) {
        trace!("Skipping file with unaccepted extension: {}", display);
        return Ok(None);
    }

    // --- 4. Filter by Ignore Rules ---
    if matcher.matches(&display) {
        debug!("Skipping ignored file: {}", display);
        return Ok(None);
    }

    // --- 5. Filter by Explicit Exclusions ---
    if exclusions.is_excluded(&display) {
        return Ok(None);
    }

    // --- 6. Get Metadata (follows symlinks) ---
    let metadata = fs::metadata(&absolute_path).map_err(|e| read_error_with_path(e, &absolute_path))?;
    if !metadata.is_file() {
        trace!("Skipping non-file entry: {}", display);
        return Ok(None);
    }

    // --- 7. Filter by Emptiness ---
    if !passes_emptiness_filter(metadata.len(), criteria.include_empty) {
        debug!("Skipping empty file: {}", display);
        return Ok(None);
    }

    let extension = crate::filtering::dotted_extension(&relative_path).unwrap_or_default();
    trace!("Selected file: {}", display);
    Ok(Some(CandidateFile {
        relative_path,
        absolute_path,
        extension,
        size: metadata.len(),
    }))
}
