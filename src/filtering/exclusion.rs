// src/filtering/exclusion.rs

use glob::Pattern;
use log::{debug, warn};
use std::path::Path;

const WILDCARDS: &[char] = &['*', '?', '['];

#[derive(Debug, Clone)]
enum Exclusion {
    /// A relative path; excludes itself and everything below it.
    Prefix(String),
    /// A glob matched against the whole relative path at any depth.
    Glob { source: String, pattern: Pattern },
}

/// Explicit exclusions compiled once per run.
///
/// Entries without a wildcard are relative paths compared component-wise, so
/// `tests` excludes `tests/unit/a.py` but not `tests_old/a.py`. Entries with a
/// wildcard are globs with `**/` prepended. An invalid glob is skipped with a
/// warning.
///
/// # Examples
///
/// ```
/// use promptctx::filtering::ExclusionSet;
///
/// let set = ExclusionSet::new(&["tests".to_string(), "*.generated.py".to_string()]);
/// assert!(set.is_excluded("tests/unit/test_x.py"));
/// assert!(!set.is_excluded("tests_old/a.py"));
/// assert!(set.is_excluded("pkg/models.generated.py"));
/// assert!(!set.is_excluded("pkg/models.py"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    entries: Vec<Exclusion>,
}

impl ExclusionSet {
    /// Compiles normalized exclusion strings.
    pub fn new(exclusions: &[String]) -> Self {
        let entries = exclusions
            .iter()
            .filter_map(|raw| {
                if raw.contains(WILDCARDS) {
                    let glob = format!("**/{}", raw.trim_start_matches('/'));
                    match Pattern::new(&glob) {
                        Ok(pattern) => {
                            debug!("Compiled exclusion glob: {}", glob);
                            Some(Exclusion::Glob {
                                source: raw.clone(),
                                pattern,
                            })
                        }
                        Err(e) => {
                            warn!("Invalid exclusion glob '{}': {}", raw, e);
                            None
                        }
                    }
                } else {
                    Some(Exclusion::Prefix(raw.trim_matches('/').to_string()))
                }
            })
            .collect();
        Self { entries }
    }

    /// Whether nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the POSIX relative path is excluded by any entry.
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.entries.iter().any(|entry| match entry {
            Exclusion::Prefix(prefix) => {
                let matched = Path::new(relative_path).starts_with(prefix);
                if matched {
                    debug!("Excluding {} (matched path {})", relative_path, prefix);
                }
                matched
            }
            Exclusion::Glob { source, pattern } => {
                let matched = pattern.matches(relative_path);
                if matched {
                    debug!("Excluding {} (matched pattern {})", relative_path, source);
                }
                matched
            }
        })
    }
}

/// Checks a single relative path against raw exclusion strings.
///
/// Compiles the exclusions on every call; discovery uses [`ExclusionSet`] instead.
pub fn is_explicitly_excluded(relative_path: &str, exclusions: &[String]) -> bool {
    ExclusionSet::new(exclusions).is_excluded(relative_path)
}
