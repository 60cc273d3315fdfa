//! Loads `.gitignore` rules and evaluates them against relative paths.
//!
//! Every ignore file found below the scan root contributes its rules, rewritten
//! so that they are relative to the root (see [`IgnoreRule::rooted_pattern`]).
//! All rules are compiled into a single [`PatternMatcher`] in which a later rule
//! overrides an earlier one, so a `!negation` re-includes what came before it.

use crate::errors::Error;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::{debug, warn};
use std::path::{Path, PathBuf};

mod loader;

pub use loader::{load_ignore_rules, parse_ignore_file};

/// One pattern from an ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRule {
    /// The pattern exactly as written (comments and blanks never become rules).
    pub pattern: String,
    /// The ignore file that declared it.
    pub source: PathBuf,
    /// The ignore file's directory relative to the scan root, POSIX form; empty for the root.
    pub base: String,
}

impl IgnoreRule {
    /// Creates a rule declared by the ignore file in directory `base`.
    pub fn new(pattern: impl Into<String>, source: impl Into<PathBuf>, base: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            source: source.into(),
            base: base.into().trim_matches('/').to_string(),
        }
    }

    /// The pattern rewritten to be relative to the scan root.
    ///
    /// Rules from the root ignore file are unchanged. For an ignore file in `sub/`,
    /// anchored patterns (a `/` anywhere but the end) become `sub/<pattern>`, and
    /// slash-free patterns, which match at any depth below their file, become
    /// `sub/**/<pattern>`. Negation and a trailing `/` are kept.
    ///
    /// ```
    /// use promptctx::ignore_rules::IgnoreRule;
    ///
    /// let rule = |p: &str| IgnoreRule::new(p, "pkg/.gitignore", "pkg").rooted_pattern();
    /// assert_eq!(rule("*.log"), "pkg/**/*.log");
    /// assert_eq!(rule("/build/"), "pkg/build/");
    /// assert_eq!(rule("!keep.py"), "!pkg/**/keep.py");
    /// assert_eq!(rule("docs/*.md"), "pkg/docs/*.md");
    /// ```
    pub fn rooted_pattern(&self) -> String {
        if self.base.is_empty() {
            return self.pattern.clone();
        }

        let (negation, body) = match self.pattern.strip_prefix('!') {
            Some(rest) => ("!", rest),
            None => ("", self.pattern.as_str()),
        };

        let anchored = body.trim_end_matches('/').contains('/');
        let body = body.strip_prefix('/').unwrap_or(body);
        if anchored {
            format!("{}{}/{}", negation, self.base, body)
        } else {
            format!("{}{}/**/{}", negation, self.base, body)
        }
    }
}

/// A compiled set of ignore rules.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    gitignore: Gitignore,
}

impl PatternMatcher {
    /// Compiles rules in order; later rules win. Malformed rules are skipped with a warning.
    pub fn compile(rules: &[IgnoreRule]) -> Self {
        let mut builder = GitignoreBuilder::new(".");
        for rule in rules {
            let rooted = rule.rooted_pattern();
            if let Err(e) = builder.add_line(Some(rule.source.clone()), &rooted) {
                let err = Error::Pattern {
                    pattern: rule.pattern.clone(),
                    reason: e.to_string(),
                };
                warn!("Skipping rule from '{}': {}", rule.source.display(), err);
            } else {
                debug!("Compiled ignore rule '{}' as '{}'", rule.pattern, rooted);
            }
        }

        let gitignore = builder.build().unwrap_or_else(|e| {
            warn!("Failed to compile ignore rules, ignoring none: {}", e);
            Gitignore::empty()
        });
        Self { gitignore }
    }

    /// Compiles patterns that are already relative to the scan root.
    pub fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Self {
        let rules: Vec<IgnoreRule> = patterns
            .iter()
            .map(|p| IgnoreRule::new(p.as_ref(), crate::constants::IGNORE_FILE_NAME, ""))
            .collect();
        Self::compile(&rules)
    }

    /// A matcher that ignores nothing.
    pub fn empty() -> Self {
        Self {
            gitignore: Gitignore::empty(),
        }
    }

    /// Number of rules that compiled.
    pub fn len(&self) -> usize {
        self.gitignore.num_ignores() as usize + self.gitignore.num_whitelists() as usize
    }

    /// Whether no rule compiled.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the file at `relative_path` is ignored.
    ///
    /// The path is matched in POSIX form. A file inside an ignored directory is
    /// ignored unless a rule matching the file itself says otherwise.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.is_ignored(relative_path, false)
    }

    /// Whether the directory at `relative_path` is ignored.
    pub fn matches_dir(&self, relative_path: &str) -> bool {
        self.is_ignored(relative_path, true)
    }

    fn is_ignored(&self, relative_path: &str, is_dir: bool) -> bool {
        let posix = relative_path.replace('\\', "/");
        let posix = posix.trim_start_matches("./").trim_start_matches('/');
        if posix.is_empty() {
            return false;
        }
        self.gitignore
            .matched_path_or_any_parents(Path::new(posix), is_dir)
            .is_ignore()
    }
}
