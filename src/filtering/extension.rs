// src/filtering/extension.rs

use std::path::Path;

/// Checks if a path's extension is one of the accepted `extensions`.
///
/// Extensions are compared including their leading dot, as produced by config
/// normalization. The comparison is case-sensitive, and a file without an
/// extension never passes.
///
/// # Examples
///
/// ```
/// use promptctx::filtering::passes_extension_filter;
/// use std::path::Path;
///
/// let accepted = vec![".py".to_string(), ".md".to_string()];
/// assert!(passes_extension_filter(Path::new("pkg/main.py"), &accepted));
/// assert!(!passes_extension_filter(Path::new("Cargo.toml"), &accepted));
/// assert!(!passes_extension_filter(Path::new("Makefile"), &accepted));
/// ```
pub fn passes_extension_filter(path: &Path, extensions: &[String]) -> bool {
    match dotted_extension(path) {
        Some(ext) => extensions.iter().any(|accepted| *accepted == ext),
        None => false,
    }
}

/// The final extension of `path` with its leading dot.
pub(crate) fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|os_str| os_str.to_str())
        .map(|ext| format!(".{}", ext))
}
