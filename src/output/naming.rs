// src/output/naming.rs

use crate::core_types::posix_path;
use std::path::Path;

/// Derives the artifact file name from the target and the selection settings.
///
/// The base is `all_project_code` when the target is the project root,
/// `<relative path with / replaced by _>_code` when it lies below it, and
/// `<directory name>_code` otherwise. Notebook inclusion, the empty-file policy and
/// the extensions (without dots) follow as suffixes.
///
/// # Examples
///
/// ```
/// use promptctx::output::naming::artifact_file_name;
/// use std::path::Path;
///
/// let exts = vec![".py".to_string(), ".ipynb".to_string()];
/// assert_eq!(
///     artifact_file_name(Path::new("/work/src/pkg"), Path::new("/work"), &exts, false),
///     "src_pkg_code_with_notebooks_no_empty_py_ipynb.txt"
/// );
/// assert_eq!(
///     artifact_file_name(Path::new("/elsewhere/tool"), Path::new("/work"), &exts[..1], true),
///     "tool_code_no_notebooks_with_empty_py.txt"
/// );
/// ```
pub fn artifact_file_name(
    target: &Path,
    project_root: &Path,
    extensions: &[String],
    include_empty: bool,
) -> String {
    let base = match target.strip_prefix(project_root) {
        Ok(rel) if rel.as_os_str().is_empty() => "all_project".to_string(),
        Ok(rel) => posix_path(rel).replace('/', "_"),
        Err(_) => target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "root".to_string()),
    };

    let notebooks = if extensions.iter().any(|e| e == ".ipynb") {
        "with_notebooks"
    } else {
        "no_notebooks"
    };
    let empty = if include_empty { "with_empty" } else { "no_empty" };
    let exts: Vec<&str> = extensions.iter().map(|e| e.trim_start_matches('.')).collect();

    format!("{}_code_{}_{}_{}.txt", base, notebooks, empty, exts.join("_"))
}
