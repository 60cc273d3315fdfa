// src/config/parsing.rs

/// Normalizes extensions to carry a leading dot, dropping blanks and duplicates.
///
/// Order is preserved because it shows up in the artifact's file name.
pub(super) fn normalize_extensions(exts: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(exts.len());
    for ext in exts {
        let ext = ext.trim();
        if ext.is_empty() {
            continue;
        }
        let ext = if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{}", ext)
        };
        if !normalized.contains(&ext) {
            normalized.push(ext);
        }
    }
    normalized
}

/// Trims exclusion entries and normalizes them to forward slashes without a
/// leading `./` or trailing `/`.
pub(super) fn normalize_exclusions(paths: Vec<String>) -> Vec<String> {
    paths
        .into_iter()
        .map(|p| {
            let p = p.trim().replace('\\', "/");
            let p = p.strip_prefix("./").unwrap_or(&p);
            p.trim_end_matches('/').to_string()
        })
        .filter(|p| !p.is_empty())
        .collect()
}
