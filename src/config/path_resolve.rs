// src/config/path_resolve.rs

use crate::errors::ConfigError;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Other paths, and `~user` forms, are returned unchanged.
pub fn expand_tilde(path_str: &str) -> PathBuf {
    let rest = if path_str == "~" {
        Some("")
    } else {
        path_str
            .strip_prefix("~/")
            .or_else(|| path_str.strip_prefix("~\\"))
    };
    match (rest, BaseDirs::new()) {
        (Some(""), Some(dirs)) => dirs.home_dir().to_path_buf(),
        (Some(rest), Some(dirs)) => dirs.home_dir().join(rest),
        _ => PathBuf::from(path_str),
    }
}

/// Resolves the target directory string to an absolute, canonicalized directory.
pub(super) fn resolve_target_dir(path_str: &str) -> Result<PathBuf, ConfigError> {
    let resolved = expand_tilde(path_str)
        .canonicalize()
        .map_err(|source| ConfigError::UnresolvableTarget {
            path: path_str.to_string(),
            source,
        })?;
    if !resolved.is_dir() {
        return Err(ConfigError::NotADirectory(path_str.to_string()));
    }
    Ok(resolved)
}

/// Resolves a directory that may not exist yet to an absolute path.
///
/// Existing directories are canonicalized. A missing directory with an existing
/// parent is joined onto the canonical parent; others are joined onto the current
/// working directory.
pub(super) fn resolve_output_dir(path_str: &str) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path_str);
    if let Ok(canonical) = expanded.canonicalize() {
        return Ok(canonical);
    }
    if let (Some(parent), Some(name)) = (expanded.parent(), expanded.file_name()) {
        if let Ok(parent) = parent.canonicalize() {
            return Ok(parent.join(name));
        }
    }
    absolutize(&expanded).map_err(|source| ConfigError::UnresolvableTarget {
        path: path_str.to_string(),
        source,
    })
}

fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
