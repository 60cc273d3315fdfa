//! Turns selected files into fenced blocks.
//!
//! Plain files are embedded as UTF-8 text. JSON is pretty-printed, falling back
//! to the raw text when it does not parse. Notebooks are handed to a
//! [`NotebookConverter`]; when conversion fails the block carries an inline
//! failure marker instead of aborting the run.

use crate::config::Config;
use crate::core_types::{CandidateFile, RenderStatus, RenderedBlock};
use crate::errors::{read_error_with_path, Error, Result};
use log::{debug, warn};
use std::fs;
use std::io;
use tracing::instrument;

mod json;
mod language;
mod notebook;

pub use json::canonicalize_json;
pub use language::language_for_extension;
pub use notebook::{NbconvertConverter, NotebookConverter};

/// Renders one selected file.
///
/// # Errors
/// Returns `Error::FileRead` if the file cannot be read or is not valid UTF-8.
/// Notebook conversion failures are not errors; they produce a block with
/// [`RenderStatus::Failed`].
pub fn render(
    file: &CandidateFile,
    config: &Config,
    converter: &dyn NotebookConverter,
) -> Result<RenderedBlock> {
    let language = language_for_extension(&file.extension);

    let (content, status) = match file.extension.as_str() {
        ".ipynb" => match converter.convert(&file.absolute_path, &config.paths.scratch_dir) {
            Ok(script) => (script, RenderStatus::Rendered),
            Err(e) => {
                warn!("{}", e);
                let reason = match e {
                    Error::Converter { reason, .. } => reason,
                    other => other.to_string(),
                };
                (failure_marker(&reason), RenderStatus::Failed(reason))
            }
        },
        ".json" => {
            let raw = read_text(file)?;
            match canonicalize_json(&raw) {
                Ok(pretty) => (pretty, RenderStatus::Rendered),
                Err(e) => {
                    warn!(
                        "Embedding {} unformatted, invalid JSON: {}",
                        file.display_path(),
                        e
                    );
                    (raw, RenderStatus::RawFallback)
                }
            }
        }
        _ => (read_text(file)?, RenderStatus::Rendered),
    };

    debug!(
        "Rendered {} as {} ({:?})",
        file.display_path(),
        language,
        status
    );
    Ok(RenderedBlock {
        relative_path: file.relative_path.clone(),
        language,
        content,
        status,
    })
}

/// Renders every file in order, skipping files that cannot be read.
#[instrument(level = "debug", skip_all, fields(files = files.len()))]
pub fn render_all(
    files: &[CandidateFile],
    config: &Config,
    converter: &dyn NotebookConverter,
) -> Vec<RenderedBlock> {
    let blocks: Vec<RenderedBlock> = files
        .iter()
        .filter_map(|file| match render(file, config, converter) {
            Ok(block) => Some(block),
            Err(e) => {
                warn!("Skipping file: {}", e);
                None
            }
        })
        .collect();
    debug!("Rendered {} of {} files", blocks.len(), files.len());
    blocks
}

/// The inline text standing in for a notebook that could not be converted.
pub fn failure_marker(reason: &str) -> String {
    format!("[notebook conversion failed: {}]", reason)
}

fn read_text(file: &CandidateFile) -> Result<String> {
    let bytes = fs::read(&file.absolute_path).map_err(|e| read_error_with_path(e, &file.absolute_path))?;
    String::from_utf8(bytes).map_err(|e| {
        read_error_with_path(
            io::Error::new(io::ErrorKind::InvalidData, e),
            &file.absolute_path,
        )
    })
}
