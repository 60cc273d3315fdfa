// src/config/validation.rs

use super::ConfigBuilder;
use crate::errors::ConfigError;

/// Validates builder values that clap cannot express.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<(), ConfigError> {
    if let Some(exts) = &builder.extensions {
        if exts.iter().all(|e| e.trim().trim_start_matches('.').is_empty()) {
            return Err(ConfigError::InvalidValue {
                option: "--ext".to_string(),
                reason: "at least one extension is required".to_string(),
            });
        }
    }
    if builder.tree_depth == Some(0) {
        return Err(ConfigError::InvalidValue {
            option: "--tree-depth".to_string(),
            reason: "must be 1 or greater".to_string(),
        });
    }
    if builder.converter_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidValue {
            option: "--converter-timeout".to_string(),
            reason: "must be 1 or greater".to_string(),
        });
    }
    if let Some(program) = &builder.converter_program {
        if program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                option: "--converter".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
