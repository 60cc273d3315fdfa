// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These functions are used by the discovery stage to decide which files are
//! selected. Ignore rules live in [`crate::ignore_rules`]; everything else a file
//! must satisfy is here.

mod exclusion;
mod extension;
mod size;

pub use exclusion::{is_explicitly_excluded, ExclusionSet};
pub use extension::passes_extension_filter;
pub(crate) use extension::dotted_extension;
pub use size::passes_emptiness_filter;
