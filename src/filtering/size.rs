// src/filtering/size.rs

/// Checks the file size against the empty-file policy.
#[inline]
pub fn passes_emptiness_filter(size: u64, include_empty: bool) -> bool {
    include_empty || size > 0
}
