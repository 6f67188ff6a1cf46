//! Semantic name validation.
//!
//! A semantic name:
//! - Must be non-empty
//! - Must consist only of lowercase ASCII letters and digits
//! - Must start with a letter

use crate::error::{Result, SemanticBranchError};

/// Every character that may appear in a semantic name.
pub const SEMANTIC_NAME_CHARSET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Returns `true` if `ch` is in [`SEMANTIC_NAME_CHARSET`].
pub fn is_semantic_name_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit()
}

/// Check whether `name` is a legal semantic name.
///
/// # Examples
///
/// ```
/// use semantic_branch::names::is_valid_semantic_name;
///
/// assert!(is_valid_semantic_name("feat"));
/// assert!(is_valid_semantic_name("build2"));
/// assert!(!is_valid_semantic_name("2build"));
/// assert!(!is_valid_semantic_name("feature-123"));
/// ```
pub fn is_valid_semantic_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars.all(is_semantic_name_char),
        _ => false,
    }
}

/// Return `name` unchanged if it is a legal semantic name.
///
/// Fails with [`SemanticBranchError::InvalidSemanticName`] carrying the
/// offending value otherwise.
pub fn ensure_valid_semantic_name(name: &str) -> Result<&str> {
    if is_valid_semantic_name(name) {
        Ok(name)
    } else {
        Err(SemanticBranchError::InvalidSemanticName {
            value: name.to_string(),
        })
    }
}
