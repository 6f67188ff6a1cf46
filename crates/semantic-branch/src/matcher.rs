//! Matching branch names against stubs.
//!
//! A branch name is trimmed, lowercased, and cut at the first `-`, then at
//! the first `/`. What remains is the leading token, which must equal one of
//! the stubs exactly.

use std::collections::HashSet;

use tracing::trace;

use crate::error::Result;
use crate::names::ensure_valid_semantic_name;

/// Characters separating the leading token from the rest of a branch name,
/// in order of precedence.
pub const SEPARATORS: [char; 2] = ['-', '/'];

/// Whitespace stripped from both ends of a branch name: Unicode whitespace
/// plus the ASCII information separators U+001C..=U+001F.
fn is_branch_padding(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

fn trim_branch_name(branch_name: &str) -> &str {
    branch_name.trim_matches(is_branch_padding)
}

/// Extract the normalized leading token of a branch name.
///
/// # Examples
///
/// ```
/// use semantic_branch::leading_token;
///
/// assert_eq!(leading_token("  Feature/add-login "), "feature");
/// assert_eq!(leading_token("feat-v2/user/auth"), "feat");
/// assert_eq!(leading_token("main"), "main");
/// ```
pub fn leading_token(branch_name: &str) -> String {
    let mut token = trim_branch_name(branch_name).to_lowercase();
    for sep in SEPARATORS {
        if let Some(idx) = token.find(sep) {
            token.truncate(idx);
        }
    }
    token
}

/// Decide whether `branch_name` belongs to the category described by `stubs`.
///
/// Returns `Ok(false)` without inspecting the stubs when `stubs` is empty or
/// the branch name is blank. Otherwise every stub is validated first and the
/// first invalid one fails the call with
/// [`SemanticBranchError::InvalidSemanticName`](crate::SemanticBranchError::InvalidSemanticName).
///
/// # Examples
///
/// ```
/// use semantic_branch::is_certain_semantic_branch;
///
/// let stubs = ["feat", "feature"];
/// assert!(is_certain_semantic_branch("Feature-123", stubs).unwrap());
/// assert!(!is_certain_semantic_branch("features", stubs).unwrap());
/// assert!(is_certain_semantic_branch("feat", ["feat-123"]).is_err());
/// ```
pub fn is_certain_semantic_branch<I, S>(branch_name: &str, stubs: I) -> Result<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stubs: Vec<S> = stubs.into_iter().collect();
    if stubs.is_empty() || trim_branch_name(branch_name).is_empty() {
        return Ok(false);
    }

    let mut stub_set = HashSet::with_capacity(stubs.len());
    for stub in &stubs {
        stub_set.insert(ensure_valid_semantic_name(stub.as_ref())?);
    }

    let token = leading_token(branch_name);
    let matched = stub_set.contains(token.as_str());
    trace!(branch = branch_name, token = %token, matched, "matched branch against stubs");
    Ok(matched)
}
