//! The extraction core: body selection, markup stripping, and placeholder
//! normalization.

pub mod body;
pub mod html;
pub mod normalize;

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse every whitespace run (spaces, tabs, newlines) to a single
/// space and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}
