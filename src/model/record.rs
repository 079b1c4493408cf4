//! The per-message output record of the extraction pipeline.

use serde::Serialize;

/// One row of the output dataset.
///
/// `subject` and `body` are normalized (URLs and email addresses replaced
/// by `<URL>` / `<EMAIL>` tokens, whitespace collapsed); `from`, `to` and
/// `date` carry the header text verbatim. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedRecord {
    /// Caller-assigned corpus label ("spam" or "ham").
    pub label: String,

    /// Normalized subject line.
    pub subject: String,

    /// Verbatim `From:` header, empty when absent.
    pub from: String,

    /// Verbatim `To:` header, empty when absent.
    pub to: String,

    /// Verbatim `Date:` header, empty when absent.
    pub date: String,

    /// Normalized body text. May be empty for messages with no
    /// extractable text; that is still a valid record.
    pub body: String,

    /// Source file path.
    pub path: String,
}
