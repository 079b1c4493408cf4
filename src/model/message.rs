//! In-memory representation of one parsed email message.
//!
//! A [`RawMessage`] is built from one file's bytes, consumed by a single
//! record-builder invocation, and discarded. It is never persisted or
//! shared across files.

use std::collections::BTreeMap;

/// One body part of a message.
///
/// The part tree is an explicit tagged variant: either a leaf carrying
/// decoded text, or a container of further parts (multipart/*, nested
/// message/rfc822).
#[derive(Debug, Clone)]
pub enum BodyPart {
    Leaf(Leaf),
    Container { parts: Vec<BodyPart> },
}

/// A leaf part: decoded payload plus the MIME attributes the extractor
/// dispatches on.
#[derive(Debug, Clone)]
pub struct Leaf {
    /// Lowercased MIME type, e.g. `"text/plain"` or `"text/html"`.
    pub content_type: String,

    /// Lowercased `Content-Disposition` type (`"attachment"`, `"inline"`),
    /// or `None` when the header is absent.
    pub disposition: Option<String>,

    /// Transfer-decoded, charset-decoded payload text.
    ///
    /// Decoding is permissive: a payload that cannot be decoded yields an
    /// empty string here, never an error.
    pub text: String,
}

impl Leaf {
    /// Whether this part is marked as an attachment.
    pub fn is_attachment(&self) -> bool {
        self.disposition.as_deref() == Some("attachment")
    }
}

/// A parsed email message: selected headers plus the body part tree.
#[derive(Debug, Clone)]
pub struct RawMessage {
    /// Header values keyed by lowercased header name.
    /// Repeated headers collapse to the first occurrence.
    headers: BTreeMap<String, String>,

    /// Root of the body part tree.
    pub body: BodyPart,
}

impl RawMessage {
    pub fn new(headers: BTreeMap<String, String>, body: BodyPart) -> Self {
        Self { headers, body }
    }

    /// Look up a header by name (case-insensitive).
    /// A missing header is an empty string, never an error.
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether the message body is a part tree rather than a flat payload.
    pub fn is_multipart(&self) -> bool {
        matches!(self.body, BodyPart::Container { .. })
    }

    /// All leaf parts in document order (depth-first walk).
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        collect_leaves(&self.body, &mut out);
        out
    }
}

fn collect_leaves<'a>(part: &'a BodyPart, out: &mut Vec<&'a Leaf>) {
    match part {
        BodyPart::Leaf(leaf) => out.push(leaf),
        BodyPart::Container { parts } => {
            for p in parts {
                collect_leaves(p, out);
            }
        }
    }
}
