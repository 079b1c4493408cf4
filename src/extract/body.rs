//! Body extractor: pick the best textual representation of a message.

use crate::extract::html;
use crate::model::message::{BodyPart, RawMessage};

/// Extract one body string from a parsed message.
///
/// Preference order for multipart messages:
/// 1. every non-attachment `text/plain` part, joined with a blank line;
/// 2. the first `text/html` part, run through the markup cleaner;
/// 3. the first leaf's decoded text, trimmed.
///
/// Single-part messages return their payload directly, cleaned first when
/// the content type is `text/html`.
///
/// Never fails: a message with no extractable text yields an empty string,
/// which is a valid body.
pub fn extract(msg: &RawMessage) -> String {
    match &msg.body {
        BodyPart::Container { .. } => {
            let leaves = msg.leaves();

            let plain: Vec<&str> = leaves
                .iter()
                .filter(|l| {
                    l.content_type == "text/plain" && !l.is_attachment() && !l.text.is_empty()
                })
                .map(|l| l.text.as_str())
                .collect();
            if !plain.is_empty() {
                return plain.join("\n\n").trim().to_string();
            }

            if let Some(part) = leaves.iter().find(|l| l.content_type == "text/html") {
                return html::clean(&part.text);
            }

            leaves
                .first()
                .map(|l| l.text.trim().to_string())
                .unwrap_or_default()
        }
        BodyPart::Leaf(leaf) => {
            if leaf.content_type == "text/html" {
                html::clean(&leaf.text)
            } else {
                leaf.text.trim().to_string()
            }
        }
    }
}
