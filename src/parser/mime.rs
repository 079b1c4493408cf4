//! Adapter from `mail-parser` messages to the crate's [`RawMessage`] model.
//!
//! Decoding is permissive throughout: transfer encodings and charsets are
//! resolved by `mail-parser`, and any payload left as raw bytes is recovered
//! with a UTF-8-then-WINDOWS-1252 fallback rather than failing.

use std::collections::BTreeMap;

use mail_parser::{Address, Message, MessageParser, MimeHeaders, PartType};

use crate::error::{CorpusError, Result};
use crate::model::message::{BodyPart, Leaf, RawMessage};

/// Parse raw message bytes under strict rules.
///
/// Fails with [`CorpusError::Parse`] when the bytes cannot be interpreted
/// as an email message at all.
pub fn parse(raw: &[u8]) -> Result<RawMessage> {
    let parser = MessageParser::default();
    let message = parser.parse(raw).ok_or_else(|| {
        CorpusError::Parse(format!("unparseable message ({} bytes)", raw.len()))
    })?;
    Ok(convert(&message))
}

/// Lenient re-parse: recover the original bytes as text (dropping or
/// remapping invalid sequences) and retry the parse once on the recovered
/// text's bytes.
pub fn parse_lenient(raw: &[u8]) -> Result<RawMessage> {
    let recovered = decode_text(raw);
    parse(recovered.as_bytes())
}

/// Decode bytes as text, best effort.
///
/// Valid UTF-8 passes through unchanged; anything else is decoded as
/// WINDOWS-1252, which maps every byte and therefore never fails.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Copy the parts of a borrowed `mail_parser::Message` into an owned
/// [`RawMessage`].
fn convert(message: &Message<'_>) -> RawMessage {
    let mut headers = BTreeMap::new();
    headers.insert(
        "subject".to_string(),
        message.subject().unwrap_or_default().trim().to_string(),
    );
    headers.insert("from".to_string(), render_address(message.from()));
    headers.insert("to".to_string(), render_address(message.to()));
    headers.insert(
        "date".to_string(),
        message
            .header_raw("Date")
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    );

    RawMessage::new(headers, convert_root(message))
}

/// Convert a message's part tree, starting from its root part.
fn convert_root(message: &Message<'_>) -> BodyPart {
    if message.parts.is_empty() {
        // Headers-only message: a valid, empty body.
        return BodyPart::Leaf(Leaf {
            content_type: "text/plain".to_string(),
            disposition: None,
            text: String::new(),
        });
    }
    convert_part(message, 0)
}

/// Recursively convert one message part (by index into `message.parts`).
fn convert_part(message: &Message<'_>, id: usize) -> BodyPart {
    let part = &message.parts[id];

    match &part.body {
        PartType::Multipart(children) => BodyPart::Container {
            parts: children
                .iter()
                .map(|&child| convert_part(message, child))
                .collect(),
        },
        // A nested message/rfc822 is a container holding the inner
        // message's own part tree.
        PartType::Message(inner) => BodyPart::Container {
            parts: vec![convert_root(inner)],
        },
        PartType::Text(text) => BodyPart::Leaf(Leaf {
            content_type: part_content_type(part, "text/plain"),
            disposition: part_disposition(part),
            text: text.to_string(),
        }),
        PartType::Html(text) => BodyPart::Leaf(Leaf {
            content_type: part_content_type(part, "text/html"),
            disposition: part_disposition(part),
            text: text.to_string(),
        }),
        PartType::Binary(bytes) | PartType::InlineBinary(bytes) => BodyPart::Leaf(Leaf {
            content_type: part_content_type(part, "application/octet-stream"),
            disposition: part_disposition(part),
            text: decode_text(bytes),
        }),
    }
}

/// Lowercased `type/subtype` of a part, or `fallback` when absent.
fn part_content_type<'a>(part: &impl MimeHeaders<'a>, fallback: &str) -> String {
    part.content_type()
        .map(|ct| {
            let main = ct.ctype();
            match ct.subtype() {
                Some(sub) => format!("{main}/{sub}").to_ascii_lowercase(),
                None => main.to_ascii_lowercase(),
            }
        })
        .unwrap_or_else(|| fallback.to_string())
}

/// Lowercased `Content-Disposition` type of a part, if present.
fn part_disposition<'a>(part: &impl MimeHeaders<'a>) -> Option<String> {
    part.content_disposition()
        .map(|d| d.ctype().to_ascii_lowercase())
}

/// Render an address header back to a display string: `Name <addr>`
/// entries joined with `, `.
fn render_address(addr: Option<&Address<'_>>) -> String {
    let Some(addr) = addr else {
        return String::new();
    };
    addr.iter()
        .filter_map(|a| match (a.name(), a.address()) {
            (Some(name), Some(email)) => Some(format!("{name} <{email}>")),
            (None, Some(email)) => Some(email.to_string()),
            (Some(name), None) => Some(name.to_string()),
            (None, None) => None,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_plain() {
        let raw = b"From: Alice <alice@example.com>\r\n\
                    To: bob@example.com\r\n\
                    Subject: Hello\r\n\
                    Date: Mon, 1 Apr 2002 12:00:00 -0500\r\n\
                    \r\n\
                    Hi Bob\r\n";
        let msg = parse(raw).unwrap();
        assert_eq!(msg.header("Subject"), "Hello");
        assert_eq!(msg.header("From"), "Alice <alice@example.com>");
        assert_eq!(msg.header("To"), "bob@example.com");
        assert_eq!(msg.header("Date"), "Mon, 1 Apr 2002 12:00:00 -0500");
        assert!(!msg.is_multipart());
        let leaves = msg.leaves();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].content_type, "text/plain");
        assert!(leaves[0].text.contains("Hi Bob"));
    }

    #[test]
    fn test_parse_multipart_alternative() {
        let raw = b"From: a@example.com\r\n\
                    Subject: Multi\r\n\
                    MIME-Version: 1.0\r\n\
                    Content-Type: multipart/alternative; boundary=\"b1\"\r\n\
                    \r\n\
                    --b1\r\n\
                    Content-Type: text/plain; charset=utf-8\r\n\
                    \r\n\
                    plain part\r\n\
                    --b1\r\n\
                    Content-Type: text/html; charset=utf-8\r\n\
                    \r\n\
                    <p>html part</p>\r\n\
                    --b1--\r\n";
        let msg = parse(raw).unwrap();
        assert!(msg.is_multipart());
        let leaves = msg.leaves();
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[0].content_type, "text/plain");
        assert_eq!(leaves[1].content_type, "text/html");
    }

    #[test]
    fn test_parse_part_attributes() {
        let raw = b"From: a@example.com\r\n\
                    Subject: Mixed\r\n\
                    MIME-Version: 1.0\r\n\
                    Content-Type: multipart/mixed; boundary=\"b2\"\r\n\
                    \r\n\
                    --b2\r\n\
                    Content-Type: TEXT/Plain; charset=utf-8\r\n\
                    \r\n\
                    the body\r\n\
                    --b2\r\n\
                    Content-Type: text/plain\r\n\
                    Content-Disposition: ATTACHMENT; filename=\"notes.txt\"\r\n\
                    \r\n\
                    attached notes\r\n\
                    --b2--\r\n";
        let msg = parse(raw).unwrap();
        let leaves = msg.leaves();
        assert_eq!(leaves.len(), 2);
        // Content type and disposition come out lowercased.
        assert_eq!(leaves[0].content_type, "text/plain");
        assert_eq!(leaves[0].disposition, None);
        assert_eq!(leaves[1].disposition.as_deref(), Some("attachment"));
        assert!(leaves[1].is_attachment());
    }

    #[test]
    fn test_parse_empty_input_fails() {
        assert!(parse(b"").is_err());
        assert!(parse_lenient(b"").is_err());
    }

    #[test]
    fn test_decode_text_invalid_utf8() {
        // 0xE9 alone is invalid UTF-8 but maps to 'é' in WINDOWS-1252.
        let decoded = decode_text(b"caf\xE9");
        assert_eq!(decoded, "caf\u{e9}");
    }

    #[test]
    fn test_parse_lenient_recovers_bad_bytes() {
        let raw = b"From: a@example.com\r\nSubject: caf\xE9\r\n\r\nBody\r\n";
        let msg = parse_lenient(raw).unwrap();
        assert!(msg.header("Subject").contains("caf"));
    }

    #[test]
    fn test_missing_headers_are_empty() {
        let raw = b"Content-Type: text/plain\r\n\r\nno headers of note\r\n";
        let msg = parse(raw).unwrap();
        assert_eq!(msg.header("Subject"), "");
        assert_eq!(msg.header("From"), "");
        assert_eq!(msg.header("Date"), "");
    }
}
