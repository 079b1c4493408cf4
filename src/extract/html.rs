//! Markup cleaner: HTML text to a visually-equivalent plain-text string.
//!
//! A blunt tag-stripper, not an HTML parser. Malformed markup degrades to
//! best-effort stripped text; this never fails.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::collapse_whitespace;

/// `<script>…</script>` and `<style>…</style>` blocks, case-insensitive,
/// content spanning newlines.
static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>").expect("valid regex")
});

/// Any remaining tag delimited by `<` and `>`.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Numeric character references: `&#123;` and `&#x1F600;`.
static NUMERIC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(?:x([0-9a-fA-F]+)|([0-9]+));").expect("valid regex"));

/// Named character references: `&amp;`, `&copy;`, ….
static NAMED_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&([a-zA-Z][a-zA-Z0-9]*);").expect("valid regex"));

/// Strip HTML down to its visible text.
///
/// Order matters: script/style blocks first (their content must never leak
/// into the output), then remaining tags, then entity decoding, then
/// whitespace collapse. Each removed block or tag becomes a single space.
pub fn clean(html_text: &str) -> String {
    let text = SCRIPT_STYLE_RE.replace_all(html_text, " ");
    let text = TAG_RE.replace_all(&text, " ");
    let text = decode_entities(&text);
    collapse_whitespace(&text)
}

/// Decode numeric character references and the common named entities.
fn decode_entities(text: &str) -> String {
    let text = NUMERIC_ENTITY_RE.replace_all(text, |caps: &Captures| {
        let value = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (_, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            _ => None,
        };
        value
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });

    // Single pass, so `&amp;lt;` decodes to `&lt;` and not `<`.
    NAMED_ENTITY_RE
        .replace_all(&text, |caps: &Captures| {
            match named_entity(&caps[1]) {
                Some(ch) => ch.to_string(),
                // Unknown names stay literal.
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// The named entities seen in real mail bodies. Not the full HTML5 table.
fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        "hellip" => '\u{2026}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "laquo" => '\u{ab}',
        "raquo" => '\u{bb}',
        "bull" => '\u{2022}',
        "middot" => '\u{b7}',
        "deg" => '\u{b0}',
        "plusmn" => '\u{b1}',
        "times" => '\u{d7}',
        "divide" => '\u{f7}',
        "cent" => '\u{a2}',
        "pound" => '\u{a3}',
        "yen" => '\u{a5}',
        "euro" => '\u{20ac}',
        "sect" => '\u{a7}',
        "para" => '\u{b6}',
        "iexcl" => '\u{a1}',
        "iquest" => '\u{bf}',
        "aacute" => '\u{e1}',
        "agrave" => '\u{e0}',
        "auml" => '\u{e4}',
        "ccedil" => '\u{e7}',
        "eacute" => '\u{e9}',
        "egrave" => '\u{e8}',
        "iacute" => '\u{ed}',
        "ntilde" => '\u{f1}',
        "oacute" => '\u{f3}',
        "ouml" => '\u{f6}',
        "uacute" => '\u{fa}',
        "uuml" => '\u{fc}',
        "szlig" => '\u{df}',
        _ => return None,
    })
}
