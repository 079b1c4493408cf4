//! Text normalizer: replace volatile tokens (URLs, email addresses) with
//! stable placeholders and collapse whitespace.

use std::sync::LazyLock;

use regex::Regex;

use super::collapse_whitespace;

/// `scheme://…` runs (http/https, case-insensitive) and bare `www.` hosts.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://[^\s<>"']+|www\.[^\s<>"']+"#).expect("valid regex")
});

/// `local-part@host.tld` runs.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+").expect("valid regex")
});

/// Replace URLs with `<URL>`, email addresses with `<EMAIL>`, and collapse
/// whitespace. Empty input yields an empty string.
///
/// URLs are replaced before email addresses, so an address embedded in a
/// URL query string is consumed by the URL token and the placeholder count
/// stays deterministic.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = URL_RE.replace_all(text, " <URL> ");
    let text = EMAIL_RE.replace_all(&text, " <EMAIL> ");
    collapse_whitespace(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(
            normalize("see http://example.com/page?x=1 now"),
            "see <URL> now"
        );
        assert_eq!(normalize("HTTPS://EXAMPLE.COM"), "<URL>");
        assert_eq!(normalize("visit www.example.com today"), "visit <URL> today");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize("mail me at a@b.com please"), "mail me at <EMAIL> please");
        assert_eq!(normalize("first.last+tag@sub-domain.example.org"), "<EMAIL>");
    }

    #[test]
    fn test_normalize_url_consumes_embedded_email() {
        // The address in the query string is part of the URL run; only one
        // placeholder is produced.
        let out = normalize("http://example.com/unsub?user=a@b.com");
        assert_eq!(out, "<URL>");
        assert_eq!(out.matches("<EMAIL>").count(), 0);
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a\t\tb \n c  "), "a b c");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in [
            "plain text",
            "go to http://example.com and write a@b.com",
            "  spaced\nout  ",
            "",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_url_stops_at_quote() {
        assert_eq!(
            normalize("<a href=\"http://example.com\">"),
            "<a href=\" <URL> \">"
        );
    }
}
