//! Record builder: one file's bytes in, one [`ExtractedRecord`] out.

use std::path::Path;

use tracing::debug;

use crate::extract::{body, normalize::normalize};
use crate::model::record::ExtractedRecord;
use crate::parser::mime;

/// Build the output record for one message file.
///
/// Parses strictly, retries once with byte-lenient recovery, and returns
/// `None` when both attempts fail — the caller skips the file, no error
/// propagates past this boundary.
pub fn build(path: &Path, raw: &[u8], label: &str) -> Option<ExtractedRecord> {
    let msg = match mime::parse(raw) {
        Ok(msg) => msg,
        Err(strict_err) => match mime::parse_lenient(raw) {
            Ok(msg) => msg,
            Err(_) => {
                debug!(
                    path = %path.display(),
                    error = %strict_err,
                    "Skipping unparseable message file"
                );
                return None;
            }
        },
    };

    let body = body::extract(&msg);

    Some(ExtractedRecord {
        label: label.to_string(),
        subject: normalize(msg.header("Subject")),
        from: msg.header("From").trim().to_string(),
        to: msg.header("To").trim().to_string(),
        date: msg.header("Date").trim().to_string(),
        body: normalize(&body),
        path: path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_normalizes_subject_and_body() {
        let raw = b"From: Spammer <spam@example.com>\r\n\
                    To: victim@example.com\r\n\
                    Subject: Visit http://win.example.com now\r\n\
                    Date: Mon, 1 Apr 2002 12:00:00 -0500\r\n\
                    \r\n\
                    Claim at http://win.example.com or mail prize@example.com\r\n";
        let record = build(Path::new("spam/0001.eml"), raw, "spam").unwrap();
        assert_eq!(record.label, "spam");
        assert_eq!(record.subject, "Visit <URL> now");
        assert_eq!(record.body, "Claim at <URL> or mail <EMAIL>");
        // from/to/date stay verbatim
        assert_eq!(record.from, "Spammer <spam@example.com>");
        assert_eq!(record.to, "victim@example.com");
        assert_eq!(record.date, "Mon, 1 Apr 2002 12:00:00 -0500");
        assert_eq!(record.path, "spam/0001.eml");
    }

    #[test]
    fn test_build_missing_headers_empty() {
        let raw = b"Content-Type: text/plain\r\n\r\njust a body\r\n";
        let record = build(Path::new("x.eml"), raw, "ham").unwrap();
        assert_eq!(record.subject, "");
        assert_eq!(record.from, "");
        assert_eq!(record.to, "");
        assert_eq!(record.date, "");
        assert_eq!(record.body, "just a body");
    }

    #[test]
    fn test_build_unparseable_returns_none() {
        assert!(build(Path::new("bad.eml"), b"", "spam").is_none());
    }

    #[test]
    fn test_build_empty_body_still_a_record() {
        let raw = b"Subject: empty\r\n\r\n";
        let record = build(Path::new("e.eml"), raw, "ham").unwrap();
        assert_eq!(record.subject, "empty");
        assert_eq!(record.body, "");
    }
}
