//! Bounded console preview of the loaded dataset.

use crate::model::record::ExtractedRecord;

/// Print a human-readable sample of at most `limit` records.
pub fn print_preview(records: &[ExtractedRecord], limit: usize) {
    let shown = records.len().min(limit);
    if shown == 0 {
        return;
    }

    println!();
    println!(
        "  {:<6} {:<30} {:<28} {:<50}",
        "Label", "Subject", "From", "Body"
    );
    println!("  {}", "-".repeat(116));

    for record in &records[..shown] {
        println!(
            "  {:<6} {:<30} {:<28} {:<50}",
            record.label,
            truncate(&record.subject, 29),
            truncate(&record.from, 27),
            truncate(&record.body, 49),
        );
    }
    println!();
}

/// Truncate to at most `max` characters, appending `…` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}\u{2026}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("abcdefgh", 5), "abcd\u{2026}");
    }
}
