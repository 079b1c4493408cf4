//! Write extracted records to CSV.
//!
//! Output is UTF-8 with BOM for spreadsheet compatibility.

use std::io::Write;
use std::path::Path;

use crate::model::record::ExtractedRecord;

/// Fixed column order of the output dataset.
pub const COLUMNS: [&str; 7] = ["label", "subject", "from", "to", "date", "body", "path"];

/// Write all records to a CSV file at `output_path`.
pub fn write_csv(records: &[ExtractedRecord], output_path: &Path) -> anyhow::Result<()> {
    let mut file = std::fs::File::create(output_path)?;

    // UTF-8 BOM for Excel
    file.write_all(&[0xEF, 0xBB, 0xBF])?;

    writeln!(file, "{}", COLUMNS.join(","))?;

    for record in records {
        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            csv_escape(&record.label),
            csv_escape(&record.subject),
            csv_escape(&record.from),
            csv_escape(&record.to),
            csv_escape(&record.date),
            csv_escape(&record.body),
            csv_escape(&record.path),
        )?;
    }

    Ok(())
}

/// Escape a value for CSV (RFC 4180).
///
/// Wraps in double quotes if the value contains commas, quotes, or newlines.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
