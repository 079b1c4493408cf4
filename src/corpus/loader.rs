//! Labeled-folder enumeration and record aggregation.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::corpus::builder;
use crate::error::{CorpusError, Result};
use crate::model::record::ExtractedRecord;

/// Progress callback: `(files_done, files_total)` per labeled folder.
pub type Progress<'a> = &'a dyn Fn(u64, u64);

/// List the plain files of a corpus folder, sorted by name so that output
/// order is deterministic.
pub fn list_files(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(CorpusError::DirNotFound(folder.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(|e| CorpusError::io(folder, e))? {
        let entry = entry.map_err(|e| CorpusError::io(folder, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every parseable message in `folder`, labeling each record.
///
/// Unreadable or unparseable files are skipped silently (logged at debug);
/// only the aggregate count is reported.
pub fn load_folder(
    folder: &Path,
    label: &str,
    progress: Option<Progress<'_>>,
) -> Result<Vec<ExtractedRecord>> {
    let files = list_files(folder)?;
    let total = files.len() as u64;
    let mut records = Vec::with_capacity(files.len());

    for (done, path) in files.iter().enumerate() {
        let raw = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable file");
                continue;
            }
        };
        if let Some(record) = builder::build(path, &raw, label) {
            records.push(record);
        }
        if let Some(cb) = progress {
            cb(done as u64 + 1, total);
        }
    }

    info!(
        folder = %folder.display(),
        label,
        loaded = records.len(),
        files = files.len(),
        "Loaded folder"
    );
    Ok(records)
}

/// Load the full corpus: spam folder first, then ham.
///
/// Both directories are checked up front — a missing one aborts the run
/// before any record is produced.
pub fn load_corpus(
    spam_dir: &Path,
    ham_dir: &Path,
    progress: Option<Progress<'_>>,
) -> Result<Vec<ExtractedRecord>> {
    for dir in [spam_dir, ham_dir] {
        if !dir.is_dir() {
            return Err(CorpusError::DirNotFound(dir.to_path_buf()));
        }
    }

    let mut records = load_folder(spam_dir, "spam", progress)?;
    records.extend(load_folder(ham_dir, "ham", progress)?);
    Ok(records)
}
