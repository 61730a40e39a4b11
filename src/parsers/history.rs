use std::path::Path;

use anyhow::Result;

use super::document::parse_history_document;
use super::encoding::{decode_document, decode_document_lossy};
use super::salvage::salvage_entries;
use super::sanitize::escape_bare_ampersands;
use crate::indexer::history_discovery::find_history_file;
use crate::models::{HistoryEntry, HistoryOutcome};
use crate::utils::read_file_bytes;

/// Load a client's credit history from `history_root/<LETTER>/<client_id>_*.xml`
///
/// Never fails. A missing folder or file yields [`HistoryOutcome::Missing`].
/// A file that fails strict parsing is recovered with [`recover_history_file`]
/// and then gets a final diagnostic entry naming the strict-parse failure, the
/// file, and a remediation hint. The failure is reported by its root cause, so
/// the entry carries the file name but never the full path.
pub fn load_credit_history(history_root: &Path, client_id: &str, full_name: &str) -> HistoryOutcome {
    let Some(file) = find_history_file(history_root, client_id, full_name) else {
        return HistoryOutcome::Missing;
    };

    match parse_history_file(&file.path) {
        Ok(entries) => HistoryOutcome::Extracted { file_name: file.file_name, entries },
        Err(e) => {
            tracing::warn!(
                file = %file.path.display(),
                error = %format!("{:#}", e),
                "History file failed strict parsing"
            );
            let reason = e.root_cause().to_string();

            let mut entries = recover_history_file(&file.path);
            entries.push(HistoryEntry::corrupted_file(&reason, &file.file_name));
            HistoryOutcome::Degraded { file_name: file.file_name, entries }
        }
    }
}

/// Read and strictly parse one history file
///
/// The content is decoded in the encoding named by its byte order mark or XML
/// declaration, UTF-8 by default.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or is not well-formed.
pub fn parse_history_file(path: &Path) -> Result<Vec<HistoryEntry>> {
    let bytes = read_file_bytes(path)?;
    let content = decode_document(&bytes)?;
    Ok(parse_history_document(&content)?)
}

/// Best-effort recovery of a history file that failed strict parsing
///
/// Decodes leniently, replacing byte sequences that are invalid in the
/// detected encoding, then escapes stray ampersands and parses again. If that
/// works the entries come back without any diagnostic. Otherwise whatever can
/// be salvaged is returned followed by one partial-parse diagnostic entry.
pub fn recover_history_file(path: &Path) -> Vec<HistoryEntry> {
    let bytes = match read_file_bytes(path) {
        Ok(bytes) => bytes,
        Err(e) => return vec![HistoryEntry::partial_parse_failure(&e.root_cause().to_string())],
    };
    let content = decode_document_lossy(&bytes);

    let sanitized = escape_bare_ampersands(&content);
    match parse_history_document(&sanitized) {
        Ok(entries) => {
            tracing::debug!(
                file = %path.display(),
                entries = entries.len(),
                "Recovered history file after sanitizing"
            );
            entries
        }
        Err(e) => {
            let mut entries = salvage_entries(&sanitized);
            tracing::debug!(
                file = %path.display(),
                salvaged = entries.len(),
                error = %e,
                "Sanitized history file still malformed"
            );
            entries.push(HistoryEntry::partial_parse_failure(&e.to_string()));
            entries
        }
    }
}
