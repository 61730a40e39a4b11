use std::fs;
use std::path::{Path, PathBuf};

use crate::filters::letters::leading_letter;
use crate::utils::validate_folder_name;

const HISTORY_EXTENSION: &str = ".xml";

/// A history document located for one client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// Folder under `history_root` that holds histories for names starting like `full_name`
///
/// The folder is named after the same leading letter used for navigation, the
/// full uppercase mapping of the first character of the trimmed name. Returns
/// `None` for empty names and for characters that cannot be a single folder
/// name (separators, dots).
pub fn letter_folder(history_root: &Path, full_name: &str) -> Option<PathBuf> {
    let folder_name = leading_letter(full_name)?;

    if let Err(e) = validate_folder_name(&folder_name) {
        tracing::warn!(
            client = full_name,
            error = %e,
            "Skipping history lookup for unsafe folder name"
        );
        return None;
    }

    Some(history_root.join(folder_name))
}

/// Find the first `<client_id>_*.xml` file in the client's letter folder
///
/// Candidates are considered in ascending file-name order. A missing or
/// unreadable folder means the client has no history; neither is an error.
pub fn find_history_file(history_root: &Path, client_id: &str, full_name: &str) -> Option<HistoryFile> {
    let folder = letter_folder(history_root, full_name)?;

    if !folder.is_dir() {
        return None;
    }

    let entries = match fs::read_dir(&folder) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(folder = %folder.display(), error = %e, "Failed to read history folder");
            return None;
        }
    };

    let prefix = format!("{}_", client_id);
    let mut candidates: Vec<String> = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(&prefix) && name.ends_with(HISTORY_EXTENSION))
        .collect();
    candidates.sort();

    let file_name = candidates.into_iter().next()?;
    Some(HistoryFile { path: folder.join(&file_name), file_name })
}
