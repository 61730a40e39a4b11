//! Record store for the client registry.
//!
//! # Error Handling Strategy
//!
//! - **Configuration errors**: A missing or unreadable registry directory fails the load
//! - **File-level errors**: Registry files are loaded fail-fast; an unreadable, oversized or
//!   non-UTF-8 file aborts the whole load with the file path in the error context
//! - **Row-level problems**: Rows with one field or fewer are skipped without being reported
//!   to the caller (they are only traced)
//!
//! Nothing is cached: every call re-reads every registry file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::models::ClientRecord;
use crate::utils::open_validated_file;

const REGISTRY_EXTENSION: &str = ".csv";
const FIELD_DELIMITER: u8 = b';';

/// Load and merge every `*.csv` registry file in `registry_dir`
///
/// Files are read in ascending file-name order and rows keep their order within a
/// file. Duplicate IDs across files are kept.
///
/// # Errors
///
/// Returns an error if:
/// - The directory is missing or cannot be listed
/// - Any registry file cannot be opened, exceeds the size limit or is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use registry_explorer::load_all_clients;
///
/// let clients = load_all_clients(Path::new("data"))?;
/// println!("Loaded {} clients", clients.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn load_all_clients(registry_dir: &Path) -> Result<Vec<ClientRecord>> {
    let files = discover_registry_files(registry_dir)?;
    let mut clients = Vec::new();

    for file in &files {
        let records = parse_registry_file(file)?;
        clients.extend(records);
    }

    tracing::debug!(
        clients = clients.len(),
        files = files.len(),
        dir = %registry_dir.display(),
        "Loaded client registry"
    );

    Ok(clients)
}

/// List the registry files of a directory, sorted by file name
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn discover_registry_files(registry_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(registry_dir).with_context(|| {
        format!("Failed to read registry directory: {}", registry_dir.display())
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_registry =
            path.file_name().is_some_and(|name| name.to_string_lossy().ends_with(REGISTRY_EXTENSION));
        if is_registry {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Parse one `;`-separated registry file
///
/// Quoted fields follow the usual double-quote rules. Rows are not trimmed; only the
/// resulting record's `id` and `full_name` are.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row cannot be decoded.
pub fn parse_registry_file(path: &Path) -> Result<Vec<ClientRecord>> {
    let file = open_validated_file(path)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    let mut skipped_count = 0;

    for (row_num, row) in reader.records().enumerate() {
        let row = row.with_context(|| {
            format!("Failed to read row {} of registry file: {}", row_num + 1, path.display())
        })?;

        let fields: Vec<String> = row.iter().map(str::to_string).collect();
        match ClientRecord::from_fields(fields) {
            Some(record) => records.push(record),
            None => skipped_count += 1,
        }
    }

    if skipped_count > 0 {
        tracing::trace!(skipped = skipped_count, file = %path.display(), "Skipped short registry rows");
    }

    Ok(records)
}
