use std::fs::File;
use std::io::Read;
use std::path::{Component, Path};

use anyhow::{Context, Result, anyhow, bail};

// Maximum size for registry and history files: 64MB
const MAX_FILE_SIZE_BYTES: u64 = 64 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits (64MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 64MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        let err = anyhow!("File too large ({} bytes, max {} bytes)", file_size, MAX_FILE_SIZE_BYTES);
        return Err(err.context(format!("Rejected file: {}", path.display())));
    }

    Ok(())
}

/// Opens a file and checks its size before anything reads from it
pub fn open_validated_file(path: &Path) -> Result<File> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    validate_file_size(&file, path)?;
    Ok(file)
}

/// Reads a whole file as raw bytes after the size check
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = open_validated_file(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(bytes)
}

/// Validates that a name derived from data can be used as exactly one path component
///
/// # Errors
///
/// Returns an error if the name is empty, contains a separator, or is `.` / `..`.
pub fn validate_folder_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => bail!("Not a single folder name: {:?}", name),
    }
}
