//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use registry_explorer::{ClientDirectory, DataPaths};
use tempfile::TempDir;

/// Builder for creating test data directories (registry files plus history folders)
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory and history root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("history")).expect("Failed to create history dir");
        Self { temp_dir }
    }

    /// Create a builder without the history root
    pub fn without_history() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a registry file with the given raw content
    pub fn with_registry(self, file_name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(file_name), content)
            .expect("Failed to write registry file");
        self
    }

    /// Add a registry file built from rows of fields
    pub fn with_rows(self, file_name: &str, rows: &[&[&str]]) -> Self {
        let content = rows.iter().map(|row| row.join(";")).collect::<Vec<_>>().join("\n");
        self.with_registry(file_name, &content)
    }

    /// Add a history file under `history/<letter>/`
    pub fn with_history(self, letter: &str, file_name: &str, content: &str) -> Self {
        self.with_history_bytes(letter, file_name, content.as_bytes())
    }

    /// Add a history file with raw bytes (for encoding tests)
    pub fn with_history_bytes(self, letter: &str, file_name: &str, content: &[u8]) -> Self {
        let folder = self.history_folder(letter);
        fs::create_dir_all(&folder).expect("Failed to create letter folder");
        fs::write(folder.join(file_name), content).expect("Failed to write history file");
        self
    }

    pub fn history_folder(&self, letter: &str) -> PathBuf {
        self.temp_dir.path().join("history").join(letter)
    }

    /// Lookup facade over this directory
    pub fn directory(&self) -> ClientDirectory {
        ClientDirectory::new(DataPaths::from_data_dir(self.temp_dir.path()))
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Well-formed history document with one loan per amount
pub fn loans_document(amounts: &[u32]) -> String {
    let loans: String = amounts
        .iter()
        .map(|amount| format!("<loan><amount>{}</amount></loan>", amount))
        .collect();
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<history>{}</history>", loans)
}

/// Create a realistic data directory with several registry files and history states
///
/// - `clients_a.csv`: Latin and Cyrillic names, a short row, a leading digit
/// - `clients_b.csv`: more clients, including a duplicate ID
/// - Histories: one clean, one with a stray ampersand, one truncated
pub fn realistic_data_dir() -> DataDirBuilder {
    DataDirBuilder::new()
        .with_registry(
            "clients_a.csv",
            "001;Ivanov Ivan Ivanovich;1980-01-01\n\
             002;Petrov Petr Petrovich;1975-05-12\n\
             lonely-field\n\
             003;Иванова Анна Сергеевна;1990-03-08\n\
             004;1st Credit Partners;2001-09-09\n",
        )
        .with_registry(
            "clients_b.csv",
            "005;Sidorov Sidor;1969-12-31\n\
             006;Смирнов Олег;1985-07-21\n\
             001;Ivanov Duplicate;2000-01-01\n",
        )
        .with_history("I", "001_loans.xml", &loans_document(&[500, 1200]))
        .with_history("P", "002_loans.xml", "<history><bank>Smith & Sons</bank></history>")
        .with_history(
            "И",
            "003_credit.xml",
            "<history><loan><amount>300</amount></loan><loan><amount>9",
        )
}
