//! Filesystem discovery for the two datasets.
//!
//! - [`registry`] loads and merges every `*.csv` registry file of a directory
//! - [`history_discovery`] locates a client's history document under the letter folders

pub mod history_discovery;
pub mod registry;

pub use history_discovery::{HistoryFile, find_history_file, letter_folder};
pub use registry::{discover_registry_files, load_all_clients, parse_registry_file};
