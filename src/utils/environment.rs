use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable pointing at the data directory
pub const DATA_DIR_ENV: &str = "REGISTRY_DATA_DIR";

/// Environment variable overriding the listing page size
pub const PAGE_SIZE_ENV: &str = "REGISTRY_PAGE_SIZE";

pub const DEFAULT_PAGE_SIZE: usize = 30;

const DEFAULT_DATA_DIR: &str = "data";
const HISTORY_DIR: &str = "history";

/// Locations of the two datasets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Directory holding the `*.csv` registry files
    pub registry_dir: PathBuf,
    /// Directory holding one sub-folder per leading letter of history files
    pub history_root: PathBuf,
}

impl DataPaths {
    /// Standard layout: registry files in `data_dir`, histories under `data_dir/history`
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self { registry_dir: data_dir.to_path_buf(), history_root: data_dir.join(HISTORY_DIR) }
    }
}

/// Get the data directory from `REGISTRY_DATA_DIR`, or `./data`
pub fn get_data_dir() -> Result<PathBuf> {
    match env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => {
            let cwd = env::current_dir().context("Failed to resolve current directory")?;
            Ok(cwd.join(DEFAULT_DATA_DIR))
        }
    }
}

/// Get the listing page size from `REGISTRY_PAGE_SIZE`, or the default of 30
pub fn get_page_size() -> Result<usize> {
    match env::var(PAGE_SIZE_ENV) {
        Ok(value) => parse_page_size(&value)
            .with_context(|| format!("{} must be a positive integer", PAGE_SIZE_ENV)),
        Err(_) => Ok(DEFAULT_PAGE_SIZE),
    }
}

fn parse_page_size(value: &str) -> Result<usize> {
    let size: usize = value.trim().parse().context("Failed to parse page size")?;
    anyhow::ensure!(size > 0, "Page size must be greater than zero");
    Ok(size)
}
