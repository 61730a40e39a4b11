//! Registry Explorer - Read-only lookup over a client registry and credit histories
//!
//! This library reads two datasets straight from disk on every call:
//!
//! - A client registry spread over `;`-separated `*.csv` files
//! - Per-client credit histories stored as XML files under `history/<LETTER>/`
//!
//! It supports:
//!
//! - Merging all registry files into one list of clients
//! - Letter navigation, name/ID search and pagination
//! - Fault-tolerant history parsing that recovers what it can from corrupted XML and
//!   reports the failure as diagnostic entries instead of an error
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use registry_explorer::{ClientDirectory, DataPaths};
//!
//! let clients = ClientDirectory::new(DataPaths::from_data_dir(Path::new("data")));
//! let listing = clients.list_clients(Some("ivan"), None, 1)?;
//! println!("{} matching clients", listing.total_items);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod filters;
pub mod indexer;
pub mod lookup;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use indexer::registry::load_all_clients;
pub use lookup::ClientDirectory;
pub use models::{ClientListing, ClientRecord, HistoryEntry, HistoryOutcome};
pub use parsers::history::{load_credit_history, recover_history_file};
pub use utils::environment::DataPaths;
