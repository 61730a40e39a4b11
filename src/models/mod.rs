//! Data models for the client registry and credit histories.
//!
//! - [`ClientRecord`] - One row of the `;`-separated registry files
//! - [`ClientListing`] - A filtered, paginated page of clients
//! - [`HistoryEntry`] - Direct children of one XML element, or a diagnostic
//! - [`HistoryOutcome`] - Typed result of a history lookup

pub mod client;
pub mod history;

pub use client::{ClientListing, ClientRecord};
pub use history::{
    CORRUPTED_FILE_RECOMMENDATION, ERROR_KEY, HistoryEntry, HistoryOutcome, RECOMMENDATION_KEY,
};
