use serde::{Deserialize, Serialize};

/// One row of the client registry
///
/// `id` and `full_name` are trimmed copies of the first two fields, while
/// `raw_fields` keeps the row exactly as it was read (untrimmed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub full_name: String,
    pub raw_fields: Vec<String>,
}

impl ClientRecord {
    /// Build a record from a registry row
    ///
    /// Returns `None` for rows with one field or fewer.
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        if fields.len() <= 1 {
            return None;
        }

        let id = fields[0].trim().to_string();
        let full_name = fields[1].trim().to_string();
        Some(Self { id, full_name, raw_fields: fields })
    }
}

/// One page of the client listing, as handed to presentation callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientListing {
    pub items: Vec<ClientRecord>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub available_letters: Vec<char>,
    pub selected_letter: Option<String>,
    pub query: Option<String>,
}
