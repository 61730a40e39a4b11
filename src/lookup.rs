//! Lookup facade used by presentation callers.
//!
//! [`ClientDirectory`] is a plain value holding the dataset locations. It keeps no
//! state between calls: every operation reloads the registry from disk.

use anyhow::{Result, bail};

use crate::filters::{distinct_leading_letters, filter_by_letter, paginate, search};
use crate::indexer::load_all_clients;
use crate::models::{ClientListing, ClientRecord, HistoryEntry, HistoryOutcome};
use crate::parsers::load_credit_history;
use crate::utils::{DEFAULT_PAGE_SIZE, DataPaths};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDirectory {
    paths: DataPaths,
    page_size: usize,
}

impl ClientDirectory {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths, page_size: DEFAULT_PAGE_SIZE }
    }

    /// Override the listing page size; zero is treated as one
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Load the whole registry
    ///
    /// # Errors
    ///
    /// Returns an error if the registry directory or one of its files cannot be read.
    pub fn load_clients(&self) -> Result<Vec<ClientRecord>> {
        load_all_clients(&self.paths.registry_dir)
    }

    /// One page of clients, optionally narrowed to a letter and then to a search query
    ///
    /// Available letters always come from the whole registry. An empty query or
    /// letter means no filtering.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be loaded.
    pub fn list_clients(
        &self,
        query: Option<&str>,
        letter: Option<&str>,
        page: usize,
    ) -> Result<ClientListing> {
        let clients = self.load_clients()?;
        let available_letters = distinct_leading_letters(&clients).into_iter().collect();

        let query = query.filter(|q| !q.is_empty());
        let letter = letter.filter(|l| !l.is_empty());

        let mut matches = filter_by_letter(clients, letter);
        if let Some(query) = query {
            matches = search(query, matches);
        }

        let (items, total_pages) = paginate(&matches, page, self.page_size);

        Ok(ClientListing {
            items: items.to_vec(),
            page,
            page_size: self.page_size,
            total_items: matches.len(),
            total_pages,
            available_letters,
            selected_letter: letter.map(str::to_string),
            query: query.map(str::to_string),
        })
    }

    /// First client whose ID equals `id`
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be loaded. An unknown ID is `Ok(None)`.
    pub fn find_client_by_id(&self, id: &str) -> Result<Option<ClientRecord>> {
        Ok(self.load_clients()?.into_iter().find(|client| client.id == id))
    }

    /// Alias of [`ClientDirectory::find_client_by_id`] matching the listing vocabulary
    pub fn get_client(&self, id: &str) -> Result<Option<ClientRecord>> {
        self.find_client_by_id(id)
    }

    /// Credit history of a known client
    ///
    /// # Errors
    ///
    /// Returns an error only when the history root itself is missing. Corrupted or
    /// absent history files are reported through the outcome.
    pub fn get_history_for(&self, client: &ClientRecord) -> Result<HistoryOutcome> {
        let history_root = &self.paths.history_root;
        if !history_root.is_dir() {
            bail!("History directory not found: {}", history_root.display());
        }

        Ok(load_credit_history(history_root, &client.id, &client.full_name))
    }

    /// Credit history by client ID; `None` when no client has that ID
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be loaded or the history root is missing.
    pub fn get_history(&self, id: &str) -> Result<Option<Vec<HistoryEntry>>> {
        match self.find_client_by_id(id)? {
            Some(client) => Ok(Some(self.get_history_for(&client)?.into_entries())),
            None => Ok(None),
        }
    }
}
