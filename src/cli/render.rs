//! Plain-text rendering for the command line.

use crate::models::{ClientListing, ClientRecord, HistoryEntry, HistoryOutcome};

const MISSING_TEXT: &str = "-";

pub fn letters(letters: &[char]) -> String {
    letters.iter().map(char::to_string).collect::<Vec<_>>().join(" ")
}

pub fn listing(listing: &ClientListing) -> String {
    let mut lines = Vec::new();

    if listing.items.is_empty() {
        lines.push(format!("No clients found (page {} of {})", listing.page, listing.total_pages));
    } else {
        let first = (listing.page - 1) * listing.page_size + 1;
        let last = first + listing.items.len() - 1;
        lines.push(format!(
            "Clients {}-{} of {} (page {} of {})",
            first, last, listing.total_items, listing.page, listing.total_pages
        ));
    }

    if !listing.available_letters.is_empty() {
        lines.push(format!("Letters: {}", letters(&listing.available_letters)));
    }

    let id_width = listing.items.iter().map(|c| c.id.chars().count()).max().unwrap_or(0);
    lines.extend(
        listing
            .items
            .iter()
            .map(|client| format!("  {:<width$}  {}", client.id, client.full_name, width = id_width)),
    );

    text_block(lines)
}

pub fn client(client: &ClientRecord) -> String {
    text_block(vec![
        format!("ID: {}", client.id),
        format!("Name: {}", client.full_name),
        format!("Fields: {}", client.raw_fields.join(" | ")),
    ])
}

pub fn history(outcome: &HistoryOutcome) -> String {
    let header = match outcome {
        HistoryOutcome::Missing => return text_block(vec!["No credit history".to_string()]),
        HistoryOutcome::Extracted { file_name, entries } => {
            format!("History file: {} ({} entries)", file_name, entries.len())
        }
        HistoryOutcome::Degraded { file_name, entries } => format!(
            "History file: {} ({} entries, recovered from a damaged file)",
            file_name,
            entries.len()
        ),
    };

    let mut lines = vec![header];
    lines.extend(
        outcome
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("[{}] {}", i + 1, entry_line(entry))),
    );

    text_block(lines)
}

/// One line per element, each newline-terminated
fn text_block(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

fn entry_line(entry: &HistoryEntry) -> String {
    if entry.is_empty() {
        return "(empty)".to_string();
    }

    entry
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value.map(str::trim).unwrap_or(MISSING_TEXT)))
        .collect::<Vec<_>>()
        .join("; ")
}
