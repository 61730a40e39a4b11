use std::collections::BTreeSet;

use crate::models::ClientRecord;

/// Full uppercase mapping of the first character of the trimmed name
///
/// Usually one character, but not always: `ß` maps to `SS`. History folders
/// are named by this string too.
pub(crate) fn leading_letter(name: &str) -> Option<String> {
    name.trim().chars().next().map(|c| c.to_uppercase().collect())
}

/// The navigation letter for a leading letter that is a single character in range
fn navigation_letter(leading: &str) -> Option<char> {
    let mut chars = leading.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_navigation_letter(c) => Some(c),
        _ => None,
    }
}

/// Latin `A-Z` and Cyrillic `А-Я`; `Ё` sits outside the contiguous block and is not included
fn is_navigation_letter(c: char) -> bool {
    c.is_ascii_uppercase() || ('А'..='Я').contains(&c)
}

/// Collect the sorted set of leading letters used for letter navigation
///
/// Names starting with digits, punctuation or letters outside the Latin and
/// Cyrillic uppercase ranges contribute nothing, although the records
/// themselves stay in listings. So do names whose first character uppercases
/// to more than one letter.
pub fn distinct_leading_letters(records: &[ClientRecord]) -> BTreeSet<char> {
    records
        .iter()
        .filter_map(|record| leading_letter(&record.full_name))
        .filter_map(|leading| navigation_letter(&leading))
        .collect()
}
