use crate::models::ClientRecord;

/// Keep clients whose name starts with the given letter
///
/// `None` or an empty letter is the identity filter. The comparison is an
/// uppercase prefix match against the trimmed name.
pub fn filter_by_letter(records: Vec<ClientRecord>, letter: Option<&str>) -> Vec<ClientRecord> {
    let letter = match letter {
        Some(letter) if !letter.is_empty() => letter.to_uppercase(),
        _ => return records,
    };

    records
        .into_iter()
        .filter(|record| record.full_name.trim().to_uppercase().starts_with(&letter))
        .collect()
}

/// Search clients by name or ID within an already letter-filtered list
///
/// Name matching is a case-insensitive substring match. The ID is compared
/// as stored: the lowercased query must appear in it verbatim.
pub fn search(query: &str, records: Vec<ClientRecord>) -> Vec<ClientRecord> {
    let query = query.to_lowercase();

    records
        .into_iter()
        .filter(|record| record.full_name.to_lowercase().contains(&query) || record.id.contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: &str, full_name: &str) -> ClientRecord {
        ClientRecord {
            id: id.to_string(),
            full_name: full_name.to_string(),
            raw_fields: vec![id.to_string(), full_name.to_string()],
        }
    }

    fn sample() -> Vec<ClientRecord> {
        vec![
            client("001", "Ivanov Ivan"),
            client("002", "Petrov Petr"),
            client("003", "Иванова Анна"),
            client("A17", "ivanenko Oleg"),
        ]
    }

    fn ids(records: &[ClientRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_filter_by_letter_empty_is_identity() {
        assert_eq!(filter_by_letter(sample(), None), sample());
        assert_eq!(filter_by_letter(sample(), Some("")), sample());
    }

    #[test]
    fn test_filter_by_letter_is_case_insensitive() {
        let filtered = filter_by_letter(sample(), Some("i"));
        assert_eq!(ids(&filtered), vec!["001", "A17"]);

        let filtered = filter_by_letter(sample(), Some("и"));
        assert_eq!(ids(&filtered), vec!["003"]);
    }

    #[test]
    fn test_filter_by_letter_trims_name() {
        let records = vec![client("9", "  Sidorov")];
        assert_eq!(filter_by_letter(records, Some("S")).len(), 1);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let found = search("IVAN", sample());
        assert_eq!(ids(&found), vec!["001", "A17"]);

        let found = search("АННА", sample());
        assert_eq!(ids(&found), vec!["003"]);
    }

    #[test]
    fn test_search_matches_id_substring() {
        let found = search("02", sample());
        assert_eq!(ids(&found), vec!["002"]);
    }

    #[test]
    fn test_search_does_not_lowercase_id() {
        // The query is lowercased but IDs are not, so "A17" is unreachable by ID.
        assert!(search("A17", sample()).is_empty());
        assert!(search("a17", sample()).is_empty());
    }

    #[test]
    fn test_search_empty_query_keeps_everything() {
        assert_eq!(search("", sample()), sample());
    }

    #[test]
    fn test_search_within_letter_group() {
        let group = filter_by_letter(sample(), Some("P"));
        assert!(search("ivan", group).is_empty());
    }
}
