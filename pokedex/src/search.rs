//! Client-side name search over the cached directory

use pokedex_common::DirectoryEntry;

/// Lower-case a raw query. `None` for a query with nothing to search for.
pub fn normalize_query(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_lowercase())
    }
}

/// Return the first `limit` entries whose name contains `query`,
/// case-insensitively, in directory order.
///
/// An empty query matches nothing; callers treat it as "no search" rather
/// than "everything".
pub fn filter(query: &str, directory: &[DirectoryEntry], limit: usize) -> Vec<DirectoryEntry> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let matches: Vec<DirectoryEntry> = directory
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect();

    log::debug!("Search '{}' matched {} entries", needle, matches.len());
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entries, numbered_entries, KANTO_20};

    fn names(found: &[DirectoryEntry]) -> Vec<&str> {
        found.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_saur_matches_in_directory_order() {
        let directory = entries(&KANTO_20);
        let found = filter("saur", &directory, 12);
        assert_eq!(names(&found), vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[test]
    fn test_match_is_case_insensitive_and_unanchored() {
        let directory = entries(&KANTO_20);
        let found = filter("PIDG", &directory, 12);
        assert_eq!(names(&found), vec!["pidgey", "pidgeotto", "pidgeot"]);

        let found = filter("EOT", &directory, 12);
        assert_eq!(names(&found), vec!["pidgeotto", "pidgeot"]);
    }

    #[test]
    fn test_result_capped_at_limit() {
        let directory = numbered_entries(100);
        let found = filter("mon", &directory, 12);
        assert_eq!(found.len(), 12);
        assert_eq!(found[0].name, "mon-001");
        assert_eq!(found[11].name, "mon-012");
    }

    #[test]
    fn test_every_match_contains_query() {
        let directory = entries(&KANTO_20);
        for query in ["a", "e", "char", "t", "o", "pi", "xyz"] {
            let found = filter(query, &directory, 12);
            assert!(found.len() <= 12);
            assert!(found.iter().all(|e| e.name.contains(query)), "query {query}");

            // Directory order preserved
            let positions: Vec<usize> = found
                .iter()
                .map(|e| directory.iter().position(|d| d == e).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {query}");
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let directory = entries(&KANTO_20);
        assert!(filter("mewtwo", &directory, 12).is_empty());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let directory = entries(&KANTO_20);
        assert!(filter("", &directory, 12).is_empty());
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("Char").as_deref(), Some("char"));
    }
}
