//! Name filtering for catalog entries

use crate::entry::Named;

/// Filter entries whose name contains `term`, ignoring case
///
/// Matches keep their original relative order. An empty term returns every
/// entry, so callers never have to special-case "no search".
///
/// # Arguments
///
/// * `entries` - The full entry sequence
/// * `term` - The search term; leading/trailing whitespace is significant
///
/// # Returns
///
/// References to the matching entries, in input order.
pub fn filter_entries<'a, E: Named>(entries: &'a [E], term: &str) -> Vec<&'a E> {
    if term.is_empty() {
        return entries.iter().collect();
    }

    let needle = term.to_lowercase();

    entries
        .iter()
        .filter(|entry| entry.name().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    fn create_test_entries() -> Vec<Entry> {
        ["bulbasaur", "Ivysaur", "venusaur", "charmander", "pikachu", "raichu"]
            .iter()
            .enumerate()
            .map(|(i, name)| Entry::new(*name, format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1)))
            .collect()
    }

    fn names<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_term_returns_all_in_order() {
        let entries = create_test_entries();
        let filtered = filter_entries(&entries, "");
        assert_eq!(filtered.len(), entries.len());
        for (original, kept) in entries.iter().zip(filtered) {
            assert_eq!(original, kept);
        }
    }

    #[test]
    fn test_substring_match() {
        let entries = create_test_entries();
        let filtered = filter_entries(&entries, "saur");
        assert_eq!(names(&filtered), vec!["bulbasaur", "Ivysaur", "venusaur"]);
    }

    #[test]
    fn test_case_insensitive() {
        let entries = create_test_entries();
        assert_eq!(names(&filter_entries(&entries, "IVY")), vec!["Ivysaur"]);
        assert_eq!(names(&filter_entries(&entries, "PikA")), vec!["pikachu"]);
    }

    #[test]
    fn test_match_in_the_middle_preserves_order() {
        let entries = create_test_entries();
        assert_eq!(
            names(&filter_entries(&entries, "chu")),
            vec!["pikachu", "raichu"]
        );
    }

    #[test]
    fn test_no_match() {
        let entries = create_test_entries();
        assert!(filter_entries(&entries, "mewtwo").is_empty());
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let entries = create_test_entries();
        assert!(filter_entries(&entries, " pikachu").is_empty());
    }

    #[test]
    fn test_empty_entries() {
        let entries: Vec<Entry> = Vec::new();
        assert!(filter_entries(&entries, "").is_empty());
        assert!(filter_entries(&entries, "a").is_empty());
    }
}
