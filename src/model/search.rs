// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Catalog search.
//!
//! This module computes the track list view, the subset of the catalog whose
//! titles match the current search query.

use crate::model::Track;

/// Returns the catalog tracks whose title contains `query`, ignoring case.
///
/// An empty query matches every track. Catalog order is preserved and the
/// returned tracks are fresh copies of the catalog entries.
pub(crate) fn filter(catalog: &[Track], query: &str) -> Vec<Track> {
    if query.is_empty() {
        return catalog.to_vec();
    }

    let needle = query.to_lowercase();

    catalog
        .iter()
        .filter(|track| track.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Whether the "not found" message applies to a query and its results.
pub(crate) fn is_not_found(query: &str, results: &[Track]) -> bool {
    !query.is_empty() && results.is_empty()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn catalog() -> Vec<Track> {
        vec![
            Track::new("a", "Alpha"),
            Track::new("b", "Beta"),
            Track::new("c", "Gamma Ray"),
        ]
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        assert_eq!(filter(&catalog(), ""), catalog());
    }

    #[test]
    fn match_ignores_case() {
        let ids: Vec<String> = filter(&catalog(), "AL").into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn substring_match_keeps_catalog_order() {
        let ids: Vec<String> = filter(&catalog(), "a").into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let ids: Vec<String> = filter(&catalog(), "a r").into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter(&catalog(), "zeta").is_empty());
    }

    #[test]
    fn not_found_only_for_non_empty_query() {
        assert!(is_not_found("zeta", &[]));
        assert!(!is_not_found("", &[]));
        assert!(!is_not_found("al", &catalog()));
    }

    proptest! {
        #[test]
        fn results_always_contain_query(
            titles in prop::collection::vec("[A-Za-z ]{0,12}", 0..20),
            query in "[A-Za-z]{0,3}",
        ) {
            let catalog: Vec<Track> = titles
                .iter()
                .enumerate()
                .map(|(i, title)| Track::new(i.to_string(), title.clone()))
                .collect();

            let results = filter(&catalog, &query);

            let needle = query.to_lowercase();
            prop_assert!(results.iter().all(|t| t.title.to_lowercase().contains(&needle)));

            let expected = catalog
                .iter()
                .filter(|t| t.title.to_lowercase().contains(&needle))
                .count();
            prop_assert_eq!(results.len(), expected);
        }

        #[test]
        fn empty_query_is_identity(titles in prop::collection::vec("[a-z]{1,8}", 0..20)) {
            let catalog: Vec<Track> = titles
                .iter()
                .enumerate()
                .map(|(i, title)| Track::new(i.to_string(), title.clone()))
                .collect();

            prop_assert_eq!(filter(&catalog, ""), catalog);
        }
    }
}
