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

use proptest::prelude::*;
use std::collections::HashSet;

use super::*;

fn t(id: &str, title: &str) -> Track {
    Track::new(id, title)
}

fn sel(id: &str) -> Track {
    Track::new(id, id.to_uppercase()).with_selected(true)
}

fn unsel(id: &str) -> Track {
    Track::new(id, id.to_uppercase())
}

fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn add_one_appends_unselected_copy() {
    let view = vec![t("a", "Alpha").with_selected(true), t("b", "Beta")];
    let playlist = add_one(&view, &[], "a");
    assert_eq!(playlist, vec![t("a", "Alpha")]);
}

#[test]
fn add_one_appends_at_the_end() {
    let view = vec![t("a", "Alpha"), t("b", "Beta")];
    let playlist = add_one(&view, &[t("b", "Beta")], "a");
    assert_eq!(ids(&playlist), vec!["b", "a"]);
}

#[test]
fn add_one_ignores_duplicates() {
    let view = vec![t("a", "Alpha")];
    let once = add_one(&view, &[], "a");
    let twice = add_one(&view, &once, "a");
    assert_eq!(twice.len(), 1);
}

#[test]
fn add_one_ignores_id_missing_from_view() {
    let view = vec![t("a", "Alpha")];
    let playlist = vec![t("b", "Beta")];
    assert_eq!(add_one(&view, &playlist, "c"), playlist);
}

#[test]
fn add_selected_skips_tracks_already_in_playlist() {
    let view = vec![sel("a"), sel("b")];
    let playlist = vec![unsel("b")];
    let updated = add_selected(&view, &playlist);
    assert_eq!(ids(&updated), vec!["b", "a"]);
    assert!(updated.iter().all(|t| !t.is_selected));
}

#[test]
fn add_selected_keeps_view_order_and_skips_unselected() {
    let view = vec![sel("c"), unsel("a"), sel("b")];
    let updated = add_selected(&view, &[]);
    assert_eq!(ids(&updated), vec!["c", "b"]);
}

#[test]
fn add_selected_without_selection_is_identity() {
    let view = vec![unsel("a"), unsel("b")];
    let playlist = vec![sel("x")];
    assert_eq!(add_selected(&view, &playlist), playlist);
}

#[test]
fn remove_one_removes_single_entry() {
    let playlist = vec![unsel("a"), unsel("b"), unsel("c")];
    assert_eq!(ids(&remove_one(&playlist, "b")), vec!["a", "c"]);
}

#[test]
fn remove_one_with_unknown_id_is_identity() {
    let playlist = vec![unsel("a"), sel("b")];
    assert_eq!(remove_one(&playlist, "z"), playlist);
}

#[test]
fn remove_selected_keeps_order_of_survivors() {
    let playlist = vec![sel("1"), unsel("2"), sel("3")];
    assert_eq!(remove_selected(&playlist), vec![unsel("2")]);
}

#[test]
fn remove_selected_handles_adjacent_selection() {
    let playlist = vec![unsel("1"), sel("2"), sel("3"), unsel("4"), sel("5")];
    assert_eq!(ids(&remove_selected(&playlist)), vec!["1", "4"]);
}

#[test]
fn set_selected_touches_only_matching_id() {
    let view = vec![unsel("a"), unsel("b")];
    let updated = set_selected(&view, "b", true);
    assert_eq!(updated, vec![unsel("a"), sel("b")]);

    let cleared = set_selected(&updated, "b", false);
    assert_eq!(cleared, view);
}

#[test]
fn set_selected_with_unknown_id_is_identity() {
    let view = vec![unsel("a"), sel("b")];
    assert_eq!(set_selected(&view, "z", true), view);
}

#[test]
fn bulk_selection_helpers() {
    let tracks = vec![sel("a"), unsel("b")];
    assert!(select_all(&tracks).iter().all(|t| t.is_selected));
    assert!(select_none(&tracks).iter().all(|t| !t.is_selected));
    assert_eq!(select_inverse(&tracks), vec![unsel("a"), sel("b")]);
}

fn arbitrary_tracks() -> impl Strategy<Value = Vec<Track>> {
    prop::collection::vec(("[a-e]", any::<bool>()), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, selected)| Track::new(id.clone(), id).with_selected(selected))
            .collect()
    })
}

fn unique(tracks: Vec<Track>) -> Vec<Track> {
    let mut seen = HashSet::new();
    tracks.into_iter().filter(|t| seen.insert(t.id.clone())).collect()
}

proptest! {
    #[test]
    fn add_one_never_duplicates_ids(
        view in arbitrary_tracks(),
        playlist in arbitrary_tracks(),
        picks in prop::collection::vec("[a-f]", 0..10),
    ) {
        let view = unique(view);
        let mut playlist = unique(playlist);

        for id in picks {
            playlist = add_one(&view, &playlist, &id);
        }

        let distinct: HashSet<&str> = playlist.iter().map(|t| t.id.as_str()).collect();
        prop_assert_eq!(distinct.len(), playlist.len());
    }

    #[test]
    fn add_selected_never_duplicates_ids(view in arbitrary_tracks(), playlist in arbitrary_tracks()) {
        let view = unique(view);
        let playlist = unique(playlist);

        let updated = add_selected(&view, &playlist);

        let distinct: HashSet<&str> = updated.iter().map(|t| t.id.as_str()).collect();
        prop_assert_eq!(distinct.len(), updated.len());
        prop_assert_eq!(&updated[..playlist.len()], &playlist[..]);
    }

    #[test]
    fn remove_selected_removes_exactly_the_selection(playlist in arbitrary_tracks()) {
        let updated = remove_selected(&playlist);
        let expected: Vec<Track> = playlist.iter().filter(|t| !t.is_selected).cloned().collect();
        prop_assert_eq!(updated, expected);
    }

    #[test]
    fn remove_one_of_absent_id_is_identity(playlist in arbitrary_tracks()) {
        prop_assert_eq!(remove_one(&playlist, "z"), playlist);
    }

    #[test]
    fn set_selected_of_absent_id_is_identity(view in arbitrary_tracks(), flag in any::<bool>()) {
        prop_assert_eq!(set_selected(&view, "z", flag), view);
    }
}
