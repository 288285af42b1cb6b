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

/// Formats a count with a singular or plural noun, as used in view headers.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_count(1, "track"), "1 track");
/// assert_eq!(format_count(3, "track"), "3 tracks");
/// ```
pub(crate) fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_and_plural() {
        assert_eq!(format_count(0, "track"), "0 tracks");
        assert_eq!(format_count(1, "track"), "1 track");
        assert_eq!(format_count(12, "track"), "12 tracks");
    }
}
