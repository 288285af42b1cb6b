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

//! Symbols for the TUI.
//!
//! Plain ASCII is used for the checkbox column so it lines up in every
//! terminal font.

pub(crate) const CHECKBOX_ON: &str = "[x]";
pub(crate) const CHECKBOX_OFF: &str = "[ ]";

// Magnifying glass, forced to text presentation with Variation Selector-15
// [\u{FE0E}] so it respects the TUI's color styling.
pub(crate) const ICON_SEARCH: &str = "\u{1F50D}\u{FE0E}";
