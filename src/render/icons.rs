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

//! Unicode symbols for the TUI.
//!
//! Only single-width symbols are used here so card layouts line up in every
//! terminal font.

pub(crate) const ICON_STAR: &str = "\u{2605}";
pub(crate) const ICON_SEPARATOR: &str = "\u{2022}";
pub(crate) const ICON_SEARCH: &str = "\u{2315}";

// Poster availability
pub(crate) const ICON_POSTER: &str = "\u{25A3}";
pub(crate) const ICON_NO_POSTER: &str = "\u{25A1}";

// Braille spinner, one frame per tick
pub(crate) const SPINNER_FRAMES: [&str; 10] = [
    "\u{280B}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283C}", "\u{2834}", "\u{2826}", "\u{2827}",
    "\u{2807}", "\u{280F}",
];

pub(crate) fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}
