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

//! Terminal environment and styling utilities.
//!
//! Background colour changes use OSC (Operating System Command) escape
//! sequences, which most modern terminals (XTerm, iTerm2, Alacritty, Kitty)
//! understand. Terminals that don't simply ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

/// Paints the whole terminal window with `colour` using OSC 11.
///
/// Only RGB colours can be expressed this way, anything else leaves the
/// terminal background alone.
pub(crate) fn set_terminal_bg(colour: Color) {
    if let Some(hex) = to_hex(colour) {
        print!("\x1b]11;{}\x07", hex);
        io::stdout().flush().ok();
    }
}

/// Reverts the terminal background to the user's own setting (OSC 111).
pub(crate) fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}

/// Converts an RGB colour to a CSS-style hexadecimal string.
pub(crate) fn to_hex(colour: Color) -> Option<String> {
    match colour {
        Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_colours_convert_to_hex() {
        assert_eq!(to_hex(Color::Rgb(15, 13, 35)).as_deref(), Some("#0f0d23"));
        assert_eq!(to_hex(Color::Blue), None);
    }
}
