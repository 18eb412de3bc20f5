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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette. The background colour
//! is also pushed to the terminal emulator itself, see
//! [`crate::util::term::set_terminal_bg`], so it must be an RGB colour.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) heading_fg: Color,
    pub(crate) input_fg: Color,
    pub(crate) placeholder_fg: Color,

    pub(crate) card_bg: Color,
    pub(crate) card_title_fg: Color,
    pub(crate) card_rating_fg: Color,
    pub(crate) card_meta_fg: Color,
    pub(crate) card_poster_fg: Color,
    pub(crate) card_no_poster_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(3, 0, 20),
            accent_colour: Color::Rgb(171, 139, 255),
            border_colour: Color::Rgb(102, 102, 102),
            error_colour: Color::Rgb(239, 68, 68),

            heading_fg: Color::Rgb(255, 255, 255),
            input_fg: Color::Rgb(255, 255, 255),
            placeholder_fg: Color::Rgb(168, 181, 219),

            card_bg: Color::Rgb(15, 13, 35),
            card_title_fg: Color::Rgb(255, 255, 255),
            card_rating_fg: Color::Rgb(250, 189, 47),
            card_meta_fg: Color::Rgb(162, 161, 166),
            card_poster_fg: Color::Rgb(206, 206, 251),
            card_no_poster_fg: Color::Rgb(102, 102, 102),
        }
    }
}
