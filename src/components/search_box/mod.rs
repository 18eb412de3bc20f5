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

//! Search text input.
//!
//! This module wraps a `tui-input` text field. Every edit is reported to the
//! event loop as the raw, undebounced value.

mod event;
mod render;

use tui_input::Input;

pub(crate) const PLACEHOLDER: &str = "Search through thousands of movies";

#[derive(Debug, PartialEq)]
pub(crate) enum SearchBoxAction {
    /// The text changed, carrying the complete new value.
    Changed(String),

    /// The user wants to move on to the results.
    Leave,
}

pub(crate) struct SearchBox {
    input: Input,
    pub(crate) is_active: bool,
}

impl SearchBox {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            is_active: true,
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }
}
