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

//! Input handling for the search box.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchBox, SearchBoxAction};

impl SearchBox {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchBoxAction> {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Tab | KeyCode::Down | KeyCode::Enter | KeyCode::Esc => {
                    return Some(SearchBoxAction::Leave);
                }
                _ => {}
            }
        }

        // Delegate everything else to the managed input component.
        let before = self.input.value().to_string();
        self.input.handle_event(event);

        let value = self.input.value();
        (value != before).then(|| SearchBoxAction::Changed(value.to_string()))
    }
}
