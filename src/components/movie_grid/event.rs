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

//! Input handling and event processing for the movie grid.
//!
//! This module maps raw terminal keyboard events to grid navigation, and to
//! the actions the grid hands back to the event loop.

use crossterm::event::{Event, KeyCode};

use crate::components::{GridAction, MovieGrid};

impl MovieGrid {
    pub(crate) fn process_event(&mut self, event: &Event, len: usize) -> Option<GridAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('l') | KeyCode::Right => self.goto_next(len),
            KeyCode::Char('h') | KeyCode::Left => self.goto_previous(len),
            KeyCode::Char('j') | KeyCode::Down => self.goto_down(len),
            KeyCode::Char('k') | KeyCode::Up => self.goto_up(len),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(len),

            KeyCode::Char('/') | KeyCode::Tab | KeyCode::Esc => {
                return Some(GridAction::FocusSearch);
            }
            KeyCode::Char('q') => return Some(GridAction::Quit),

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn vim_and_arrow_keys_navigate() {
        let mut grid = MovieGrid::new();
        grid.set_viewport(2, 3);
        grid.reset_selection(6);

        assert_eq!(grid.process_event(&key(KeyCode::Char('l')), 6), None);
        assert_eq!(grid.selected(), Some(1));
        grid.process_event(&key(KeyCode::Down), 6);
        assert_eq!(grid.selected(), Some(3));
        grid.process_event(&key(KeyCode::Char('G')), 6);
        assert_eq!(grid.selected(), Some(5));
        grid.process_event(&key(KeyCode::Char('k')), 6);
        assert_eq!(grid.selected(), Some(3));
    }

    #[test]
    fn leaving_keys_produce_actions() {
        let mut grid = MovieGrid::new();

        assert_eq!(grid.process_event(&key(KeyCode::Char('/')), 0), Some(GridAction::FocusSearch));
        assert_eq!(grid.process_event(&key(KeyCode::Esc), 0), Some(GridAction::FocusSearch));
        assert_eq!(grid.process_event(&key(KeyCode::Char('q')), 0), Some(GridAction::Quit));
    }

    #[test]
    fn empty_grid_ignores_navigation() {
        let mut grid = MovieGrid::new();
        grid.reset_selection(0);

        grid.process_event(&key(KeyCode::Char('j')), 0);
        assert_eq!(grid.selected(), None);
    }
}
