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

//! Responsive movie card grid and selection management.
//!
//! The number of columns follows the width of the area the grid was last
//! drawn into, so keyboard navigation always matches what is on screen. The
//! grid only keeps selection and scroll state, the movies themselves belong
//! to the current view state.

mod event;
mod render;

use crate::model::{EnrichedMovie, Poster};

pub(crate) const CARD_WIDTH: u16 = 30;
pub(crate) const CARD_HEIGHT: u16 = 5;

#[derive(Debug, PartialEq)]
pub(crate) enum GridAction {
    FocusSearch,
    Quit,
}

/// Everything a card displays, with every fallback already applied.
#[derive(Debug, PartialEq)]
pub(crate) struct CardView<'a> {
    pub(crate) title: &'a str,
    pub(crate) poster: Poster<'a>,
    pub(crate) rating: &'a str,
    pub(crate) language: &'a str,
    pub(crate) year: &'a str,
}

impl<'a> From<&'a EnrichedMovie> for CardView<'a> {
    fn from(movie: &'a EnrichedMovie) -> Self {
        Self {
            title: movie.title(),
            poster: movie.poster(),
            rating: movie.rating(),
            language: movie.language(),
            year: movie.year(),
        }
    }
}

impl CardView<'_> {
    pub(crate) fn poster_label(&self) -> &'static str {
        match self.poster {
            Poster::Url(_) => "Poster",
            Poster::Unavailable => "No poster",
        }
    }
}

pub(crate) fn columns_for_width(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

pub(crate) fn rows_for_height(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

pub(crate) struct MovieGrid {
    selected: Option<usize>,
    first_row: usize,
    columns: usize,
    visible_rows: usize,
    pub(crate) is_active: bool,
}

impl MovieGrid {
    pub(crate) fn new() -> Self {
        Self {
            selected: None,
            first_row: 0,
            columns: 1,
            visible_rows: 1,
            is_active: false,
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn first_row(&self) -> usize {
        self.first_row
    }

    /// Selects the first card of a fresh result list, or nothing if it is
    /// empty.
    pub(crate) fn reset_selection(&mut self, len: usize) {
        self.selected = (len > 0).then_some(0);
        self.first_row = 0;
    }

    /// Records the grid dimensions from the latest draw.
    pub(crate) fn set_viewport(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.scroll_to_selected();
    }

    fn scroll_to_selected(&mut self) {
        let Some(selected) = self.selected else {
            self.first_row = 0;
            return;
        };

        let row = selected / self.columns;
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + self.visible_rows {
            self.first_row = row + 1 - self.visible_rows;
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.scroll_to_selected();
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.select(i);
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.selected.map_or(0, |i| i.saturating_sub(1).min(len - 1));
        self.select(i);
    }

    fn goto_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let Some(i) = self.selected else {
            self.select(0);
            return;
        };

        let last = len - 1;
        let target = i + self.columns;
        if target <= last {
            self.select(target);
        } else if i / self.columns < last / self.columns {
            // The row below is only partly filled
            self.select(last);
        }
    }

    fn goto_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => i.checked_sub(self.columns).unwrap_or(i).min(len - 1),
            None => 0,
        };
        self.select(i);
    }

    fn goto_first(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.select(0);
    }

    fn goto_last(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.select(len - 1);
    }
}
