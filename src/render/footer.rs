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

//! Render the footer: the selected movie's poster, or a note that a search
//! is pending, and the key bindings for whichever component has focus.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, Focus, model::Poster, util::format::truncate};

const SEARCH_HINTS: &str = "Tab results  Ctrl-C quit";
const RESULTS_HINTS: &str = "hjkl move  / search  q quit";
const PENDING_TEXT: &str = "Searching when you stop typing...";

pub(crate) fn poster_text(poster: Poster) -> String {
    match poster {
        Poster::Url(url) => format!("Poster: {url}"),
        Poster::Unavailable => "Poster not available".to_string(),
    }
}

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::SearchInput => SEARCH_HINTS,
        Focus::Results => RESULTS_HINTS,
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(hints.len() as u16)])
        .horizontal_margin(1)
        .split(area);

    let selected = app
        .movie_grid
        .selected()
        .and_then(|i| app.view_state.movies().get(i));

    // A pending search replaces the poster line until it settles
    let text = if app.debouncer.deadline().is_some() {
        Some(PENDING_TEXT.to_string())
    } else {
        selected.map(|movie| format!("{}  {}", movie.key(), poster_text(movie.poster())))
    };

    if let Some(text) = text {
        let text = truncate(&text, columns[0].width as usize);
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(app.theme.card_meta_fg)),
            columns[0],
        );
    }

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(app.theme.placeholder_fg)),
        columns[1],
    );
}
