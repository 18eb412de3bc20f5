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

//! Render the result area for the current view state.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{App, model::ViewState, render::icons::spinner_frame};

pub(crate) const LOADING_TEXT: &str = "Loading movies...";

pub(crate) fn draw_results(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    match &app.view_state {
        ViewState::Loading => {
            let line = Line::from(vec![
                Span::styled(spinner_frame(app.ticks), Style::default().fg(theme.accent_colour)),
                Span::raw(" "),
                Span::styled(LOADING_TEXT, Style::default().fg(theme.placeholder_fg)),
            ]);
            f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        }

        ViewState::Error(message) => {
            f.render_widget(
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(theme.error_colour))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                area,
            );
        }

        ViewState::Ready(movies) => app.movie_grid.draw(f, area, movies, theme),
    }
}
