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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change. What the result area shows is decided by
//! the current [`ViewState`](crate::model::ViewState) alone.

mod footer;
pub(crate) mod icons;
mod results;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::{
    App,
    model::Query,
    render::{footer::draw_footer, results::draw_results},
    theme::Theme,
};

pub(crate) const BANNER: &str = "Find Movies You'll Enjoy Without the Hassle";

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// The heading shown above the results for the query they belong to.
pub(crate) fn heading(query: &Query) -> &'static str {
    if query.is_search() {
        "Search Results"
    } else {
        "Popular Movies"
    }
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split, top to bottom, into a banner, the search box, the
/// result heading, the card grid and a one line footer.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_banner(f, outer[0], &app.theme);

    app.search_box.draw(f, outer[1], &app.theme);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            heading(app.debouncer.settled()),
            Style::default()
                .fg(app.theme.heading_fg)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().padding(Padding::top(1))),
        outer[2],
    );

    draw_results(f, outer[3], app);

    draw_footer(f, outer[4], app);
}

fn draw_banner(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            BANNER,
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        area,
    );
}
