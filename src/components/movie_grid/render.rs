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

//! UI rendering logic for the movie grid.
//!
//! Cards are laid out left to right, top to bottom, in provider order. Only
//! the rows that fit the area are drawn, starting at the grid's first visible
//! row.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::{
    components::{
        CardView, MovieGrid,
        movie_grid::{CARD_HEIGHT, columns_for_width, rows_for_height},
    },
    model::{EnrichedMovie, Poster},
    render::icons::{ICON_NO_POSTER, ICON_POSTER, ICON_SEPARATOR, ICON_STAR},
    theme::Theme,
    util::format::truncate,
};

impl MovieGrid {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        movies: &[EnrichedMovie],
        theme: &Theme,
    ) {
        let columns = columns_for_width(area.width);
        let rows = rows_for_height(area.height);
        self.set_viewport(columns, rows);

        let card_width = area.width / columns as u16;

        let visible = movies
            .iter()
            .enumerate()
            .skip(self.first_row() * columns)
            .take(rows * columns);

        for (slot, (index, movie)) in visible.enumerate() {
            let card_area = Rect {
                x: area.x + (slot % columns) as u16 * card_width,
                y: area.y + (slot / columns) as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT.min(area.height),
            };

            let selected = self.selected() == Some(index);
            draw_card(
                f,
                card_area,
                &CardView::from(movie),
                selected,
                self.is_active,
                theme,
            );
        }
    }
}

fn draw_card(
    f: &mut Frame,
    area: Rect,
    card: &CardView,
    selected: bool,
    grid_active: bool,
    theme: &Theme,
) {
    let border_style = match (selected, grid_active) {
        (true, true) => Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(theme.heading_fg),
        _ => Style::default().fg(theme.border_colour),
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(theme.card_bg));

    let width = block.inner(area).width as usize;

    let (poster_icon, poster_fg) = match card.poster {
        Poster::Url(_) => (ICON_POSTER, theme.card_poster_fg),
        Poster::Unavailable => (ICON_NO_POSTER, theme.card_no_poster_fg),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(poster_icon, Style::default().fg(poster_fg)),
            Span::raw(" "),
            Span::styled(card.poster_label(), Style::default().fg(poster_fg)),
        ]),
        Line::from(Span::styled(
            truncate(card.title, width),
            Style::default()
                .fg(theme.card_title_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} {}", ICON_STAR, card.rating),
                Style::default().fg(theme.card_rating_fg),
            ),
            Span::styled(
                format!(" {} {} {} {}", ICON_SEPARATOR, card.language, ICON_SEPARATOR, card.year),
                Style::default().fg(theme.card_meta_fg),
            ),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
