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

//! Render the search box, its text and, while focused, the cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Paragraph},
};

use crate::{
    components::{SearchBox, search_box::PLACEHOLDER},
    render::{Render, icons::ICON_SEARCH},
    theme::Theme,
};

impl Render for SearchBox {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_active {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_colour))
            .title(format!(" {} ", ICON_SEARCH));

        let inner = block.inner(area);

        // Keep one cell free at the end for the cursor
        let width = inner.width.saturating_sub(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let paragraph = if self.input.value().is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.placeholder_fg))
        } else {
            Paragraph::new(self.input.value())
                .style(Style::default().fg(theme.input_fg))
                .scroll((0, scroll as u16))
        };

        f.render_widget(paragraph.block(block), area);

        if self.is_active {
            let cursor_x = inner.x + self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}
