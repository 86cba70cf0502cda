/*
   Copyright (C) 2026 l5yth

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

//! Frame rendering for the display, keypad, and footer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::engine::LINE_COUNT;
use crate::keypad::{GRID_COLS, GRID_ROWS, KEYPAD};

const BUTTON_HEIGHT: u16 = 3;

/// Render one UI frame from runtime state.
pub fn draw_frame(
    f: &mut Frame<'_>,
    display_block: &str,
    selected: (usize, usize),
    status_line: &str,
) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LINE_COUNT as u16 + 2),
            Constraint::Min(GRID_ROWS as u16 * BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .split(size);

    let display = Paragraph::new(display_block.to_string())
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL).title("tcalc"));
    f.render_widget(display, chunks[0]);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BUTTON_HEIGHT); GRID_ROWS])
        .split(chunks[1]);
    for (row_idx, row) in KEYPAD.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLS as u32); GRID_COLS])
            .split(row_areas[row_idx]);
        for (col_idx, button) in row.iter().enumerate() {
            let style = if (row_idx, col_idx) == selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let widget = Paragraph::new(button.label)
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(widget, col_areas[col_idx]);
        }
    }

    let footer = Paragraph::new(status_line.to_string()).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, chunks[2]);
}
