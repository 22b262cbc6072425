//! Party editor widget — table of party records with cell selection

use super::chambers::seat_color;
use crate::tui::mode::InputMode;
use crate::tui::state::{TextInput, TuiState};
use legislation_domain::{PartyField, PartyRecord};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

pub struct EditorWidget<'a> {
    state: &'a TuiState,
}

impl<'a> EditorWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn cell_line(&self, record: &PartyRecord, field: PartyField, selected: bool) -> Line<'static> {
        if selected && self.state.mode == InputMode::Insert {
            return input_line(&self.state.cell_input);
        }

        match field {
            PartyField::Color => Line::from(vec![
                Span::styled("██ ", Style::default().fg(seat_color(record.color))),
                Span::raw(record.color.to_hex()),
            ]),
            _ => Line::raw(field.value_of(record)),
        }
    }
}

/// Render a text buffer with a block cursor.
fn input_line(input: &TextInput) -> Line<'static> {
    let (before, rest) = input.text.split_at(input.cursor);
    let mut chars = rest.chars();
    let cursor = chars.next().map(String::from).unwrap_or_else(|| " ".into());
    Line::from(vec![
        Span::styled(before.to_string(), Style::default().fg(Color::Green)),
        Span::styled(cursor, Style::default().add_modifier(Modifier::REVERSED)),
        Span::styled(chars.as_str().to_string(), Style::default().fg(Color::Green)),
    ])
}

impl<'a> Widget for EditorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(
            PartyField::ALL
                .iter()
                .map(|f| Cell::from(f.label()))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .state
            .composition
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let cells = PartyField::ALL.iter().map(|&field| {
                    let selected =
                        i == self.state.selected_row && field == self.state.selected_field;
                    let cell = Cell::from(self.cell_line(record, field, selected));
                    if selected {
                        cell.style(
                            Style::default().add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
                        )
                    } else {
                        cell
                    }
                });
                Row::new(cells.collect::<Vec<_>>())
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Legislation Editor ")
            .title_bottom(" a:add  d:remove  Enter:edit  c:country  Esc:close ")
            .style(Style::default().fg(Color::White));

        let empty = rows.is_empty();
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(30),
                Constraint::Length(9),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

        let mut table_state = TableState::default();
        if !empty {
            table_state.select(Some(self.state.selected_row));
        }
        StatefulWidget::render(table, area, buf, &mut table_state);

        if empty && area.height > 4 {
            let hint = Line::from(Span::styled(
                "No parties. Press a to add one.",
                Style::default().fg(Color::DarkGray),
            ));
            buf.set_line(area.x + 2, area.y + 3, &hint, area.width.saturating_sub(4));
        }
    }
}
