//! Country picker widget — filter box plus matching names

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

pub struct CountryPickerWidget<'a> {
    state: &'a TuiState,
    matches: &'a [&'a str],
}

impl<'a> CountryPickerWidget<'a> {
    pub fn new(state: &'a TuiState, matches: &'a [&'a str]) -> Self {
        Self { state, matches }
    }
}

impl<'a> Widget for CountryPickerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Select Country ")
            .style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Fill(1)])
            .split(inner);

        let query = Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Magenta)),
            Span::raw(self.state.picker.query.text.clone()),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ]);
        Paragraph::new(query).render(chunks[0], buf);

        if self.matches.is_empty() {
            Paragraph::new(Span::styled(
                "No matching country",
                Style::default().fg(Color::DarkGray),
            ))
            .render(chunks[1], buf);
            return;
        }

        let current = self.state.composition.country.as_deref();
        let items: Vec<ListItem> = self
            .matches
            .iter()
            .map(|&name| {
                let style = if Some(name) == current {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                ListItem::new(Span::styled(name.to_string(), style))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▸ ");
        let mut list_state = ListState::default();
        list_state.select(Some(self.state.picker.selected.min(self.matches.len() - 1)));
        StatefulWidget::render(list, chunks[1], buf, &mut list_state);
    }
}
