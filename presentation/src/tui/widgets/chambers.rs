//! Chamber grid widget — one dot per seat, colored by party
//!
//! Each chamber is drawn as its grid shape, filled column by column in
//! seat order. The majority seat gets the marker glyph and blinks.

use crate::tui::state::TuiState;
use legislation_application::DisplayConfig;
use legislation_domain::{ChamberLayout, SeatColor};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub fn seat_color(color: SeatColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Lines for one chamber: title, grid rows, optional legend.
pub fn chamber_lines(layout: &ChamberLayout, display: &DisplayConfig) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        layout.title(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if layout.is_empty() {
        lines.push(Line::from(Span::styled(
            "(no seats)",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    let rows = layout.shape.rows;
    for row in 0..rows {
        let mut spans = Vec::with_capacity(layout.shape.cols as usize * 2);
        for col in 0..layout.shape.cols {
            let index = (col * rows + row) as usize;
            let Some(seat) = layout.seats.get(index) else {
                continue;
            };
            if col > 0 {
                spans.push(Span::raw(" "));
            }

            let mut style = Style::default().fg(seat_color(seat.color));
            if seat.is_majority && display.show_marker {
                style = style.add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK);
            }
            spans.push(Span::styled(
                display.glyph_for(seat.is_majority).to_string(),
                style,
            ));
        }
        lines.push(Line::from(spans));
    }

    if display.show_legend {
        let mut spans = Vec::new();
        for entry in &layout.legend {
            if !spans.is_empty() {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled("■ ", Style::default().fg(seat_color(entry.color))));
            spans.push(Span::raw(format!("{} {}", entry.party, entry.members)));
        }
        lines.push(Line::from(spans));
    }

    lines
}

pub struct ChambersWidget<'a> {
    state: &'a TuiState,
}

impl<'a> ChambersWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for ChambersWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Chambers ");

        let mut lines: Vec<Line> = Vec::new();
        for layout in self.state.layouts.iter().skip(self.state.scroll) {
            if !lines.is_empty() {
                lines.push(Line::raw(""));
            }
            lines.extend(chamber_lines(layout, &self.state.display));
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "No parties yet. Press e to open the editor.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
