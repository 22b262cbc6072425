//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Widget for rendering the key binding overlay
#[derive(Default)]
pub struct HelpWidget;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "View",
        &[
            ("e", "Open the party editor"),
            ("c", "Choose a country"),
            ("j/k", "Scroll chambers"),
            ("?", "Toggle this help"),
            ("q", "Quit"),
        ],
    ),
    (
        "Editor",
        &[
            ("j/k", "Select party"),
            ("h/l Tab", "Select column"),
            ("Enter", "Edit cell"),
            ("a", "Add party"),
            ("d", "Remove party"),
            ("Esc", "Back to view"),
        ],
    ),
    (
        "Editing a cell",
        &[
            ("Enter", "Apply value"),
            ("Esc", "Discard value"),
        ],
    ),
];

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled("Keyboard Shortcuts", heading)),
            Line::from(""),
        ];

        for (title, keys) in SECTIONS {
            lines.push(Line::from(Span::styled(format!("{title}:"), heading)));
            for (key, description) in keys.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
                    Span::raw(*description),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("  Ctrl+C   ", Style::default().fg(Color::Yellow)),
            Span::raw("Quit from anywhere"),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(Self::build_help_text())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_bindings() {
        let area = Rect::new(0, 0, 50, 30);
        let mut buf = Buffer::empty(area);
        HelpWidget::new().render(area, &mut buf);

        let content = buf.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(content.contains("Keyboard Shortcuts"));
        assert!(content.contains("Add party"));
        assert!(content.contains("Choose a country"));
    }
}
