//! TUI widgets — ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Chambers (flex) ───────────────────────────────┤
//! ├── Editor (45%, only while editing) ──────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod chambers;
pub mod editor;
pub mod header;
pub mod help;
pub mod picker;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub chambers: Rect,
    /// Party table region; `None` while the editor is closed
    pub editor: Option<Rect>,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect, show_editor: bool) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let (chambers, editor) = if show_editor {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(vertical[1]);
            (split[0], Some(split[1]))
        } else {
            (vertical[1], None)
        };

        Self {
            header: vertical[0],
            chambers,
            editor,
            status_bar: vertical[2],
        }
    }

    /// Centered overlay rectangle for the help dialog and country picker
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}
