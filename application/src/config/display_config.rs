//! Display configuration shared by the console renderer and the TUI.

use serde::{Deserialize, Serialize};

/// Controls how seat grids are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Glyph drawn for an ordinary seat.
    pub seat_glyph: char,
    /// Glyph drawn for the majority seat.
    pub marker_glyph: char,
    /// Highlight the majority seat at all.
    pub show_marker: bool,
    /// Print party totals under each grid.
    pub show_legend: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            seat_glyph: '●',
            marker_glyph: '◉',
            show_marker: true,
            show_legend: true,
        }
    }
}

impl DisplayConfig {
    /// Glyph for a seat, taking the marker setting into account.
    pub fn glyph_for(&self, is_majority: bool) -> char {
        if is_majority && self.show_marker {
            self.marker_glyph
        } else {
            self.seat_glyph
        }
    }

    pub fn without_marker(mut self) -> Self {
        self.show_marker = false;
        self
    }
}
