//! Console output formatter for chamber layouts

use colored::Colorize;
use legislation_application::DisplayConfig;
use legislation_domain::{ChamberLayout, GridShape};
use serde::Serialize;

/// JSON document produced by `render --format json`
#[derive(Debug, Serialize)]
struct RenderReport<'a> {
    country: Option<&'a str>,
    chambers: &'a [ChamberLayout],
}

/// Formats chamber layouts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every chamber as a colored seat grid
    pub fn format(
        country: Option<&str>,
        layouts: &[ChamberLayout],
        display: &DisplayConfig,
    ) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(country.unwrap_or("No country selected")));
        output.push('\n');

        if layouts.is_empty() {
            output.push_str(&format!("\n{}\n", "No chambers".dimmed()));
        }

        for layout in layouts {
            output.push('\n');
            output.push_str(&Self::format_chamber(layout, display));
        }

        output
    }

    /// Format one chamber: heading, grid rows, legend
    pub fn format_chamber(layout: &ChamberLayout, display: &DisplayConfig) -> String {
        let mut output = format!("{}\n", layout.title().cyan().bold());

        if layout.is_empty() {
            output.push_str(&format!("{}\n", "(no seats)".dimmed()));
            return output;
        }

        let rows = layout.shape.rows;
        for row in 0..rows {
            let cells: Vec<String> = (0..layout.shape.cols)
                .filter_map(|col| layout.seats.get((col * rows + row) as usize))
                .map(|seat| {
                    let is_marker = seat.is_majority && display.show_marker;
                    let glyph = display
                        .glyph_for(seat.is_majority)
                        .to_string()
                        .truecolor(seat.color.r, seat.color.g, seat.color.b);
                    if is_marker {
                        glyph.bold().to_string()
                    } else {
                        glyph.to_string()
                    }
                })
                .collect();
            output.push_str(&cells.join(" "));
            output.push('\n');
        }

        if display.show_legend {
            let entries: Vec<String> = layout
                .legend
                .iter()
                .map(|entry| {
                    format!(
                        "{} {}: {}",
                        "■".truecolor(entry.color.r, entry.color.g, entry.color.b),
                        entry.party,
                        entry.members
                    )
                })
                .collect();
            output.push_str(&entries.join("   "));
            output.push('\n');
        }

        output
    }

    /// Format as JSON
    pub fn format_json(country: Option<&str>, layouts: &[ChamberLayout]) -> String {
        let report = RenderReport {
            country,
            chambers: layouts,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the grid shape chosen for a seat total
    pub fn format_shape(total: u32, shape: GridShape) -> String {
        if shape.is_empty() {
            return format!("{} seats: {}", total, "(no seats)".dimmed());
        }
        format!(
            "{} seats: {} ({} rows × {} cols)",
            total,
            shape.to_string().bold(),
            shape.rows,
            shape.cols
        )
    }

    /// Format a list of country names
    pub fn format_countries(countries: &[String]) -> String {
        let mut output = String::new();
        for name in countries {
            output.push_str(name);
            output.push('\n');
        }
        output.push_str(&format!("{}\n", format!("{} countries", countries.len()).dimmed()));
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
