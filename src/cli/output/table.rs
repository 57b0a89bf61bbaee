//! Table output formatting for CLI commands
//!
//! Renders breed lookups with comfy-table, honoring `NO_COLOR` and dumb terminals.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use crate::cli::models::LookupOutcome;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
        }
    }

    /// Create a new table formatter with explicit color handling
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format breed lookups as a table
    pub fn format_lookups(&self, outcomes: &[LookupOutcome]) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Breed").add_attribute(Attribute::Bold),
            Cell::new("Sub-breeds").add_attribute(Attribute::Bold),
            Cell::new("Count").add_attribute(Attribute::Bold),
        ]);

        for outcome in outcomes {
            let row = match (&outcome.sub_breeds, &outcome.error) {
                (Some(subs), _) if subs.is_empty() => vec![
                    Cell::new(&outcome.breed),
                    self.colored(Cell::new("(none)"), Color::DarkGrey),
                    Cell::new(0),
                ],
                (Some(subs), _) => vec![
                    Cell::new(&outcome.breed),
                    Cell::new(subs.join("\n")),
                    Cell::new(subs.len()),
                ],
                (None, error) => vec![
                    Cell::new(&outcome.breed),
                    self.colored(
                        Cell::new(error.as_deref().unwrap_or("not found")),
                        Color::Red,
                    ),
                    Cell::new("-"),
                ],
            };
            table.add_row(row);
        }

        table.to_string()
    }

    fn colored(&self, cell: Cell, color: Color) -> Cell {
        if self.use_colors {
            cell.fg(color)
        } else {
            cell
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    !matches!(env::var("TERM").as_deref(), Ok("dumb"))
}
