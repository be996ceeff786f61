use colored::{ColoredString, Colorize};
use tabled::builder::Builder;
use tabled::settings::object::Segment;
use tabled::settings::{Alignment, Style};

use crate::grid::{Emphasis, RowLayout};

/* ============================= TYPES ============================= */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub styles: Vec<Emphasis>,
}

/// Left-aligned, bordered text table with per-cell emphasis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    header: Option<Vec<String>>,
    rows: Vec<TableRow>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(header: Vec<String>) -> Self {
        Self { header: Some(header), rows: Vec::new() }
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Append a row with one style per cell. Missing styles are Neutral and
    /// surplus styles are dropped.
    pub fn push_styled(&mut self, cells: Vec<String>, mut styles: Vec<Emphasis>) {
        styles.resize(cells.len(), Emphasis::Neutral);
        self.rows.push(TableRow { cells, styles });
    }

    pub fn push_plain(&mut self, cells: Vec<String>) {
        self.push_styled(cells, Vec::new());
    }

    /* ============================= RENDER ============================= */

    /// Cells are painted before layout; tabled measures them without the
    /// escape codes.
    pub fn render(&self) -> String {
        if self.header.is_none() && self.rows.is_empty() {
            return String::new();
        }

        let mut builder = Builder::default();
        if let Some(header) = &self.header {
            builder.push_record(header.iter().cloned());
        }
        for row in &self.rows {
            builder.push_record(
                row.cells
                    .iter()
                    .zip(&row.styles)
                    .enumerate()
                    .map(|(column, (text, style))| paint(text, *style, column).to_string()),
            );
        }

        let mut table = builder.build();
        table
            .with(Style::ascii())
            .modify(Segment::all(), Alignment::left());

        format!("{table}\n")
    }
}

/* ============================= STYLING ============================= */

/// Terminal styling for an emphasis tag. Never changes the text.
pub fn paint(text: &str, emphasis: Emphasis, column: usize) -> ColoredString {
    if text.is_empty() {
        return text.normal();
    }
    match emphasis {
        Emphasis::Neutral => text.normal(),
        Emphasis::Warning => text.yellow(),
        Emphasis::Success => text.green(),
        Emphasis::Danger if column == RowLayout::NAME_COLUMN => text.on_red(),
        Emphasis::Danger => text.red(),
    }
}

/* ============================= TESTS ============================= */
