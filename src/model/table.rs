//! Table types.

use serde::{Deserialize, Serialize};

use super::StyleMap;

/// Structural grouping of a table's rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Rows nested under a header group (`<thead>`)
    Head,
    /// Rows under a body group or directly under the table
    #[default]
    Body,
    /// Rows nested under a footer group (`<tfoot>`)
    Foot,
}

impl Section {
    /// All sections in layout order.
    pub const ALL: [Section; 3] = [Section::Head, Section::Body, Section::Foot];
}

/// Back-reference to the source node a row or cell was extracted from.
///
/// `row` indexes the table's rows in document order (hidden rows included);
/// `cell` indexes the row's cells (hidden cells included). The extractor never
/// reads it; it exists for hooks and downstream callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRef {
    pub row: usize,
    pub cell: Option<usize>,
}

impl SourceRef {
    /// Reference to a row.
    pub fn row(row: usize) -> Self {
        Self { row, cell: None }
    }

    /// Reference to a cell within a row.
    pub fn cell(row: usize, cell: usize) -> Self {
        Self {
            row,
            cell: Some(cell),
        }
    }
}

/// An extracted table, split into head, body and foot sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableModel {
    pub head: Vec<Row>,
    pub body: Vec<Row>,
    pub foot: Vec<Row>,
}

impl TableModel {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of one section.
    pub fn section(&self, section: Section) -> &[Row] {
        match section {
            Section::Head => &self.head,
            Section::Body => &self.body,
            Section::Foot => &self.foot,
        }
    }

    /// Mutable rows of one section.
    pub fn section_mut(&mut self, section: Section) -> &mut Vec<Row> {
        match section {
            Section::Head => &mut self.head,
            Section::Body => &mut self.body,
            Section::Foot => &mut self.foot,
        }
    }

    /// Append a row to a section.
    pub fn push(&mut self, section: Section, row: Row) {
        self.section_mut(section).push(row);
    }

    /// Iterate over all rows, head first, foot last.
    pub fn rows(&self) -> impl Iterator<Item = (Section, &Row)> {
        Section::ALL
            .into_iter()
            .flat_map(move |s| self.section(s).iter().map(move |r| (s, r)))
    }

    /// Get the total number of rows across sections.
    pub fn row_count(&self) -> usize {
        self.head.len() + self.body.len() + self.foot.len()
    }

    /// Get the number of grid columns (widest row, counting column spans).
    pub fn column_count(&self) -> usize {
        self.rows()
            .map(|(_, row)| row.cells.iter().map(|c| c.col_span as usize).sum())
            .max()
            .unwrap_or(0)
    }

    /// Check if every section is empty.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows()
            .map(|(_, row)| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the table has complex structure (merged cells).
    pub fn has_merged_cells(&self) -> bool {
        self.rows()
            .flat_map(|(_, r)| &r.cells)
            .any(Cell::is_merged)
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Visible cells in source order
    pub cells: Vec<Cell>,

    /// Originating row
    pub source: SourceRef,
}

impl Row {
    /// Create a new row with cells.
    pub fn new(cells: Vec<Cell>, source: SourceRef) -> Self {
        Self { cells, source }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            values.into_iter().map(Cell::text).collect(),
            SourceRef::default(),
        )
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.content.replace('\n', " "))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Number of rows this cell spans (at least 1)
    pub row_span: u32,

    /// Number of columns this cell spans (at least 1)
    pub col_span: u32,

    /// Resolved styles, present only when style resolution was requested
    pub styles: Option<StyleMap>,

    /// Plain text; explicit line breaks are `\n`
    pub content: String,

    /// Originating cell
    pub source: SourceRef,
}

impl Cell {
    /// Create a new cell with text content.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            row_span: 1,
            col_span: 1,
            styles: None,
            content: content.into(),
            source: SourceRef::default(),
        }
    }

    /// Set spans from authored values; anything below 1 becomes 1.
    pub fn with_spans(mut self, row_span: i64, col_span: i64) -> Self {
        self.row_span = clamp_span(row_span);
        self.col_span = clamp_span(col_span);
        self
    }

    /// Set resolved styles and return self.
    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Set the source reference and return self.
    pub fn with_source(mut self, source: SourceRef) -> Self {
        self.source = source;
        self
    }

    /// Content split into its explicit lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }
}

/// Clamp an authored span to the valid range.
pub(crate) fn clamp_span(span: i64) -> u32 {
    if span < 1 {
        1
    } else {
        u32::try_from(span).unwrap_or(u32::MAX)
    }
}
