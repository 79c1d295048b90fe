//! Markdown rendering for extracted tables.

use crate::error::Result;
use crate::model::{Alignment, Cell, Row, TableModel};

/// Convert a table to a Markdown pipe table.
///
/// Head rows form the header block; without a head section the first row is
/// promoted. Column spans are padded with empty cells and short rows are
/// filled out to the grid width.
pub fn to_markdown(table: &TableModel) -> Result<String> {
    let renderer = MarkdownRenderer::new(table.column_count());
    Ok(renderer.render(table))
}

/// Markdown table renderer.
pub struct MarkdownRenderer {
    col_count: usize,
}

impl MarkdownRenderer {
    /// Create a renderer for a grid of `col_count` columns.
    pub fn new(col_count: usize) -> Self {
        Self { col_count }
    }

    /// Render a table to Markdown.
    pub fn render(&self, table: &TableModel) -> String {
        let mut output = String::new();
        if table.is_empty() || self.col_count == 0 {
            return output;
        }

        let rows: Vec<&Row> = table.rows().map(|(_, row)| row).collect();
        let header_rows = table.head.len().max(1);

        for (i, row) in rows.iter().enumerate() {
            self.render_row(&mut output, row);

            // Separator after the last header row
            if i + 1 == header_rows {
                self.render_separator(&mut output, row);
            }
        }

        output.trim_end().to_string()
    }

    fn render_row(&self, output: &mut String, row: &Row) {
        output.push('|');
        let mut written = 0;
        for cell in &row.cells {
            let content = escape_markdown(cell.content.trim()).replace('\n', "<br>");
            output.push_str(&format!(" {} |", content));
            for _ in 1..cell.col_span {
                output.push_str("  |");
            }
            written += cell.col_span as usize;
        }
        for _ in written..self.col_count {
            output.push_str("  |");
        }
        output.push('\n');
    }

    fn render_separator(&self, output: &mut String, row: &Row) {
        output.push('|');
        let markers = row
            .cells
            .iter()
            .flat_map(|cell| std::iter::repeat(cell_alignment(cell)).take(cell.col_span as usize))
            .chain(std::iter::repeat(Alignment::Left))
            .take(self.col_count);
        for alignment in markers {
            let align_marker = match alignment {
                Alignment::Left | Alignment::Justify => " --- |",
                Alignment::Center => " :---: |",
                Alignment::Right => " ---: |",
            };
            output.push_str(align_marker);
        }
        output.push('\n');
    }
}

fn cell_alignment(cell: &Cell) -> Alignment {
    cell.styles
        .as_ref()
        .and_then(|s| s.halign())
        .unwrap_or_default()
}

/// Escape characters that would break a pipe table or read as inline markup.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Section, SourceRef, StyleMap, StyleProperty, StyleValue};

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("a|b"), "a\\|b");
    }

    #[test]
    fn test_head_becomes_header() {
        let mut table = TableModel::new();
        table.push(Section::Head, Row::from_strings(["Name", "Qty"]));
        table.push(Section::Body, Row::from_strings(["Apples", "3"]));

        let md = to_markdown(&table).unwrap();
        assert_eq!(md, "| Name | Qty |\n| --- | --- |\n| Apples | 3 |");
    }

    #[test]
    fn test_first_row_promoted_without_head() {
        let mut table = TableModel::new();
        table.push(Section::Body, Row::from_strings(["a", "b"]));
        table.push(Section::Body, Row::from_strings(["c", "d"]));

        let md = to_markdown(&table).unwrap();
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "| --- | --- |");
    }

    #[test]
    fn test_spans_line_breaks_and_alignment() {
        let mut styles = StyleMap::new();
        styles.insert(StyleProperty::HAlign, StyleValue::HAlign(Alignment::Center));

        let mut table = TableModel::new();
        table.push(
            Section::Head,
            Row::new(
                vec![Cell::text("Wide").with_spans(1, 2).with_styles(styles)],
                SourceRef::row(0),
            ),
        );
        table.push(Section::Body, Row::from_strings(["one\ntwo"]));

        let md = to_markdown(&table).unwrap();
        assert_eq!(
            md,
            "| Wide |  |\n| :---: | :---: |\n| one<br>two |  |"
        );
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(to_markdown(&TableModel::new()).unwrap(), "");
    }
}
