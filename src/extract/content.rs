//! Cell content normalization: markup to plain text with explicit line breaks.

use regex::Regex;

use super::DocumentAccessor;

/// Converts cell markup into layout text.
///
/// Markup whitespace is collapsed the way a browser would render it, then
/// every `<br>` becomes a single `\n` so the text can be laid out as
/// explicit lines.
#[derive(Debug, Clone)]
pub struct ContentNormalizer {
    spaces: Regex,
    line_break: Regex,
}

impl ContentNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self {
            spaces: Regex::new(r" {2,}").expect("space run regex is valid"),
            line_break: Regex::new(r"(?i)<br\s*/?>").expect("line break regex is valid"),
        }
    }

    /// Rewrite markup: collapse newlines and space runs, then turn line
    /// break tags into trimmed `\n`-joined fragments.
    pub fn normalize_markup(&self, markup: &str) -> String {
        let single_line = markup.replace(['\r', '\n'], " ");
        let collapsed = self.spaces.replace_all(&single_line, " ");

        self.line_break
            .split(&collapsed)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Normalized text of a cell. Works on a detached copy of the markup.
    pub fn normalize<A: DocumentAccessor>(&self, accessor: &A, cell: A::Node) -> String {
        let markup = accessor.cell_markup(cell);
        accessor.flatten_markup(&self.normalize_markup(&markup))
    }
}

impl Default for ContentNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
