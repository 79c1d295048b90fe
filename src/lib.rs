//! # untable
//!
//! Table model extraction and aligned text placement for table-to-PDF layout.
//!
//! This library reads a table out of a structured document (HTML through
//! [`scraper`]) into a [`TableModel`] of head, body and foot rows, and places
//! cell text inside fixed-size boxes on a drawing backend with horizontal and
//! vertical alignment.
//!
//! ## Quick Start
//!
//! ```
//! use untable::extract_html;
//!
//! fn main() -> untable::Result<()> {
//!     let html = r#"<table>
//!         <thead><tr><th>Item</th><th>Qty</th></tr></thead>
//!         <tbody><tr><td>Apples</td><td>3</td></tr></tbody>
//!     </table>"#;
//!
//!     let table = extract_html(html, "table")?;
//!     assert_eq!(table.head.len(), 1);
//!     assert_eq!(table.body[0].cells[0].content, "Apples");
//!     Ok(())
//! }
//! ```
//!
//! ## Placing text
//!
//! ```
//! use untable::render::{PlacementOptions, RecordingBackend, TextPlacer};
//! use untable::Alignment;
//!
//! let mut backend = RecordingBackend::new(10.0, 1.0);
//! let options = PlacementOptions::new().with_halign(Alignment::Center);
//! TextPlacer::new()
//!     .place(&mut backend, &"two\nlines".into(), 50.0, 10.0, &options)
//!     .unwrap();
//! assert_eq!(backend.calls().len(), 2);
//! ```
//!
//! ## Features
//!
//! - **Section grouping**: rows under `thead`/`tfoot` land in head/foot
//! - **Visibility filtering**: hidden cells and rows are dropped by default
//! - **Style resolution**: computed CSS mapped to layout style properties
//! - **Extraction hooks**: per-cell and per-row callbacks that can rewrite or skip
//! - **Aligned placement**: baseline-correct left/center/right/justify and top/middle/bottom

pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{
    CollectingReporter, Diagnostic, DiagnosticReporter, DocumentAccessor, ExtractHook,
    ExtractOptions, HookAction, HtmlAccessor, HtmlDocument, TableExtractor, TableSource,
};
pub use model::{
    Alignment, Cell, Color, FontStyle, Padding, Row, Section, SourceRef, StyleMap, StyleProperty,
    StyleValue, TableModel, VerticalAlignment,
};
pub use render::{
    CellBox, DrawingBackend, JsonFormat, PaintOptions, PlacementOptions, TextContent, TextPlacer,
};
pub use style::{ComputedStyle, CssStyleResolver, StyleResolver};

/// Extract a table from an HTML string.
///
/// # Arguments
///
/// * `html` - HTML source
/// * `locator` - CSS selector matching the table element
///
/// # Returns
///
/// The extracted model. A selector that matches no table yields an empty
/// model and a logged warning; an unparsable selector is an error.
///
/// # Example
///
/// ```
/// use untable::extract_html;
///
/// let table = extract_html("<table><tr><td>a</td></tr></table>", "table").unwrap();
/// assert_eq!(table.row_count(), 1);
/// ```
pub fn extract_html(html: &str, locator: &str) -> Result<TableModel> {
    extract_html_with_options(html, locator, ExtractOptions::default())
}

/// Extract a table from an HTML string with custom options.
///
/// # Example
///
/// ```
/// use untable::{extract_html_with_options, ExtractOptions};
///
/// let html = r#"<table><tr><td style="display: none">x</td><td>y</td></tr></table>"#;
/// let options = ExtractOptions::new().include_hidden();
/// let table = extract_html_with_options(html, "table", options).unwrap();
/// assert_eq!(table.body[0].cells.len(), 2);
/// ```
pub fn extract_html_with_options(
    html: &str,
    locator: &str,
    options: ExtractOptions,
) -> Result<TableModel> {
    let document = HtmlDocument::parse(html);
    TableExtractor::new(options).extract(&document.accessor(), TableSource::Locator(locator))
}

/// Builder for extracting and rendering HTML tables.
///
/// # Example
///
/// ```
/// use untable::Untable;
///
/// let markdown = Untable::new()
///     .with_styles()
///     .with_scale_factor(1.0)
///     .extract_html("<table><tr><th>A</th></tr><tr><td>1</td></tr></table>", "table")?
///     .to_markdown()?;
/// assert!(markdown.starts_with("| A |"));
/// # Ok::<(), untable::Error>(())
/// ```
pub struct Untable {
    options: ExtractOptions,
}

impl Untable {
    /// Create a new Untable builder.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Keep hidden cells and rows.
    pub fn include_hidden(mut self) -> Self {
        self.options = self.options.include_hidden();
        self
    }

    /// Resolve computed styles into per-cell style maps.
    pub fn with_styles(mut self) -> Self {
        self.options = self.options.resolve_styles();
        self
    }

    /// Set the document scale factor used for length conversion.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.options = self.options.with_scale_factor(scale_factor);
        self
    }

    /// Restrict the resolved cell style properties.
    pub fn with_cell_properties(mut self, properties: Vec<StyleProperty>) -> Self {
        self.options = self.options.with_cell_properties(properties);
        self
    }

    /// Extract a table from HTML and return a result wrapper.
    pub fn extract_html(self, html: &str, locator: &str) -> Result<UntableResult> {
        let table = extract_html_with_options(html, locator, self.options)?;
        Ok(UntableResult { table })
    }
}

impl Default for Untable {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of extracting a table.
pub struct UntableResult {
    /// The extracted table
    pub table: TableModel,
}

impl UntableResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.table)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.table)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.table, format)
    }

    /// Get the table.
    pub fn table(&self) -> &TableModel {
        &self.table
    }
}
