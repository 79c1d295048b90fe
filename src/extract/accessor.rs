//! Document access abstraction layer.
//!
//! Provides a trait-based interface for the DOM operations table extraction
//! needs, isolating the concrete document library from the extraction logic.

use crate::error::Result;
use crate::model::Section;
use crate::style::ComputedStyle;

/// Abstract interface for table-structured document access.
///
/// Implementations provide locator resolution, row and cell enumeration,
/// computed style lookup and detached cell markup, without exposing any
/// concrete DOM types beyond the opaque `Node` handle.
pub trait DocumentAccessor {
    /// Handle to an element (table, row or cell).
    type Node: Copy;

    /// Resolve a locator to the first matching table.
    ///
    /// `Ok(None)` means nothing table-like matched.
    fn resolve(&self, locator: &str) -> Result<Option<Self::Node>>;

    /// All rows of a table in document order, whatever section holds them.
    fn rows(&self, table: Self::Node) -> Vec<Self::Node>;

    /// Section of a row, from its immediate structural parent.
    fn row_section(&self, row: Self::Node) -> Section;

    /// Cells of a row in order.
    fn cells(&self, row: Self::Node) -> Vec<Self::Node>;

    /// Authored `(row_span, col_span)` of a cell, unclamped.
    fn spans(&self, cell: Self::Node) -> (i64, i64);

    /// Computed style declarations of an element.
    fn computed_style(&self, element: Self::Node) -> ComputedStyle;

    /// Check if an element's computed `display` is `none`.
    fn is_display_none(&self, element: Self::Node) -> bool {
        self.computed_style(element).is_display_none()
    }

    /// Serialized inner markup of a cell, detached from the document.
    fn cell_markup(&self, cell: Self::Node) -> String;

    /// Rendered text of a markup fragment.
    fn flatten_markup(&self, markup: &str) -> String;
}
