//! Drawing backend abstraction layer.
//!
//! Provides a trait-based interface for the font metrics and text painting
//! that text placement needs, isolating the concrete PDF writer from the
//! alignment math.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Text handed to the placer or the painter: one string, or pre-split lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextContent {
    Single(String),
    Lines(Vec<String>),
}

impl TextContent {
    /// Check if there is no text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            TextContent::Single(s) => s.is_empty(),
            TextContent::Lines(lines) => lines.iter().all(String::is_empty),
        }
    }
}

impl Default for TextContent {
    fn default() -> Self {
        TextContent::Single(String::new())
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        TextContent::Single(text.to_string())
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        TextContent::Single(text)
    }
}

impl From<Vec<String>> for TextContent {
    fn from(lines: Vec<String>) -> Self {
        TextContent::Lines(lines)
    }
}

impl From<Vec<&str>> for TextContent {
    fn from(lines: Vec<&str>) -> Self {
        TextContent::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

/// Alignment modes the painter implements natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintAlign {
    Justify,
}

/// Options forwarded to the paint primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintOptions {
    /// Wrap width in document units
    pub max_width: Option<f64>,
    /// Native alignment mode
    pub align: Option<PaintAlign>,
}

impl PaintOptions {
    /// Native justification within `max_width`.
    pub fn justify(max_width: f64) -> Self {
        Self {
            max_width: Some(max_width),
            align: Some(PaintAlign::Justify),
        }
    }
}

/// Abstract interface for a text-drawing document.
///
/// Coordinates and widths are in document units; the font size is in
/// device units and converts to document units through the scale factor.
pub trait DrawingBackend {
    /// Device units per document unit.
    fn scale_factor(&self) -> f64;

    /// Current font size in device units.
    fn font_size(&self) -> f64;

    /// Width of `text` in font-size units (multiply by the font size).
    ///
    /// Must not change backend state.
    fn string_unit_width(&self, text: &str) -> f64;

    /// Paint text with its baseline at `(x, y)`.
    fn paint_text(
        &mut self,
        text: &TextContent,
        x: f64,
        y: f64,
        options: Option<&PaintOptions>,
    ) -> Result<()>;
}

impl<B: DrawingBackend + ?Sized> DrawingBackend for &mut B {
    fn scale_factor(&self) -> f64 {
        (**self).scale_factor()
    }

    fn font_size(&self) -> f64 {
        (**self).font_size()
    }

    fn string_unit_width(&self, text: &str) -> f64 {
        (**self).string_unit_width(text)
    }

    fn paint_text(
        &mut self,
        text: &TextContent,
        x: f64,
        y: f64,
        options: Option<&PaintOptions>,
    ) -> Result<()> {
        (**self).paint_text(text, x, y, options)
    }
}
