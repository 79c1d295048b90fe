//! Text placement inside fixed-size boxes.
//!
//! The painter anchors text at its baseline. The placer shifts the anchor so
//! the text top sits on the requested point, applies vertical alignment for
//! the whole block once, then paints line by line when horizontal alignment
//! needs measured widths.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{DrawingBackend, PaintOptions, PlacementOptions, TextContent};
use crate::error::Result;
use crate::model::{Alignment, Padding, VerticalAlignment};

/// Vertical advance between stacked lines, as a multiple of the font size.
pub const FONT_ROW_RATIO: f64 = 1.15;

/// Wrap width used for justified text when none is configured.
pub const DEFAULT_JUSTIFY_WIDTH: f64 = 100.0;

/// Computes baseline-correct coordinates and drives the painter.
#[derive(Debug, Clone)]
pub struct TextPlacer {
    line_split: Regex,
}

impl TextPlacer {
    /// Create a new placer.
    pub fn new() -> Self {
        Self {
            line_split: Regex::new(r"\r\n|\r|\n").expect("line split regex is valid"),
        }
    }

    /// Place `text` with its box anchor at `(x, y)`.
    ///
    /// Paint calls happen in line order. Backend failures propagate.
    pub fn place<B: DrawingBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &TextContent,
        x: f64,
        y: f64,
        options: &PlacementOptions,
    ) -> Result<()> {
        let font_size = backend.font_size() / backend.scale_factor();
        let row_height = font_size * FONT_ROW_RATIO;

        let lines = options.splits_lines().then(|| self.split_lines(text));
        let line_count = lines.as_ref().map_or(1, |l| l.len().max(1)) as f64;

        // Align the top
        let mut y = y + font_size * (2.0 - FONT_ROW_RATIO);
        match options.valign {
            VerticalAlignment::Middle => y -= (line_count / 2.0) * row_height,
            VerticalAlignment::Bottom => y -= line_count * row_height,
            VerticalAlignment::Top => {}
        }

        if let Some(lines) = lines.filter(|_| options.halign.needs_measurement()) {
            let align_size = match options.halign {
                Alignment::Center => font_size * 0.5,
                _ => font_size,
            };
            for line in lines {
                let line_x = x - backend.string_unit_width(&line) * align_size;
                backend.paint_text(&TextContent::Single(line), line_x, y, None)?;
                y += row_height;
            }
            return Ok(());
        }

        if options.halign == Alignment::Justify {
            let max_width = options
                .max_width
                .filter(|w| *w != 0.0 && !w.is_nan())
                .unwrap_or(DEFAULT_JUSTIFY_WIDTH);
            backend.paint_text(text, x, y, Some(&PaintOptions::justify(max_width)))
        } else {
            backend.paint_text(text, x, y, None)
        }
    }

    /// Place `text` inside a cell box, deriving the anchor from alignment
    /// and padding.
    ///
    /// Justified text wraps at the box's inner width unless a max width
    /// is configured.
    pub fn place_in_box<B: DrawingBackend + ?Sized>(
        &self,
        backend: &mut B,
        text: &TextContent,
        cell_box: &CellBox,
        options: &PlacementOptions,
    ) -> Result<()> {
        let (x, y) = cell_box.text_anchor(options.halign, options.valign);
        let mut options = *options;
        if options.max_width.is_none() {
            options.max_width = Some(cell_box.inner_width());
        }
        self.place(backend, text, x, y, &options)
    }

    /// Split text into lines; pre-split lines are used as given.
    fn split_lines(&self, text: &TextContent) -> Vec<String> {
        match text {
            TextContent::Single(s) => self.line_split.split(s).map(str::to_string).collect(),
            TextContent::Lines(lines) => lines.clone(),
        }
    }
}

impl Default for TextPlacer {
    fn default() -> Self {
        Self::new()
    }
}

/// A cell's outer box in document units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CellBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl CellBox {
    /// Create a box without padding.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            padding: Padding::default(),
        }
    }

    /// Set padding and return self.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Width available to text.
    pub fn inner_width(&self) -> f64 {
        self.width - self.padding.horizontal()
    }

    /// Anchor point for text with the given alignment.
    pub fn text_anchor(&self, halign: Alignment, valign: VerticalAlignment) -> (f64, f64) {
        let x = match halign {
            Alignment::Left | Alignment::Justify => self.x + self.padding.left,
            Alignment::Center => self.x + self.width / 2.0,
            Alignment::Right => self.x + self.width - self.padding.right,
        };
        let y = match valign {
            VerticalAlignment::Top => self.y + self.padding.top,
            VerticalAlignment::Middle => self.y + self.height / 2.0,
            VerticalAlignment::Bottom => self.y + self.height - self.padding.bottom,
        };
        (x, y)
    }
}
