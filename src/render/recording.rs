//! In-memory [`DrawingBackend`] that records paint calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{DrawingBackend, PaintOptions, TextContent};
use crate::error::Result;

/// One recorded call to the paint primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintCall {
    pub text: TextContent,
    pub x: f64,
    pub y: f64,
    pub options: Option<PaintOptions>,
}

/// Backend with fixed per-character unit widths that keeps every paint call.
///
/// Useful for previewing a layout as data, and for tests.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    scale_factor: f64,
    font_size: f64,
    default_width: f64,
    widths: HashMap<char, f64>,
    calls: Vec<PaintCall>,
    measurements: std::cell::Cell<usize>,
}

impl RecordingBackend {
    /// Create a backend with a device font size and scale factor.
    ///
    /// Every character is half an em wide until overridden.
    pub fn new(font_size: f64, scale_factor: f64) -> Self {
        Self {
            scale_factor,
            font_size,
            default_width: 0.5,
            widths: HashMap::new(),
            calls: Vec::new(),
            measurements: std::cell::Cell::new(0),
        }
    }

    /// Set the unit width of characters without an override.
    pub fn with_default_width(mut self, width: f64) -> Self {
        self.default_width = width;
        self
    }

    /// Override the unit width of one character.
    pub fn with_char_width(mut self, ch: char, width: f64) -> Self {
        self.widths.insert(ch, width);
        self
    }

    /// Change the current font size (device units).
    pub fn set_font_size(&mut self, font_size: f64) {
        self.font_size = font_size;
    }

    /// Paint calls so far, in order.
    pub fn calls(&self) -> &[PaintCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the backend empty.
    pub fn take_calls(&mut self) -> Vec<PaintCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of width measurements performed.
    pub fn measurement_count(&self) -> usize {
        self.measurements.get()
    }
}

impl DrawingBackend for RecordingBackend {
    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    fn font_size(&self) -> f64 {
        self.font_size
    }

    fn string_unit_width(&self, text: &str) -> f64 {
        self.measurements.set(self.measurements.get() + 1);
        text.chars()
            .map(|c| *self.widths.get(&c).unwrap_or(&self.default_width))
            .sum()
    }

    fn paint_text(
        &mut self,
        text: &TextContent,
        x: f64,
        y: f64,
        options: Option<&PaintOptions>,
    ) -> Result<()> {
        self.calls.push(PaintCall {
            text: text.clone(),
            x,
            y,
            options: options.copied(),
        });
        Ok(())
    }
}
