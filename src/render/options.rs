//! Text placement options.

use crate::model::{Alignment, StyleMap, VerticalAlignment};

/// How text is aligned inside its box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlacementOptions {
    /// Horizontal alignment
    pub halign: Alignment,

    /// Vertical alignment
    pub valign: VerticalAlignment,

    /// Wrap width for justified text (`None` = placer default)
    pub max_width: Option<f64>,
}

impl PlacementOptions {
    /// Create new placement options with defaults (left, top).
    pub fn new() -> Self {
        Self::default()
    }

    /// Alignment taken from resolved cell styles, defaults elsewhere.
    pub fn from_styles(styles: &StyleMap) -> Self {
        Self {
            halign: styles.halign().unwrap_or_default(),
            valign: styles.valign().unwrap_or_default(),
            max_width: None,
        }
    }

    /// Set horizontal alignment.
    pub fn with_halign(mut self, halign: Alignment) -> Self {
        self.halign = halign;
        self
    }

    /// Set vertical alignment.
    pub fn with_valign(mut self, valign: VerticalAlignment) -> Self {
        self.valign = valign;
        self
    }

    /// Set the justify wrap width.
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Whether text must be split into explicit lines before placement.
    pub fn splits_lines(&self) -> bool {
        matches!(
            self.valign,
            VerticalAlignment::Middle | VerticalAlignment::Bottom
        ) || self.halign.needs_measurement()
    }
}
