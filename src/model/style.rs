//! Resolved cell style types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Alignment, VerticalAlignment};

/// A layout-relevant style property.
///
/// Style maps only ever contain properties from a caller-supplied allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    /// Inner spacing between the cell border and its text
    CellPadding,
    /// Border line width
    LineWidth,
    /// Border line color
    LineColor,
    /// Background fill color
    FillColor,
    /// Text color
    TextColor,
    /// Font weight/slant combination
    FontStyle,
    /// Horizontal text alignment
    HAlign,
    /// Vertical text alignment
    VAlign,
    /// Font size in points
    FontSize,
    /// Minimum cell height
    MinCellHeight,
}

impl StyleProperty {
    /// Every property the resolver understands.
    pub const ALL: [StyleProperty; 10] = [
        StyleProperty::CellPadding,
        StyleProperty::LineWidth,
        StyleProperty::LineColor,
        StyleProperty::FillColor,
        StyleProperty::TextColor,
        StyleProperty::FontStyle,
        StyleProperty::HAlign,
        StyleProperty::VAlign,
        StyleProperty::FontSize,
        StyleProperty::MinCellHeight,
    ];

    /// Properties resolved for rows: padding and border geometry.
    pub const ROW_DEFAULTS: [StyleProperty; 3] = [
        StyleProperty::CellPadding,
        StyleProperty::LineWidth,
        StyleProperty::LineColor,
    ];
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// Padding on the four sides of a cell, in document units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Same padding on every side.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Font weight and slant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Combine weight and slant flags.
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (true, true) => FontStyle::BoldItalic,
            (true, false) => FontStyle::Bold,
            (false, true) => FontStyle::Italic,
            (false, false) => FontStyle::Normal,
        }
    }
}

/// A resolved style value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StyleValue {
    /// A color
    Color(Color),
    /// A length in document units (or points for font size)
    Length(f64),
    /// Four-sided padding
    Padding(Padding),
    /// Font weight/slant
    FontStyle(FontStyle),
    /// Horizontal alignment
    HAlign(Alignment),
    /// Vertical alignment
    VAlign(VerticalAlignment),
}

/// Mapping from style property to resolved value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: BTreeMap<StyleProperty, StyleValue>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    pub fn insert(&mut self, property: StyleProperty, value: StyleValue) {
        self.entries.insert(property, value);
    }

    /// Get the value for a property.
    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.entries.get(&property)
    }

    /// Check if a property is present.
    pub fn contains(&self, property: StyleProperty) -> bool {
        self.entries.contains_key(&property)
    }

    /// Number of resolved properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no property was resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over properties in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleValue)> {
        self.entries.iter().map(|(p, v)| (*p, v))
    }

    /// Drop every property outside `allowed`.
    pub fn retain_only(&mut self, allowed: &[StyleProperty]) {
        self.entries.retain(|p, _| allowed.contains(p));
    }

    pub fn padding(&self) -> Option<Padding> {
        match self.get(StyleProperty::CellPadding)? {
            StyleValue::Padding(p) => Some(*p),
            StyleValue::Length(v) => Some(Padding::uniform(*v)),
            _ => None,
        }
    }

    pub fn line_width(&self) -> Option<f64> {
        self.length(StyleProperty::LineWidth)
    }

    pub fn line_color(&self) -> Option<Color> {
        self.color(StyleProperty::LineColor)
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.color(StyleProperty::FillColor)
    }

    pub fn text_color(&self) -> Option<Color> {
        self.color(StyleProperty::TextColor)
    }

    pub fn font_size(&self) -> Option<f64> {
        self.length(StyleProperty::FontSize)
    }

    pub fn min_cell_height(&self) -> Option<f64> {
        self.length(StyleProperty::MinCellHeight)
    }

    pub fn font_style(&self) -> Option<FontStyle> {
        match self.get(StyleProperty::FontStyle)? {
            StyleValue::FontStyle(s) => Some(*s),
            _ => None,
        }
    }

    pub fn halign(&self) -> Option<Alignment> {
        match self.get(StyleProperty::HAlign)? {
            StyleValue::HAlign(a) => Some(*a),
            _ => None,
        }
    }

    pub fn valign(&self) -> Option<VerticalAlignment> {
        match self.get(StyleProperty::VAlign)? {
            StyleValue::VAlign(a) => Some(*a),
            _ => None,
        }
    }

    fn length(&self, property: StyleProperty) -> Option<f64> {
        match self.get(property)? {
            StyleValue::Length(v) => Some(*v),
            _ => None,
        }
    }

    fn color(&self, property: StyleProperty) -> Option<Color> {
        match self.get(property)? {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }
}
