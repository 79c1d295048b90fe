//! Style resolver trait and the CSS-backed implementation.

use crate::error::{Error, Result};
use crate::model::{
    Alignment, FontStyle, Padding, StyleMap, StyleProperty, StyleValue, VerticalAlignment,
};

use super::{ComputedStyle, CssValueParser, PX_PER_PT};

/// Turns an element's computed style into layout parameters.
///
/// `properties` restricts the output; `None` means every property the
/// resolver supports. Lengths are converted to document units with
/// `scale_factor`.
pub trait StyleResolver {
    fn resolve(
        &self,
        style: &ComputedStyle,
        scale_factor: f64,
        properties: Option<&[StyleProperty]>,
    ) -> Result<StyleMap>;
}

/// Resolver for standard CSS property names.
///
/// Values it cannot parse are left out of the map.
#[derive(Debug, Clone, Default)]
pub struct CssStyleResolver {
    parser: CssValueParser,
}

impl CssStyleResolver {
    /// Create a new resolver.
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve_property(
        &self,
        property: StyleProperty,
        style: &ComputedStyle,
        scale_factor: f64,
    ) -> Option<StyleValue> {
        let to_units = |px: f64| px / PX_PER_PT / scale_factor;

        match property {
            StyleProperty::CellPadding => self
                .padding_px(style)
                .map(|p| Padding {
                    top: to_units(p.top),
                    right: to_units(p.right),
                    bottom: to_units(p.bottom),
                    left: to_units(p.left),
                })
                .map(StyleValue::Padding),
            StyleProperty::LineWidth => style
                .get("border-top-width")
                .and_then(|v| self.parser.length_px(v))
                .or_else(|| {
                    style
                        .get("border-width")
                        .and_then(|v| self.parser.first_length_px(v))
                })
                .or_else(|| {
                    style
                        .get("border")
                        .and_then(|v| self.parser.first_length_px(v))
                })
                .map(|px| StyleValue::Length(to_units(px))),
            StyleProperty::LineColor => style
                .get("border-top-color")
                .and_then(|v| self.parser.color(v))
                .or_else(|| {
                    style
                        .get("border-color")
                        .and_then(|v| self.parser.first_color(v))
                })
                .or_else(|| style.get("border").and_then(|v| self.parser.first_color(v)))
                .map(StyleValue::Color),
            StyleProperty::FillColor => style
                .get("background-color")
                .and_then(|v| self.parser.color(v))
                .map(StyleValue::Color),
            StyleProperty::TextColor => style
                .get("color")
                .and_then(|v| self.parser.color(v))
                .map(StyleValue::Color),
            StyleProperty::FontStyle => {
                let weight = style.get("font-weight");
                let slant = style.get("font-style");
                if weight.is_none() && slant.is_none() {
                    return None;
                }
                let bold = weight.is_some_and(is_bold_weight);
                let italic = slant.is_some_and(|s| {
                    s.eq_ignore_ascii_case("italic") || s.eq_ignore_ascii_case("oblique")
                });
                Some(StyleValue::FontStyle(FontStyle::from_flags(bold, italic)))
            }
            StyleProperty::HAlign => style
                .get("text-align")
                .and_then(parse_text_align)
                .map(StyleValue::HAlign),
            StyleProperty::VAlign => style
                .get("vertical-align")
                .and_then(parse_vertical_align)
                .map(StyleValue::VAlign),
            StyleProperty::FontSize => style
                .get("font-size")
                .and_then(|v| self.parser.length_px(v))
                .map(|px| StyleValue::Length(px / PX_PER_PT)),
            StyleProperty::MinCellHeight => style
                .get("height")
                .and_then(|v| self.parser.length_px(v))
                .map(|px| StyleValue::Length(to_units(px))),
        }
    }

    /// Padding in pixels: shorthand first, longhands on top.
    fn padding_px(&self, style: &ComputedStyle) -> Option<Padding> {
        let shorthand = style.get("padding").and_then(|v| self.parser.box_px(v));
        let side = |name: &str| style.get(name).and_then(|v| self.parser.length_px(v));
        let (top, right, bottom, left) = (
            side("padding-top"),
            side("padding-right"),
            side("padding-bottom"),
            side("padding-left"),
        );

        if shorthand.is_none() && [top, right, bottom, left].iter().all(Option::is_none) {
            return None;
        }

        let base = shorthand.unwrap_or_default();
        Some(Padding {
            top: top.unwrap_or(base.top),
            right: right.unwrap_or(base.right),
            bottom: bottom.unwrap_or(base.bottom),
            left: left.unwrap_or(base.left),
        })
    }
}

impl StyleResolver for CssStyleResolver {
    fn resolve(
        &self,
        style: &ComputedStyle,
        scale_factor: f64,
        properties: Option<&[StyleProperty]>,
    ) -> Result<StyleMap> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(Error::Style(format!("invalid scale factor {}", scale_factor)));
        }

        let properties = properties.unwrap_or(&StyleProperty::ALL);
        let mut map = StyleMap::new();
        for &property in properties {
            if let Some(value) = self.resolve_property(property, style, scale_factor) {
                map.insert(property, value);
            }
        }
        Ok(map)
    }
}

fn is_bold_weight(weight: &str) -> bool {
    let weight = weight.trim();
    if weight.eq_ignore_ascii_case("bold") || weight.eq_ignore_ascii_case("bolder") {
        return true;
    }
    weight.parse::<u32>().is_ok_and(|w| w >= 700)
}

fn parse_text_align(value: &str) -> Option<Alignment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "left" | "start" => Some(Alignment::Left),
        "center" => Some(Alignment::Center),
        "right" | "end" => Some(Alignment::Right),
        "justify" => Some(Alignment::Justify),
        _ => None,
    }
}

fn parse_vertical_align(value: &str) -> Option<VerticalAlignment> {
    match value.trim().to_ascii_lowercase().as_str() {
        "top" | "text-top" => Some(VerticalAlignment::Top),
        "middle" => Some(VerticalAlignment::Middle),
        "bottom" | "text-bottom" => Some(VerticalAlignment::Bottom),
        _ => None,
    }
}
