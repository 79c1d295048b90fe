//! CSS value parsing: colors, lengths, box shorthands.

use regex::Regex;

use crate::model::{Color, Padding};

/// CSS pixels per PDF point (96 dpi vs 72 dpi).
pub const PX_PER_PT: f64 = 96.0 / 72.0;

/// Parser for the subset of CSS values relevant to cell layout.
///
/// Lengths come out in CSS pixels; callers convert to document units.
#[derive(Debug, Clone)]
pub struct CssValueParser {
    length_regex: Regex,
    rgb_regex: Regex,
    hex_regex: Regex,
}

impl CssValueParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self {
            length_regex: Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))\s*(px|pt)?$")
                .expect("length regex is valid"),
            rgb_regex: Regex::new(
                r"^rgba?\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
            )
            .expect("rgb regex is valid"),
            hex_regex: Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
                .expect("hex regex is valid"),
        }
    }

    /// Parse a length into CSS pixels.
    ///
    /// Accepts `px`, `pt`, unitless numbers and the border-width keywords.
    pub fn length_px(&self, value: &str) -> Option<f64> {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "thin" => return Some(1.0),
            "medium" => return Some(3.0),
            "thick" => return Some(5.0),
            _ => {}
        }
        let caps = self.length_regex.captures(&value)?;
        let number: f64 = caps[1].parse().ok()?;
        match caps.get(2).map(|m| m.as_str()) {
            Some("pt") => Some(number * PX_PER_PT),
            _ => Some(number),
        }
    }

    /// Parse a color. Transparent colors yield `None`.
    pub fn color(&self, value: &str) -> Option<Color> {
        let value = value.trim().to_ascii_lowercase();

        if let Some(caps) = self.hex_regex.captures(&value) {
            let hex = &caps[1];
            // Short forms repeat each digit
            let (width, scale) = if hex.len() <= 4 { (1, 17) } else { (2, 1) };
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i * width..(i + 1) * width], 16)
                    .ok()
                    .map(|v| v * scale)
            };
            if hex.len() == 4 || hex.len() == 8 {
                if channel(3)? == 0 {
                    return None;
                }
            }
            return Some(Color::rgb(channel(0)?, channel(1)?, channel(2)?));
        }

        if let Some(caps) = self.rgb_regex.captures(&value) {
            if let Some(alpha) = caps.get(4) {
                let alpha: f64 = alpha.as_str().parse().ok()?;
                if alpha == 0.0 {
                    return None;
                }
            }
            let channel = |i: usize| {
                caps[i]
                    .parse::<f64>()
                    .ok()
                    .map(|v| v.round().clamp(0.0, 255.0) as u8)
            };
            return Some(Color::rgb(channel(1)?, channel(2)?, channel(3)?));
        }

        named_color(&value)
    }

    /// Parse a 1-4 value box shorthand (`padding`, `margin`) into pixels.
    pub fn box_px(&self, value: &str) -> Option<Padding> {
        let values: Vec<f64> = split_tokens(value)
            .iter()
            .map(|t| self.length_px(t))
            .collect::<Option<Vec<_>>>()?;

        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return None,
        };
        Some(Padding {
            top,
            right,
            bottom,
            left,
        })
    }

    /// First token of a shorthand that parses as a length.
    pub fn first_length_px(&self, value: &str) -> Option<f64> {
        split_tokens(value).iter().find_map(|t| self.length_px(t))
    }

    /// First token of a shorthand that parses as a color.
    pub fn first_color(&self, value: &str) -> Option<Color> {
        split_tokens(value).iter().find_map(|t| self.color(t))
    }
}

impl Default for CssValueParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a value on whitespace, keeping parenthesized groups together.
fn split_tokens(value: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in value.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::rgb(0, 0, 0),
        "white" => Color::rgb(255, 255, 255),
        "red" => Color::rgb(255, 0, 0),
        "green" => Color::rgb(0, 128, 0),
        "blue" => Color::rgb(0, 0, 255),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "silver" => Color::rgb(192, 192, 192),
        "maroon" => Color::rgb(128, 0, 0),
        "navy" => Color::rgb(0, 0, 128),
        "yellow" => Color::rgb(255, 255, 0),
        "orange" => Color::rgb(255, 165, 0),
        "purple" => Color::rgb(128, 0, 128),
        "teal" => Color::rgb(0, 128, 128),
        "aqua" | "cyan" => Color::rgb(0, 255, 255),
        "fuchsia" | "magenta" => Color::rgb(255, 0, 255),
        "lime" => Color::rgb(0, 255, 0),
        "olive" => Color::rgb(128, 128, 0),
        "indigo" => Color::rgb(75, 0, 130),
        "sienna" => Color::rgb(160, 82, 45),
        "brown" => Color::rgb(165, 42, 42),
        "peru" => Color::rgb(205, 133, 63),
        "tan" => Color::rgb(210, 180, 140),
        "orchid" => Color::rgb(218, 112, 214),
        "plum" => Color::rgb(221, 160, 221),
        "violet" => Color::rgb(238, 130, 238),
        "khaki" => Color::rgb(240, 230, 140),
        "azure" => Color::rgb(240, 255, 255),
        "wheat" => Color::rgb(245, 222, 179),
        "beige" => Color::rgb(245, 245, 220),
        "salmon" => Color::rgb(250, 128, 114),
        "linen" => Color::rgb(250, 240, 230),
        "tomato" => Color::rgb(255, 99, 71),
        "coral" => Color::rgb(255, 127, 80),
        "pink" => Color::rgb(255, 192, 203),
        "gold" => Color::rgb(255, 215, 0),
        "bisque" => Color::rgb(255, 228, 196),
        "snow" => Color::rgb(255, 250, 250),
        "ivory" => Color::rgb(255, 255, 240),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        let parser = CssValueParser::new();
        assert_eq!(parser.length_px("12px"), Some(12.0));
        assert_eq!(parser.length_px("4"), Some(4.0));
        assert_eq!(parser.length_px(".5px"), Some(0.5));
        assert!((parser.length_px("9pt").unwrap() - 12.0).abs() < 1e-9);
        assert_eq!(parser.length_px("thin"), Some(1.0));
        assert_eq!(parser.length_px("2em"), None);
        assert_eq!(parser.length_px("solid"), None);
    }

    #[test]
    fn test_hex_colors() {
        let parser = CssValueParser::new();
        assert_eq!(parser.color("#fff"), Some(Color::WHITE));
        assert_eq!(parser.color("#1A2b3C"), Some(Color::rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(parser.color("#12345"), None);
    }

    #[test]
    fn test_hex_alpha_and_short_names() {
        let parser = CssValueParser::new();
        assert_eq!(parser.color("#f008"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(parser.color("#0000"), None);
        assert_eq!(parser.color("#00ff0080"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(parser.color("#00000000"), None);
        assert_eq!(parser.color("tan"), Some(Color::rgb(210, 180, 140)));
        assert_eq!(parser.color("red"), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_rgb_colors() {
        let parser = CssValueParser::new();
        assert_eq!(parser.color("rgb(10, 20, 30)"), Some(Color::rgb(10, 20, 30)));
        assert_eq!(parser.color("rgba(10,20,30,0.5)"), Some(Color::rgb(10, 20, 30)));
        assert_eq!(parser.color("rgba(0, 0, 0, 0)"), None);
        assert_eq!(parser.color("transparent"), None);
        assert_eq!(parser.color("Navy"), Some(Color::rgb(0, 0, 128)));
    }

    #[test]
    fn test_box_shorthand() {
        let parser = CssValueParser::new();
        assert_eq!(parser.box_px("4px"), Some(Padding::uniform(4.0)));

        let p = parser.box_px("1px 2px").unwrap();
        assert_eq!((p.top, p.right, p.bottom, p.left), (1.0, 2.0, 1.0, 2.0));

        let p = parser.box_px("1px 2px 3px").unwrap();
        assert_eq!((p.top, p.right, p.bottom, p.left), (1.0, 2.0, 3.0, 2.0));

        let p = parser.box_px("1px 2px 3px 4px").unwrap();
        assert_eq!((p.top, p.right, p.bottom, p.left), (1.0, 2.0, 3.0, 4.0));

        assert_eq!(parser.box_px("1px 2px 3px 4px 5px"), None);
        assert_eq!(parser.box_px("auto"), None);
    }

    #[test]
    fn test_shorthand_tokens() {
        let parser = CssValueParser::new();
        let border = "1px solid rgb(255, 0, 0)";
        assert_eq!(parser.first_length_px(border), Some(1.0));
        assert_eq!(parser.first_color(border), Some(Color::rgb(255, 0, 0)));
    }
}
