//! Computed style declarations for a single element.

use std::collections::BTreeMap;

use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{ParserOptions, StyleAttribute};

/// Mapping from CSS property name to its computed value.
///
/// Names are stored lowercase; values are trimmed and stripped of
/// `!important`. Inline declarations are parsed with `lightningcss` and stored
/// in its serialization. The accessor decides how much of the cascade went
/// into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    properties: BTreeMap<String, String>,
}

impl ComputedStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an inline `style` attribute value.
    pub fn from_inline(declarations: &str) -> Self {
        let mut style = Self::new();
        style.merge_inline(declarations);
        style
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, name: &str, value: &str) {
        let name = name.trim().to_ascii_lowercase();
        let value = strip_important(value.trim());
        if name.is_empty() || value.is_empty() {
            return;
        }
        self.properties.insert(name, value.to_string());
    }

    /// Apply `name: value; ...` declarations on top of the current ones.
    ///
    /// Invalid declarations are skipped. `!important` declarations win over
    /// normal ones regardless of order.
    pub fn merge_inline(&mut self, declarations: &str) {
        let options = ParserOptions {
            error_recovery: true,
            ..ParserOptions::default()
        };
        let attribute = match StyleAttribute::parse(declarations, options) {
            Ok(attribute) => attribute,
            Err(e) => {
                log::debug!("Style attribute '{}' failed to parse: {:?}", declarations, e);
                return;
            }
        };

        let block = &attribute.declarations;
        for property in block
            .declarations
            .iter()
            .chain(block.important_declarations.iter())
        {
            match property.value_to_css_string(PrinterOptions::default()) {
                Ok(value) => self.set(property.property_id().name(), &value),
                Err(e) => log::debug!("Skipping unprintable declaration: {:?}", e),
            }
        }
    }

    /// Get a property value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Check if `display` computes to `none`.
    pub fn is_display_none(&self) -> bool {
        self.get("display")
            .is_some_and(|v| v.eq_ignore_ascii_case("none"))
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over declarations in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Drop a trailing `!important` (any case).
fn strip_important(value: &str) -> &str {
    match value.rfind('!') {
        Some(bang) if value[bang + 1..].trim().eq_ignore_ascii_case("important") => {
            value[..bang].trim_end()
        }
        _ => value,
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for ComputedStyle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Self::new();
        for (name, value) in iter {
            style.set(name.as_ref(), value.as_ref());
        }
        style
    }
}
