//! Extraction options and configuration.

use crate::model::StyleProperty;

/// Options for extracting a table.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Keep cells and rows whose computed display is `none`
    pub include_hidden: bool,

    /// Resolve computed styles into per-cell style maps
    pub resolve_styles: bool,

    /// Document units per point, used to convert CSS lengths
    pub scale_factor: f64,

    /// Properties resolved for each row
    pub row_style_properties: Vec<StyleProperty>,

    /// Properties resolved for each cell (`None` = every supported property)
    pub cell_style_properties: Option<Vec<StyleProperty>>,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or exclude hidden content.
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Include hidden content.
    pub fn include_hidden(self) -> Self {
        self.with_hidden(true)
    }

    /// Enable or disable style resolution.
    pub fn with_styles(mut self, resolve: bool) -> Self {
        self.resolve_styles = resolve;
        self
    }

    /// Enable style resolution.
    pub fn resolve_styles(self) -> Self {
        self.with_styles(true)
    }

    /// Set the scale factor (document units per point).
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the properties resolved for rows.
    pub fn with_row_properties(mut self, properties: Vec<StyleProperty>) -> Self {
        self.row_style_properties = properties;
        self
    }

    /// Restrict the properties resolved for cells.
    pub fn with_cell_properties(mut self, properties: Vec<StyleProperty>) -> Self {
        self.cell_style_properties = Some(properties);
        self
    }

    /// Add a property to the row allow-list.
    pub fn with_row_property(mut self, property: StyleProperty) -> Self {
        if !self.row_style_properties.contains(&property) {
            self.row_style_properties.push(property);
        }
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_hidden: false,
            resolve_styles: false,
            scale_factor: 1.0,
            row_style_properties: StyleProperty::ROW_DEFAULTS.to_vec(),
            cell_style_properties: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_options_builder() {
        let options = ExtractOptions::new()
            .include_hidden()
            .resolve_styles()
            .with_scale_factor(72.0 / 25.4)
            .with_cell_properties(vec![StyleProperty::HAlign]);

        assert!(options.include_hidden);
        assert!(options.resolve_styles);
        assert_eq!(options.scale_factor, 72.0 / 25.4);
        assert_eq!(options.cell_style_properties, Some(vec![StyleProperty::HAlign]));
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert!(!options.include_hidden);
        assert!(!options.resolve_styles);
        assert_eq!(options.scale_factor, 1.0);
        assert_eq!(options.row_style_properties.len(), 3);
        assert!(options.cell_style_properties.is_none());
    }

    #[test]
    fn test_row_property_extension_is_deduplicated() {
        let options = ExtractOptions::new()
            .with_row_property(StyleProperty::FillColor)
            .with_row_property(StyleProperty::LineWidth);
        assert_eq!(options.row_style_properties.len(), 4);
    }
}
