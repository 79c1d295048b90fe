//! [`DocumentAccessor`] backed by a parsed HTML document (`scraper`).

use scraper::{ElementRef, Html, Selector};

use super::DocumentAccessor;
use crate::error::{Error, Result};
use crate::model::Section;
use crate::style::ComputedStyle;

/// Largest `colspan` the DOM reports.
const MAX_COL_SPAN: i64 = 1000;

/// Largest `rowspan` the DOM reports.
const MAX_ROW_SPAN: i64 = 65534;

/// HTML's rules for parsing non-negative integers: leading whitespace, an
/// optional `+`, then the leading run of digits. Anything after is ignored.
fn parse_non_negative(value: &str) -> Option<i64> {
    let value = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let value = value.strip_prefix('+').unwrap_or(value);
    let digits = value.bytes().take_while(u8::is_ascii_digit);

    let mut parsed = None;
    for digit in digits {
        let n: i64 = parsed.unwrap_or(0);
        parsed = Some(n.saturating_mul(10).saturating_add(i64::from(digit - b'0')));
    }
    parsed
}

/// A parsed HTML document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Accessor over this document.
    pub fn accessor(&self) -> HtmlAccessor<'_> {
        HtmlAccessor { html: &self.html }
    }

    /// Direct access to the underlying `scraper::Html`.
    pub fn raw_html(&self) -> &Html {
        &self.html
    }
}

/// Concrete [`DocumentAccessor`] over a borrowed `scraper::Html`.
#[derive(Clone, Copy)]
pub struct HtmlAccessor<'a> {
    html: &'a Html,
}

impl<'a> HtmlAccessor<'a> {
    /// Wrap an already parsed document.
    pub fn new(html: &'a Html) -> Self {
        Self { html }
    }
}

impl<'a> DocumentAccessor for HtmlAccessor<'a> {
    type Node = ElementRef<'a>;

    fn resolve(&self, locator: &str) -> Result<Option<Self::Node>> {
        let selector = Selector::parse(locator).map_err(|e| {
            log::debug!("Selector '{}' failed to parse: {:?}", locator, e);
            Error::InvalidSelector(locator.to_string())
        })?;

        let html: &'a Html = self.html;
        Ok(html
            .select(&selector)
            .next()
            .filter(|el| el.value().name() == "table"))
    }

    fn rows(&self, table: Self::Node) -> Vec<Self::Node> {
        let mut rows = Vec::new();
        for child in table.children().filter_map(ElementRef::wrap) {
            match child.value().name() {
                "tr" => rows.push(child),
                "thead" | "tbody" | "tfoot" => rows.extend(
                    child
                        .children()
                        .filter_map(ElementRef::wrap)
                        .filter(|e| e.value().name() == "tr"),
                ),
                _ => {}
            }
        }
        rows
    }

    fn row_section(&self, row: Self::Node) -> Section {
        let parent = row.parent().and_then(ElementRef::wrap);
        match parent.map(|p| p.value().name()) {
            Some("thead") => Section::Head,
            Some("tfoot") => Section::Foot,
            _ => Section::Body,
        }
    }

    fn cells(&self, row: Self::Node) -> Vec<Self::Node> {
        row.children()
            .filter_map(ElementRef::wrap)
            .filter(|e| matches!(e.value().name(), "td" | "th"))
            .collect()
    }

    fn spans(&self, cell: Self::Node) -> (i64, i64) {
        let attr = |name: &str| cell.value().attr(name).and_then(parse_non_negative);

        let row_span = attr("rowspan").unwrap_or(1).min(MAX_ROW_SPAN);
        let col_span = match attr("colspan") {
            None | Some(0) => 1,
            Some(span) => span.min(MAX_COL_SPAN),
        };
        (row_span, col_span)
    }

    fn computed_style(&self, element: Self::Node) -> ComputedStyle {
        let value = element.value();
        let mut style = ComputedStyle::new();

        // User-agent defaults for header cells
        if value.name() == "th" {
            style.set("font-weight", "bold");
            style.set("text-align", "center");
        }

        if let Some(align) = value.attr("align") {
            style.set("text-align", align);
        }
        if let Some(valign) = value.attr("valign") {
            style.set("vertical-align", valign);
        }
        if let Some(bgcolor) = value.attr("bgcolor") {
            style.set("background-color", bgcolor);
        }
        if value.attr("hidden").is_some() {
            style.set("display", "none");
        }
        if let Some(inline) = value.attr("style") {
            style.merge_inline(inline);
        }
        style
    }

    fn cell_markup(&self, cell: Self::Node) -> String {
        cell.inner_html()
    }

    fn flatten_markup(&self, markup: &str) -> String {
        let fragment = Html::parse_fragment(markup);
        fragment.root_element().text().collect()
    }
}
