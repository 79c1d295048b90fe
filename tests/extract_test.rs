//! Integration tests for HTML table extraction.

use untable::extract::NoopHook;
use untable::{
    extract_html, extract_html_with_options, CollectingReporter, Diagnostic, DocumentAccessor,
    ExtractOptions, FontStyle, HtmlDocument, Padding, Section, SourceRef, StyleProperty,
    TableExtractor, TableSource,
};
use untable::{Alignment, VerticalAlignment};

const INVOICE: &str = r#"
<html><body>
  <table id="invoice">
    <thead>
      <tr><th>Item</th><th>Qty</th></tr>
    </thead>
    <tbody>
      <tr><td>Apples</td><td>3</td></tr>
      <tr><td>Pears</td><td>5</td></tr>
    </tbody>
    <tfoot>
      <tr><td>Total</td><td>8</td></tr>
    </tfoot>
  </table>
</body></html>"#;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ==================== Sections ====================

#[test]
fn test_rows_grouped_by_section() {
    let table = extract_html(INVOICE, "#invoice").unwrap();

    assert_eq!(table.head.len(), 1);
    assert_eq!(table.body.len(), 2);
    assert_eq!(table.foot.len(), 1);
    assert_eq!(table.head[0].cells[0].content, "Item");
    assert_eq!(table.body[1].cells[0].content, "Pears");
    assert_eq!(table.foot[0].cells[1].content, "8");
}

#[test]
fn test_rows_without_group_are_body() {
    let html = "<table><tr><td>a</td></tr><tr><td>b</td></tr></table>";
    let table = extract_html(html, "table").unwrap();

    assert!(table.head.is_empty());
    assert!(table.foot.is_empty());
    assert_eq!(table.body.len(), 2);
}

#[test]
fn test_section_follows_parent_not_position() {
    // A footer authored before the body still lands in foot
    let html = r#"<table>
        <tfoot><tr><td>f</td></tr></tfoot>
        <tbody><tr><td>b</td></tr></tbody>
    </table>"#;
    let table = extract_html(html, "table").unwrap();

    assert_eq!(table.foot[0].cells[0].content, "f");
    assert_eq!(table.body[0].cells[0].content, "b");
    let order: Vec<Section> = table.rows().map(|(s, _)| s).collect();
    assert_eq!(order, vec![Section::Body, Section::Foot]);
}

// ==================== Content ====================

#[test]
fn test_line_breaks_and_whitespace() {
    let html = "<table><tr><td>A<br>  B\n\nC</td></tr></table>";
    let table = extract_html(html, "table").unwrap();
    assert_eq!(table.body[0].cells[0].content, "A\nB C");
}

#[test]
fn test_break_variants() {
    let html = "<table><tr><td> one <BR/> two <br /> three </td></tr></table>";
    let table = extract_html(html, "table").unwrap();
    assert_eq!(table.body[0].cells[0].content, "one\ntwo\nthree");
}

#[test]
fn test_markup_is_flattened() {
    let html = "<table><tr><td><b>Bold</b> and <a href='#'>link</a> &amp; more</td></tr></table>";
    let table = extract_html(html, "table").unwrap();
    assert_eq!(table.body[0].cells[0].content, "Bold and link & more");
}

#[test]
fn test_empty_cell_is_kept() {
    let html = "<table><tr><td></td><td>x</td></tr></table>";
    let table = extract_html(html, "table").unwrap();

    assert_eq!(table.body[0].cells.len(), 2);
    assert_eq!(table.body[0].cells[0].content, "");
}

// ==================== Spans ====================

#[test]
fn test_spans_are_clamped() {
    let html = r#"<table><tr>
        <td rowspan="0">a</td>
        <td colspan="-3">b</td>
        <td colspan="3" rowspan="2">c</td>
        <td colspan="wide">d</td>
    </tr></table>"#;
    let table = extract_html(html, "table").unwrap();
    let cells = &table.body[0].cells;

    assert_eq!((cells[0].row_span, cells[0].col_span), (1, 1));
    assert_eq!((cells[1].row_span, cells[1].col_span), (1, 1));
    assert_eq!((cells[2].row_span, cells[2].col_span), (2, 3));
    assert_eq!((cells[3].row_span, cells[3].col_span), (1, 1));
    assert_eq!(table.column_count(), 6);
    assert!(table.has_merged_cells());
}

#[test]
fn test_spans_use_html_integer_rules() {
    let html = r#"<table><tr>
        <td colspan="3.5">a</td>
        <td colspan="2abc">b</td>
        <td colspan="2000" rowspan="70000">c</td>
    </tr></table>"#;
    let table = extract_html(html, "table").unwrap();
    let spans: Vec<(u32, u32)> = table.body[0]
        .cells
        .iter()
        .map(|c| (c.row_span, c.col_span))
        .collect();

    assert_eq!(spans, vec![(1, 3), (1, 2), (65534, 1000)]);
    assert_eq!(table.column_count(), 1005);
}

#[test]
fn test_huge_colspan_is_capped() {
    let html = r#"<table><tr><td colspan="50000000">x</td></tr></table>"#;
    let table = extract_html(html, "table").unwrap();
    assert_eq!(table.body[0].cells[0].col_span, 1000);

    let markdown = untable::render::to_markdown(&table).unwrap();
    assert!(markdown.len() < 20_000);
}

// ==================== Visibility ====================

const HIDDEN: &str = r#"<table>
    <tr><td style="display: none">secret</td><td>shown</td></tr>
    <tr><td style="display:none">gone</td></tr>
    <tr style="display: none"><td>row hidden</td></tr>
</table>"#;

#[test]
fn test_hidden_cells_dropped_by_default() {
    let table = extract_html(HIDDEN, "table").unwrap();

    assert_eq!(table.body[0].cells.len(), 1);
    assert_eq!(table.body[0].cells[0].content, "shown");
    // Hidden cells still count toward the source index
    assert_eq!(table.body[0].cells[0].source, SourceRef::cell(0, 1));
    // A row whose cells are all hidden disappears
    assert!(table
        .body
        .iter()
        .all(|r| r.cells.iter().all(|c| c.content != "gone")));
}

#[test]
fn test_hidden_row_kept_without_style_resolution() {
    let table = extract_html(HIDDEN, "table").unwrap();
    assert_eq!(table.body.len(), 2);
    assert_eq!(table.body[1].cells[0].content, "row hidden");
}

#[test]
fn test_hidden_row_dropped_with_style_resolution() {
    let options = ExtractOptions::new().resolve_styles();
    let table = extract_html_with_options(HIDDEN, "table", options).unwrap();

    assert_eq!(table.body.len(), 1);
    assert_eq!(table.body[0].cells[0].content, "shown");
}

#[test]
fn test_include_hidden_keeps_everything() {
    let options = ExtractOptions::new().include_hidden().resolve_styles();
    let table = extract_html_with_options(HIDDEN, "table", options).unwrap();

    assert_eq!(table.body.len(), 3);
    assert_eq!(table.body[0].cells.len(), 2);
    assert_eq!(table.body[0].cells[0].content, "secret");
}

#[test]
fn test_hidden_with_comment_or_uppercase_important() {
    let html = r#"<table><tr>
        <td style="display:none/*x*/">ghost</td>
        <td style="display: none !IMPORTANT">shade</td>
        <td>a</td>
    </tr></table>"#;
    let table = extract_html(html, "table").unwrap();
    let contents: Vec<&str> = table.body[0]
        .cells
        .iter()
        .map(|c| c.content.as_str())
        .collect();

    assert_eq!(contents, vec!["a"]);
}

#[test]
fn test_hidden_attribute() {
    let html = "<table><tr><td hidden>h</td><td>v</td></tr></table>";
    let table = extract_html(html, "table").unwrap();
    assert_eq!(table.body[0].cells.len(), 1);
}

// ==================== Styles ====================

#[test]
fn test_styles_absent_by_default() {
    let table = extract_html(INVOICE, "table").unwrap();
    assert!(table.rows().all(|(_, r)| r.cells.iter().all(|c| c.styles.is_none())));
}

#[test]
fn test_styles_resolved() {
    let html = r#"<table><tr>
        <td style="text-align: right; vertical-align: middle; font-size: 16px;
                   padding: 4px; color: #ff0000; background-color: rgb(0, 0, 255)">x</td>
    </tr></table>"#;
    let options = ExtractOptions::new().resolve_styles();
    let table = extract_html_with_options(html, "table", options).unwrap();
    let styles = table.body[0].cells[0].styles.as_ref().unwrap();

    assert_eq!(styles.halign(), Some(Alignment::Right));
    assert_eq!(styles.valign(), Some(VerticalAlignment::Middle));
    assert_close(styles.font_size().unwrap(), 12.0);
    let padding = styles.padding().unwrap();
    assert_close(padding.top, 3.0);
    assert_close(padding.left, 3.0);
    assert_eq!(styles.text_color().map(|c| (c.r, c.g, c.b)), Some((255, 0, 0)));
    assert_eq!(styles.fill_color().map(|c| (c.r, c.g, c.b)), Some((0, 0, 255)));
}

#[test]
fn test_scale_factor_applies_to_lengths() {
    let html = r#"<table><tr><td style="padding: 8px">x</td></tr></table>"#;
    let options = ExtractOptions::new().resolve_styles().with_scale_factor(2.0);
    let table = extract_html_with_options(html, "table", options).unwrap();
    let padding = table.body[0].cells[0]
        .styles
        .as_ref()
        .and_then(|s| s.padding())
        .unwrap();

    assert_close(padding.top, 3.0);
    assert_ne!(padding, Padding::default());
}

#[test]
fn test_header_cell_defaults() {
    let options = ExtractOptions::new().resolve_styles();
    let table = extract_html_with_options(INVOICE, "table", options).unwrap();
    let styles = table.head[0].cells[0].styles.as_ref().unwrap();

    assert_eq!(styles.font_style(), Some(FontStyle::Bold));
    assert_eq!(styles.halign(), Some(Alignment::Center));
}

#[test]
fn test_cell_property_allow_list() {
    let html = r#"<table><tr><td style="text-align: center; font-size: 12px">x</td></tr></table>"#;
    let options = ExtractOptions::new()
        .resolve_styles()
        .with_cell_properties(vec![StyleProperty::FontSize]);
    let table = extract_html_with_options(html, "table", options).unwrap();
    let styles = table.body[0].cells[0].styles.as_ref().unwrap();

    assert_eq!(styles.len(), 1);
    assert!(styles.contains(StyleProperty::FontSize));
    assert!(styles.halign().is_none());
}

#[test]
fn test_invalid_scale_factor_is_an_error() {
    let options = ExtractOptions::new().resolve_styles().with_scale_factor(0.0);
    assert!(extract_html_with_options(INVOICE, "table", options).is_err());
}

// ==================== Sources and diagnostics ====================

#[test]
fn test_not_found_reports_diagnostic() {
    let doc = HtmlDocument::parse(INVOICE);
    let mut reporter = CollectingReporter::new();
    let table = TableExtractor::default()
        .extract_with(
            &doc.accessor(),
            TableSource::Locator("#nope"),
            &mut reporter,
            &mut NoopHook,
        )
        .unwrap();

    assert!(table.is_empty());
    assert_eq!(
        reporter.diagnostics(),
        &[Diagnostic::TableNotFound {
            locator: "#nope".to_string()
        }]
    );
    assert_eq!(
        reporter.diagnostics()[0].to_string(),
        "Html table could not be found with input: #nope"
    );
}

#[test]
fn test_selector_matching_non_table() {
    let table = extract_html(INVOICE, "td").unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_extract_from_node() {
    let doc = HtmlDocument::parse(INVOICE);
    let accessor = doc.accessor();
    let node = accessor.resolve("table").unwrap().unwrap();

    let from_node = TableExtractor::default()
        .extract(&accessor, TableSource::Node(node))
        .unwrap();
    let from_locator = TableExtractor::default()
        .extract(&accessor, "table".into())
        .unwrap();
    assert_eq!(from_node, from_locator);
}

#[test]
fn test_extraction_is_repeatable() {
    let doc = HtmlDocument::parse(INVOICE);
    let extractor = TableExtractor::new(ExtractOptions::new().resolve_styles());

    let first = extractor.extract(&doc.accessor(), "table".into()).unwrap();
    let second = extractor.extract(&doc.accessor(), "table".into()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_first_table_wins() {
    let html = r#"
        <table class="t"><tr><td>first</td></tr></table>
        <table class="t"><tr><td>second</td></tr></table>"#;
    let table = extract_html(html, ".t").unwrap();
    assert_eq!(table.body[0].cells[0].content, "first");
}
