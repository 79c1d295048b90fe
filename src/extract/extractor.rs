//! Table extraction: rows grouped into sections, visible cells normalized.
//!
//! The algorithm:
//!
//! 1. Resolve the source to a table (a locator miss is reported, not raised)
//! 2. Walk rows in document order; the row's parent decides its section
//! 3. Keep visible cells, clamp spans, normalize content, resolve styles
//! 4. Drop rows without visible cells (and hidden rows when styles are on)

use super::content::ContentNormalizer;
use super::diagnostic::{Diagnostic, DiagnosticReporter, LogReporter};
use super::hooks::{ExtractHook, NoopHook};
use super::{DocumentAccessor, ExtractOptions};
use crate::error::Result;
use crate::model::{clamp_span, Cell, Row, Section, SourceRef, TableModel};
use crate::style::{CssStyleResolver, StyleResolver};

/// What to extract: a locator to resolve, or a table handle.
#[derive(Debug, Clone, Copy)]
pub enum TableSource<'s, N> {
    /// Locator string (a CSS selector for HTML documents)
    Locator(&'s str),
    /// Table node obtained from the accessor
    Node(N),
}

impl<'s, N> From<&'s str> for TableSource<'s, N> {
    fn from(locator: &'s str) -> Self {
        TableSource::Locator(locator)
    }
}

/// Extracts a [`TableModel`] through a [`DocumentAccessor`].
///
/// Holds no state between calls; extracting twice from an unchanged
/// document yields equal models.
pub struct TableExtractor<R = CssStyleResolver> {
    options: ExtractOptions,
    resolver: R,
    normalizer: ContentNormalizer,
}

impl TableExtractor {
    /// Create an extractor with the CSS style resolver.
    pub fn new(options: ExtractOptions) -> Self {
        Self::with_resolver(options, CssStyleResolver::new())
    }
}

impl Default for TableExtractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}

impl<R: StyleResolver> TableExtractor<R> {
    /// Create an extractor with a custom style resolver.
    pub fn with_resolver(options: ExtractOptions, resolver: R) -> Self {
        Self {
            options,
            resolver,
            normalizer: ContentNormalizer::new(),
        }
    }

    /// The options this extractor runs with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract a table, logging diagnostics.
    pub fn extract<A: DocumentAccessor>(
        &self,
        accessor: &A,
        source: TableSource<'_, A::Node>,
    ) -> Result<TableModel> {
        self.extract_with(accessor, source, &mut LogReporter, &mut NoopHook)
    }

    /// Extract a table with an explicit diagnostic reporter and hook.
    ///
    /// Errors come only from the style resolver or the accessor's locator
    /// parsing; a table that cannot be found yields an empty model.
    pub fn extract_with<A: DocumentAccessor>(
        &self,
        accessor: &A,
        source: TableSource<'_, A::Node>,
        reporter: &mut dyn DiagnosticReporter,
        hook: &mut dyn ExtractHook,
    ) -> Result<TableModel> {
        let table = match source {
            TableSource::Node(node) => node,
            TableSource::Locator(locator) => match accessor.resolve(locator)? {
                Some(node) => node,
                None => {
                    reporter.report(Diagnostic::TableNotFound {
                        locator: locator.to_string(),
                    });
                    return Ok(TableModel::new());
                }
            },
        };

        let rows = accessor.rows(table);
        log::debug!("TableExtractor: {} source rows", rows.len());

        let mut model = TableModel::new();
        for (row_index, row_node) in rows.into_iter().enumerate() {
            let section = accessor.row_section(row_node);
            if let Some(row) = self.extract_row(accessor, row_node, row_index, section, hook)? {
                model.push(section, row);
            }
        }

        log::debug!(
            "TableExtractor: head={} body={} foot={}",
            model.head.len(),
            model.body.len(),
            model.foot.len()
        );
        Ok(model)
    }

    fn extract_row<A: DocumentAccessor>(
        &self,
        accessor: &A,
        row_node: A::Node,
        row_index: usize,
        section: Section,
        hook: &mut dyn ExtractHook,
    ) -> Result<Option<Row>> {
        let opts = &self.options;

        let row_styles = if opts.resolve_styles {
            Some(self.resolver.resolve(
                &accessor.computed_style(row_node),
                opts.scale_factor,
                Some(opts.row_style_properties.as_slice()),
            )?)
        } else {
            None
        };

        let mut cells = Vec::new();
        for (cell_index, cell_node) in accessor.cells(row_node).into_iter().enumerate() {
            if !opts.include_hidden && accessor.is_display_none(cell_node) {
                continue;
            }

            let styles = if opts.resolve_styles {
                Some(self.resolver.resolve(
                    &accessor.computed_style(cell_node),
                    opts.scale_factor,
                    opts.cell_style_properties.as_deref(),
                )?)
            } else {
                None
            };

            let (row_span, col_span) = accessor.spans(cell_node);
            let mut cell = Cell {
                row_span: clamp_span(row_span),
                col_span: clamp_span(col_span),
                styles,
                content: self.normalizer.normalize(accessor, cell_node),
                source: SourceRef::cell(row_index, cell_index),
            };

            if hook.visit_cell(section, &mut cell).should_skip() {
                continue;
            }
            cells.push(cell);
        }

        let row_hidden =
            opts.resolve_styles && !opts.include_hidden && accessor.is_display_none(row_node);
        if cells.is_empty() || row_hidden {
            log::debug!(
                "TableExtractor: dropping row {} (cells={}, hidden={})",
                row_index,
                cells.len(),
                row_hidden
            );
            return Ok(None);
        }

        let mut row = Row::new(cells, SourceRef::row(row_index));
        if hook
            .visit_row(section, &mut row, row_styles.as_ref())
            .should_skip()
            || row.is_empty()
        {
            return Ok(None);
        }
        Ok(Some(row))
    }
}
