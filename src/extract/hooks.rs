//! Hooks for customizing extraction per row and per cell.
//!
//! Hooks see every extracted cell and row before it enters the model, along
//! with its [`SourceRef`](crate::model::SourceRef) back into the document.
//!
//! # Example
//!
//! ```
//! use untable::extract::hooks::{ExtractHook, HookAction};
//! use untable::model::{Cell, Section};
//!
//! struct UppercaseHeaders;
//!
//! impl ExtractHook for UppercaseHeaders {
//!     fn visit_cell(&mut self, section: Section, cell: &mut Cell) -> HookAction {
//!         if section == Section::Head {
//!             cell.content = cell.content.to_uppercase();
//!         }
//!         HookAction::Continue
//!     }
//! }
//! ```

use crate::model::{Cell, Row, Section, StyleMap};

/// Action returned by hook methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HookAction {
    /// Keep the element.
    #[default]
    Continue,

    /// Leave the element out of the model.
    Skip,
}

impl HookAction {
    /// Check if this action drops the element.
    pub fn should_skip(&self) -> bool {
        matches!(self, HookAction::Skip)
    }
}

/// Callbacks invoked while a table is extracted.
///
/// All methods return `HookAction::Continue` by default.
pub trait ExtractHook {
    /// Called for each visible cell, before it is added to its row.
    ///
    /// # Arguments
    /// * `section` - Section of the owning row
    /// * `cell` - The cell, mutable
    fn visit_cell(&mut self, section: Section, cell: &mut Cell) -> HookAction {
        let _ = (section, cell);
        HookAction::Continue
    }

    /// Called for each retained row, before it is added to its section.
    ///
    /// # Arguments
    /// * `section` - Target section
    /// * `row` - The row, mutable
    /// * `row_styles` - The row's resolved styles when style resolution is on
    fn visit_row(
        &mut self,
        section: Section,
        row: &mut Row,
        row_styles: Option<&StyleMap>,
    ) -> HookAction {
        let _ = (section, row, row_styles);
        HookAction::Continue
    }
}

/// Hook that keeps everything unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl ExtractHook for NoopHook {}

/// Runs several hooks in order; the first `Skip` wins.
#[derive(Default)]
pub struct CompositeHook {
    hooks: Vec<Box<dyn ExtractHook>>,
}

impl CompositeHook {
    /// Create an empty composite hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hook to the chain.
    pub fn add<H: ExtractHook + 'static>(mut self, hook: H) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Number of hooks in the chain.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl ExtractHook for CompositeHook {
    fn visit_cell(&mut self, section: Section, cell: &mut Cell) -> HookAction {
        for hook in &mut self.hooks {
            if hook.visit_cell(section, cell).should_skip() {
                return HookAction::Skip;
            }
        }
        HookAction::Continue
    }

    fn visit_row(
        &mut self,
        section: Section,
        row: &mut Row,
        row_styles: Option<&StyleMap>,
    ) -> HookAction {
        for hook in &mut self.hooks {
            if hook.visit_row(section, row, row_styles).should_skip() {
                return HookAction::Skip;
            }
        }
        HookAction::Continue
    }
}
