//! Table model types.
//!
//! This module defines the intermediate representation that bridges table
//! extraction and layout. A [`TableModel`] groups rows into head, body and
//! foot sections; each [`Cell`] carries its spans, optional resolved styles
//! and normalized text content.

mod alignment;
mod style;
mod table;

pub use alignment::{Alignment, VerticalAlignment};
pub use style::{Color, FontStyle, Padding, StyleMap, StyleProperty, StyleValue};
pub use table::{Cell, Row, Section, SourceRef, TableModel};

pub(crate) use table::clamp_span;
