//! Table extraction module.

mod accessor;
mod content;
mod diagnostic;
mod extractor;
pub mod hooks;
mod html;
mod options;

pub use accessor::DocumentAccessor;
pub use content::ContentNormalizer;
pub use diagnostic::{CollectingReporter, Diagnostic, DiagnosticReporter, LogReporter};
pub use extractor::{TableExtractor, TableSource};
pub use hooks::{CompositeHook, ExtractHook, HookAction, NoopHook};
pub use html::{HtmlAccessor, HtmlDocument};
pub use options::ExtractOptions;
