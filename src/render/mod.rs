//! Rendering module: text placement onto a drawing backend, and model
//! renderers for JSON, Markdown and plain text output.

mod backend;
mod json;
mod markdown;
mod options;
mod placer;
mod recording;
mod text;

pub use backend::{DrawingBackend, PaintAlign, PaintOptions, TextContent};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::PlacementOptions;
pub use placer::{CellBox, TextPlacer, DEFAULT_JUSTIFY_WIDTH, FONT_ROW_RATIO};
pub use recording::{PaintCall, RecordingBackend};
pub use text::to_text;
