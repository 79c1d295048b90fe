//! Style resolution: from computed CSS declarations to typed cell styles.

mod computed;
mod css;
mod resolver;

pub use computed::ComputedStyle;
pub use css::{CssValueParser, PX_PER_PT};
pub use resolver::{CssStyleResolver, StyleResolver};
