//! Export engine adapters.

mod context;
mod template;

pub use context::RenderContext;
pub use template::{DEFAULT_TEMPLATE, TemplateEngine};
