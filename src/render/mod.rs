// ABOUTME: Rendering module for the weft template renderer
// ABOUTME: Exports the include-aware renderer built on Handlebars

pub mod engine;
pub mod error;
pub mod include;

pub use engine::Renderer;
pub use error::{Result, TemplateError};
pub use include::MAX_INCLUDE_DEPTH;
