// ABOUTME: Main library module for the weft template renderer
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod render;
pub mod source;
pub mod table;

// Re-export commonly used types
pub use render::{Renderer, TemplateError, MAX_INCLUDE_DEPTH};
pub use source::{FsSource, MemorySource, SourceError, TemplateSource};
pub use table::{Cell, Column, ColumnKind, Table, TableError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
