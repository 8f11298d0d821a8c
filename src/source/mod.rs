// ABOUTME: Template source module for the weft template renderer
// ABOUTME: Exports the name-to-text storage boundary and its implementations

pub mod error;
pub mod fs;
pub mod memory;

pub use error::{Result, SourceError};
pub use fs::FsSource;
pub use memory::MemorySource;

use tracing::debug;

/// Storage boundary for template text. Implementations resolve a logical
/// template name to its contents and know nothing about includes.
pub trait TemplateSource: Send + Sync {
    fn read(&self, name: &str) -> std::io::Result<String>;
}

/// Load a template by name, annotating failures with the file in which the
/// request was made. `context_file` is purely descriptive and carries no
/// resolution semantics.
pub fn load(source: &dyn TemplateSource, name: &str, context_file: &str) -> Result<String> {
    match source.read(name) {
        Ok(text) => {
            debug!("loaded template '{}' ({} bytes)", name, text.len());
            Ok(text)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(SourceError::NotFound {
            name: name.to_string(),
            context_file: context_file.to_string(),
        }),
        Err(err) => Err(SourceError::Io {
            name: name.to_string(),
            context_file: context_file.to_string(),
            source: err,
        }),
    }
}
