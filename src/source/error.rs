// ABOUTME: Error types for template source loading
// ABOUTME: Annotates storage failures with the template file that requested the load

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("in template file '{context_file}': could not find included template '{name}'")]
    NotFound { name: String, context_file: String },

    #[error("in template file '{context_file}': failed to load template '{name}': {source}")]
    Io {
        name: String,
        context_file: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SourceError>;
