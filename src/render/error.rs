// ABOUTME: Error types for template rendering
// ABOUTME: Annotates engine and include failures with the template file where they occurred

use thiserror::Error;

use crate::source::SourceError;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("in template file '{file}': include directive requires exactly {expected} argument, got {got}")]
    Arity {
        expected: usize,
        got: usize,
        file: String,
    },

    #[error("maximum include depth ({limit}) reached in template file '{file}'")]
    DepthExceeded { limit: u32, file: String },

    #[error("in template file '{file}': template syntax error: {detail}")]
    Parse { file: String, detail: String },

    #[error("in template file '{file}': template compile error: {detail}")]
    Compile { file: String, detail: String },

    #[error("in template file '{file}': render error: {detail}")]
    Render { file: String, detail: String },

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl TemplateError {
    /// The template file this failure is attributed to.
    pub fn file(&self) -> &str {
        match self {
            TemplateError::Arity { file, .. }
            | TemplateError::DepthExceeded { file, .. }
            | TemplateError::Parse { file, .. }
            | TemplateError::Compile { file, .. }
            | TemplateError::Render { file, .. } => file,
            TemplateError::Source(SourceError::NotFound { context_file, .. })
            | TemplateError::Source(SourceError::Io { context_file, .. }) => context_file,
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
