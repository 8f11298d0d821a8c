// ABOUTME: In-memory template source
// ABOUTME: Maps template names to text for embedding hosts and tests

use std::collections::HashMap;
use std::io;

use super::TemplateSource;

/// An in-memory name-to-text store.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    templates: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(name.into(), text.into());
    }

    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }
}

impl TemplateSource for MemorySource {
    fn read(&self, name: &str) -> io::Result<String> {
        self.templates.get(name).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no template named '{}'", name),
            )
        })
    }
}
