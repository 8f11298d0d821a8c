// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for building template trees on disk

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use weft::Renderer;

/// Builds a directory of template files for end-to-end render tests.
pub struct TemplateFixture {
    dir: TempDir,
}

impl TemplateFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a template file under the fixture directory.
    pub fn add(self, name: &str, text: &str) -> Self {
        fs::write(self.dir.path().join(name), text).expect("failed to write template");
        self
    }

    /// Write a linear chain of `length` templates where each one includes the
    /// next and the last is plain text. Returns the fixture and the root
    /// template name; rendering the root performs exactly `length` includes.
    pub fn add_chain(self, length: usize) -> (Self, String) {
        let mut fixture = self;
        for i in 0..length {
            let body = format!("{{{{include \"chain_{}.tpl\"}}}}", i + 1);
            fixture = fixture.add(&format!("chain_{}.tpl", i), &body);
        }
        fixture = fixture.add(&format!("chain_{}.tpl", length), "end");
        (fixture, "chain_0.tpl".to_string())
    }

    /// Create a subdirectory under the fixture directory.
    pub fn add_dir(self, name: &str) -> Self {
        fs::create_dir(self.dir.path().join(name)).expect("failed to create dir");
        self
    }

    /// Write a parameter table file and return its path.
    pub fn add_params(&self, name: &str, json: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, json).expect("failed to write params");
        path
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::from_dir(self.dir.path())
    }
}
