// ABOUTME: Filesystem-backed template source
// ABOUTME: Resolves template names as paths, optionally under a fixed root directory

use std::fs;
use std::io;
use std::path::PathBuf;

use super::TemplateSource;

/// Reads templates from the filesystem. Names are treated as paths; with a
/// root directory configured they are joined under it.
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    root: Option<PathBuf>,
}

impl FsSource {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}

impl TemplateSource for FsSource {
    fn read(&self, name: &str) -> io::Result<String> {
        let path = match &self.root {
            Some(root) => root.join(name),
            None => PathBuf::from(name),
        };
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_reads_relative_to_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("greeting.tpl"), "Hello {{name}}").unwrap();

        let source = FsSource::with_root(dir.path());
        assert_eq!(source.read("greeting.tpl").unwrap(), "Hello {{name}}");
    }

    #[test]
    fn test_directory_read_is_not_reported_as_missing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("partials")).unwrap();

        let source = FsSource::with_root(dir.path());
        let err = source.read("partials").unwrap_err();
        assert_ne!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let source = FsSource::with_root(dir.path());

        let err = source.read("absent.tpl").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
