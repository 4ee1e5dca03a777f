// Filesystem document source

use crate::catalog::source_trait::DocumentSource;
use anyhow::Result;
use std::path::PathBuf;

/// Reads documents from a site root on disk (`<root>/static/<name>.json`).
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn document_path(&self, name: &str) -> PathBuf {
        self.root.join("static").join(format!("{}.json", name))
    }
}

#[async_trait::async_trait]
impl DocumentSource for FileSource {
    async fn fetch(&self, name: &str) -> Result<Option<String>> {
        let path = self.document_path(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(body) if body.trim().is_empty() => Ok(None),
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::anyhow!("Failed to read {}: {}", path.display(), e)),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_document(root: &Path, name: &str, body: &str) {
        let path = root.join("static").join(format!("{}.json", name));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_present_document() {
        let dir = TempDir::new().unwrap();
        write_document(dir.path(), "json/mirrored", r#"["a"]"#);

        let source = FileSource::new(dir.path());
        let body = source.fetch("json/mirrored").await.unwrap();
        assert_eq!(body.as_deref(), Some(r#"["a"]"#));
    }

    #[tokio::test]
    async fn test_missing_document_is_none() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path());
        assert!(source.fetch("json/downloads").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_document_is_none() {
        let dir = TempDir::new().unwrap();
        write_document(dir.path(), "json/downloads", "");
        let source = FileSource::new(dir.path());
        assert!(source.fetch("json/downloads").await.unwrap().is_none());
    }
}
