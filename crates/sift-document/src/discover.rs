//! Document discovery.
//!
//! Walks a root directory recursively and returns the files whose
//! extension maps to a supported format. Unsupported files, directories,
//! symlinks, and unreadable entries are skipped silently.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::DocumentFormat;

/// A document found during a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDocument {
    /// Absolute (or root-relative, if the root was relative) path.
    pub abs_path: PathBuf,
    /// Path relative to the scanned root.
    pub rel_path: PathBuf,
    /// Format inferred from the extension.
    pub format: DocumentFormat,
}

impl DiscoveredDocument {
    /// File name used for display, lossily decoded.
    pub fn name(&self) -> String {
        self.abs_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Discovers all supported documents under `root`, recursively.
///
/// Results are sorted by relative path so repeated scans of the same tree
/// process documents in a stable order.
pub fn discover_documents(root: &Path) -> Vec<DiscoveredDocument> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::debug!(%error, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(format) = DocumentFormat::from_path(entry.path()) else {
            continue;
        };

        let abs_path = entry.path().to_path_buf();
        let rel_path = match abs_path.strip_prefix(root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => continue,
        };

        documents.push(DiscoveredDocument {
            abs_path,
            rel_path,
            format,
        });
    }

    documents.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    documents
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn finds_supported_files_recursively() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "text").unwrap();
        fs::write(temp.path().join("b.docx"), "fake docx").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/c.pdf"), "fake pdf").unwrap();
        fs::write(temp.path().join("ignored.md"), "markdown").unwrap();

        let documents = discover_documents(temp.path());

        assert_eq!(documents.len(), 3);
        let rel: Vec<_> = documents.iter().map(|d| d.rel_path.clone()).collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.docx"),
                PathBuf::from("nested/c.pdf"),
            ]
        );
        assert_eq!(documents[0].format, DocumentFormat::PlainText);
        assert_eq!(documents[1].format, DocumentFormat::WordDocument);
        assert_eq!(documents[2].format, DocumentFormat::Pdf);
    }

    #[test]
    fn name_is_the_file_name() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/report.txt"), "x").unwrap();

        let documents = discover_documents(temp.path());
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].name(), "report.txt");
    }

    #[test]
    fn missing_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        let documents = discover_documents(&temp.path().join("does-not-exist"));
        assert!(documents.is_empty());
    }

    #[test]
    fn uppercase_extensions_are_found() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("LOUD.TXT"), "x").unwrap();

        let documents = discover_documents(temp.path());
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].format, DocumentFormat::PlainText);
    }
}
