//! Format-dispatched document loading.
//!
//! [`Loader::load`] turns a document path into plain text. Dispatch is by
//! extension; the docx and pdf parsers are reached through seams so they
//! can be replaced in tests. Join semantics are contractual:
//!
//! - docx paragraphs are joined with single spaces (paragraph boundaries
//!   become spaces, not newlines, losing the original line structure),
//! - pdf page texts are concatenated with no separator.

use std::{fs, path::Path};

use crate::{DocumentFormat, DocxFile, LoadError, PdfFile};

/// Source of paragraph texts for a Word document.
pub trait ParagraphSource: Send + Sync {
    /// Returns the document's paragraph texts, in document order.
    fn paragraphs(&self, path: &Path) -> Result<Vec<String>, LoadError>;
}

/// Source of per-page texts for a PDF document.
pub trait PageSource: Send + Sync {
    /// Returns the extracted text of each page, in page order.
    fn pages(&self, path: &Path) -> Result<Vec<String>, LoadError>;
}

/// Loads document content as plain text, dispatching on format.
pub struct Loader {
    /// Word-document paragraph extractor.
    docx: Box<dyn ParagraphSource>,
    /// PDF page-text extractor.
    pdf: Box<dyn PageSource>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Creates a loader backed by the bundled docx and pdf extractors.
    pub fn new() -> Self {
        Self {
            docx: Box::new(DocxFile),
            pdf: Box::new(PdfFile),
        }
    }

    /// Creates a loader with caller-supplied format extractors.
    pub fn with_sources(docx: Box<dyn ParagraphSource>, pdf: Box<dyn PageSource>) -> Self {
        Self { docx, pdf }
    }

    /// Loads the textual content of the document at `path`.
    ///
    /// The format is re-inferred from the extension; a path with an
    /// unsupported extension is an error here because discovery filters
    /// such files out before loading.
    pub fn load(&self, path: &Path) -> Result<String, LoadError> {
        let format = DocumentFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        match format {
            DocumentFormat::PlainText => {
                let bytes = fs::read(path).map_err(|e| LoadError::io(path, e))?;
                String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 {
                    path: path.to_path_buf(),
                })
            }
            DocumentFormat::WordDocument => Ok(self.docx.paragraphs(path)?.join(" ")),
            DocumentFormat::Pdf => Ok(self.pdf.pages(path)?.concat()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    /// Paragraph source returning a fixed list regardless of path.
    struct FixedParagraphs(Vec<&'static str>);

    impl ParagraphSource for FixedParagraphs {
        fn paragraphs(&self, _path: &Path) -> Result<Vec<String>, LoadError> {
            Ok(self.0.iter().map(|p| (*p).to_string()).collect())
        }
    }

    /// Page source returning a fixed list regardless of path.
    struct FixedPages(Vec<&'static str>);

    impl PageSource for FixedPages {
        fn pages(&self, _path: &Path) -> Result<Vec<String>, LoadError> {
            Ok(self.0.iter().map(|p| (*p).to_string()).collect())
        }
    }

    fn loader_with(docx: Vec<&'static str>, pdf: Vec<&'static str>) -> Loader {
        Loader::with_sources(Box::new(FixedParagraphs(docx)), Box::new(FixedPages(pdf)))
    }

    #[test]
    fn plain_text_reads_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.txt");
        fs::write(&path, "héllo world").unwrap();

        let content = Loader::new().load(&path).unwrap();
        assert_eq!(content, "héllo world");
    }

    #[test]
    fn plain_text_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let result = Loader::new().load(&path);
        assert!(matches!(result, Err(LoadError::InvalidUtf8 { .. })));
    }

    #[test]
    fn missing_text_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = Loader::new().load(&temp.path().join("gone.txt"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn docx_paragraphs_join_with_single_spaces() {
        let loader = loader_with(vec!["First paragraph.", "Second.", ""], vec![]);
        let content = loader.load(Path::new("anything.docx")).unwrap();
        // An empty trailing paragraph still contributes a separator.
        assert_eq!(content, "First paragraph. Second. ");
    }

    #[test]
    fn pdf_pages_concatenate_without_separator() {
        let loader = loader_with(vec![], vec!["page one", "page two"]);
        let content = loader.load(Path::new("anything.pdf")).unwrap();
        assert_eq!(content, "page onepage two");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let result = Loader::new().load(Path::new("notes.md"));
        assert!(matches!(result, Err(LoadError::UnsupportedFormat { .. })));
    }
}
