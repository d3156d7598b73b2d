//! PDF page-text extraction.
//!
//! Pages are visited in ascending page-number order and each page's text
//! is extracted independently, so the loader can apply its no-separator
//! concatenation contract.

use std::path::Path;

use crate::{LoadError, PageSource};

/// Page source reading PDF files through lopdf.
pub struct PdfFile;

impl PageSource for PdfFile {
    fn pages(&self, path: &Path) -> Result<Vec<String>, LoadError> {
        let document = lopdf::Document::load(path).map_err(|e| LoadError::extract(path, e))?;

        let mut pages = Vec::new();
        for &number in document.get_pages().keys() {
            let text = document
                .extract_text(&[number])
                .map_err(|e| LoadError::extract(path, e))?;
            pages.push(text);
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use lopdf::{
        Document, Object, Stream,
        content::{Content, Operation},
        dictionary,
    };
    use tempfile::TempDir;

    use super::*;

    /// Builds a single-page PDF with the given text drawn on it.
    fn write_pdf(dir: &Path, text: &str) -> std::path::PathBuf {
        let path = dir.join("test.pdf");

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 48.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(&path).unwrap();

        path
    }

    #[test]
    fn extracts_page_text() {
        let temp = TempDir::new().unwrap();
        let path = write_pdf(temp.path(), "Hello from sift");

        let pages = PdfFile.pages(&path).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("Hello from sift"));
    }

    #[test]
    fn missing_file_is_extract_error() {
        let temp = TempDir::new().unwrap();
        let result = PdfFile.pages(&temp.path().join("gone.pdf"));
        assert!(matches!(result, Err(LoadError::Extract { .. })));
    }
}
