//! Document format inference.

use std::path::Path;

/// A supported document format, inferred from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// A UTF-8 plain-text file (`.txt`).
    PlainText,
    /// A Word document (`.docx`).
    WordDocument,
    /// A PDF document (`.pdf`).
    Pdf,
}

impl DocumentFormat {
    /// Infers the format from a path's extension, case-insensitively.
    ///
    /// Returns `None` for unsupported or missing extensions; callers skip
    /// such files silently.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::PlainText),
            "docx" => Some(Self::WordDocument),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Canonical lowercase extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::WordDocument => "docx",
            Self::Pdf => "pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn recognizes_supported_extensions() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("notes.txt")),
            Some(DocumentFormat::PlainText)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("report.docx")),
            Some(DocumentFormat::WordDocument)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("paper.pdf")),
            Some(DocumentFormat::Pdf)
        );
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("NOTES.TXT")),
            Some(DocumentFormat::PlainText)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("Report.DocX")),
            Some(DocumentFormat::WordDocument)
        );
    }

    #[test]
    fn rejects_unsupported_extensions() {
        assert_eq!(DocumentFormat::from_path(Path::new("image.png")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("notes.md")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("no_extension")), None);
    }
}
