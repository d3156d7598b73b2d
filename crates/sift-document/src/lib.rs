//! Document discovery and text loading for sift.
//!
//! A document folder is scanned recursively for the three supported
//! formats (`.txt`, `.docx`, `.pdf`); everything else is ignored. Content
//! is loaded lazily, one document at a time, and never cached across
//! analysis passes:
//!
//! - plain text is read as UTF-8 bytes,
//! - Word documents are flattened to paragraphs joined with single spaces,
//! - PDFs are page texts concatenated with no separator.
//!
//! The docx/pdf parsers sit behind the [`ParagraphSource`] and
//! [`PageSource`] seams so callers (and tests) never depend on a concrete
//! parser.

mod discover;
mod docx;
mod error;
mod format;
mod loader;
mod pdf;

pub use discover::{DiscoveredDocument, discover_documents};
pub use docx::DocxFile;
pub use error::LoadError;
pub use format::DocumentFormat;
pub use loader::{Loader, PageSource, ParagraphSource};
pub use pdf::PdfFile;
