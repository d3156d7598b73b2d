//! Word-document paragraph extraction.
//!
//! A `.docx` file is a ZIP container; the body lives in
//! `word/document.xml`. Paragraphs are `<w:p>` elements and their visible
//! text is the concatenation of the `<w:t>` runs inside them. Everything
//! else (styling, tables markup, section properties) is ignored.

use std::{fs::File, io::Read, mem, path::Path};

use quick_xml::{Reader, events::Event};

use crate::{LoadError, ParagraphSource};

/// Paragraph source reading `.docx` containers directly.
pub struct DocxFile;

impl ParagraphSource for DocxFile {
    fn paragraphs(&self, path: &Path) -> Result<Vec<String>, LoadError> {
        let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| LoadError::extract(path, e))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| LoadError::extract(path, e))?
            .read_to_string(&mut xml)
            .map_err(|e| LoadError::extract(path, e))?;

        parse_paragraphs(&xml, path)
    }
}

/// Collects paragraph texts from the body XML of a Word document.
fn parse_paragraphs(xml: &str, path: &Path) -> Result<Vec<String>, LoadError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => match start.local_name().as_ref() {
                b"p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"t" if in_paragraph => in_text = true,
                _ => {}
            },
            Ok(Event::End(end)) => match end.local_name().as_ref() {
                b"p" => {
                    in_paragraph = false;
                    paragraphs.push(mem::take(&mut current));
                }
                b"t" => in_text = false,
                _ => {}
            },
            // A self-closing <w:p/> is an empty paragraph.
            Ok(Event::Empty(empty)) if empty.local_name().as_ref() == b"p" => {
                paragraphs.push(String::new());
            }
            Ok(Event::Text(text)) if in_text => {
                let unescaped = text.unescape().map_err(|e| LoadError::extract(path, e))?;
                current.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(LoadError::extract(path, e)),
        }
    }

    Ok(paragraphs)
}
