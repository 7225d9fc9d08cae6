//! DOCX text extraction
//!
//! A .docx file is a zip archive with the document body in
//! `word/document.xml`. Text runs live in `<w:t>` elements; a closing
//! `</w:p>` ends a paragraph and becomes a newline so paragraph structure
//! survives into cleaning.

use quick_xml::Reader;
use quick_xml::events::Event;
use soalgen_application::ports::document_source::ExtractionError;
use soalgen_domain::SourceFormat;
use std::fmt::Display;
use std::io::{Cursor, Read};

const DOCUMENT_ENTRY: &str = "word/document.xml";

fn malformed(reason: impl Display) -> ExtractionError {
    ExtractionError::Malformed {
        format: SourceFormat::Docx,
        reason: reason.to_string(),
    }
}

pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| malformed(e))?;
    let mut entry = archive.by_name(DOCUMENT_ENTRY).map_err(|e| malformed(e))?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml).map_err(|e| malformed(e))?;
    paragraph_text(&xml)
}

fn paragraph_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;
    loop {
        match reader.read_event().map_err(|e| malformed(e))? {
            Event::Start(ref element) if element.name().as_ref() == b"w:t" => {
                in_run_text = true;
            }
            Event::End(ref element) => match element.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(content) if in_run_text => {
                text.push_str(&content.unescape().map_err(|e| malformed(e))?);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}
